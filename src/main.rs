//! Zeno Assistant - Entry Point
//!
//! Interprets a single message given on the command line, or runs an
//! interactive session reading one message per line from stdin.

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zeno_assistant::command::render::{api_json, chat_reply};
use zeno_assistant::command::{shared, Interpreter, EXAMPLE_PROMPTS};
use zeno_assistant::core::config::{self, InterpreterConfig};
use zeno_assistant::core::error::{AssistantError, Result};

/// Zara - natural language commands for the Zeno productivity app
#[derive(Parser, Debug)]
#[command(name = "zeno-assistant")]
#[command(about = "Interpret productivity commands into app actions")]
struct Args {
    /// Message to interpret (omit to start an interactive session)
    message: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Chat)]
    format: OutputFormat,

    /// Interpreter config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run the built-in example prompts
    #[arg(long)]
    examples: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Reply text with an action summary
    Chat,
    /// API JSON body
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries replies
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("zeno_assistant=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let loaded = InterpreterConfig::load(path)?;
        config::set_config(loaded)
            .map_err(|_| AssistantError::Config("config already initialized".into()))?;
    }
    let interpreter = shared()?;

    if args.examples {
        for prompt in EXAMPLE_PROMPTS {
            println!("> {}", prompt);
            print_reply(interpreter, prompt, args.format)?;
            println!();
        }
        return Ok(());
    }

    if !args.message.is_empty() {
        let message = args.message.join(" ");
        return print_reply(interpreter, &message, args.format);
    }

    run_session(interpreter, args.format)
}

/// Read messages from stdin until quit or end of input
fn run_session(interpreter: &Interpreter, format: OutputFormat) -> Result<()> {
    println!("\n=== ZARA ===");
    println!("Your productivity assistant. Type a message, or 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        print_reply(interpreter, input, format)?;
        println!();
    }

    println!("\nGoodbye!");
    Ok(())
}

fn print_reply(interpreter: &Interpreter, message: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Chat => println!("{}", chat_reply(&interpreter.respond(message))),
        OutputFormat::Json => println!("{}", api_json(interpreter.try_interpret(message))?),
    }
    Ok(())
}
