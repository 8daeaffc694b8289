//! The interpreter entry point
//!
//! [`Interpreter::interpret`] maps one message to one response and never
//! fails. [`Interpreter::respond`] is the boundary used by callers: any fault
//! raised while evaluating is turned into an apology with no actions.

use crate::actions::catalog::{ActionDescriptor, ActionType};
use crate::core::config::{self, InterpreterConfig};
use crate::core::error::{AssistantError, Result};
use crate::intent::classifier::{classify, Intent};
use crate::intent::extract::{self, Extraction};
use crate::intent::general::classify_general;
use crate::intent::patterns::ExtractionPatterns;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

/// Prompts that demonstrate each capability
pub const EXAMPLE_PROMPTS: [&str; 6] = [
    "Create a task: Finish project proposal with high priority",
    "Start a 25-minute focus session",
    "Show me my current tasks",
    "Create a note: Meeting ideas for tomorrow",
    "Analyze my productivity",
    "Help me plan my day",
];

/// Reply text plus the actions the app should execute
///
/// `actions` is empty for general replies and holds exactly one descriptor
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterResponse {
    pub message: String,
    pub actions: Vec<ActionDescriptor>,
}

impl InterpreterResponse {
    /// A reply that asks for no action
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            actions: Vec::new(),
        }
    }

    /// The user-facing apology for a failed evaluation
    pub fn failure(error: &AssistantError) -> Self {
        Self::reply(format!(
            "Sorry, I encountered an error: {}. Please try again! 🤔",
            error
        ))
    }

    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }
}

impl From<Extraction> for InterpreterResponse {
    fn from(extraction: Extraction) -> Self {
        Self {
            message: extraction.message,
            actions: vec![extraction.action],
        }
    }
}

/// Stateless message interpreter
///
/// Holds only compiled patterns and configuration; calls never affect each
/// other and one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Interpreter {
    patterns: ExtractionPatterns,
    config: InterpreterConfig,
}

impl Interpreter {
    /// Create an interpreter with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(InterpreterConfig::default())
    }

    /// Create an interpreter with explicit configuration
    pub fn with_config(config: InterpreterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            patterns: ExtractionPatterns::compile()?,
            config,
        })
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Map a message to its response
    pub fn interpret(&self, message: &str) -> InterpreterResponse {
        match classify(message) {
            Intent::Action(action_type) => {
                let extraction = self.extract(action_type, message);
                tracing::debug!(
                    action = %action_type,
                    parameters = ?extraction.action,
                    "Action intent matched"
                );
                extraction.into()
            }
            Intent::General => {
                let topic = classify_general(message);
                tracing::debug!(?topic, "No action intent matched");
                InterpreterResponse::reply(topic.reply())
            }
        }
    }

    /// Like [`interpret`](Self::interpret), but reports a panic during
    /// evaluation as [`AssistantError::Evaluation`]
    pub fn try_interpret(&self, message: &str) -> Result<InterpreterResponse> {
        panic::catch_unwind(AssertUnwindSafe(|| self.interpret(message)))
            .map_err(|payload| AssistantError::Evaluation(panic_message(&*payload)))
    }

    /// Interpret a message, converting any fault into an apology
    pub fn respond(&self, message: &str) -> InterpreterResponse {
        self.try_interpret(message).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Interpretation failed");
            InterpreterResponse::failure(&e)
        })
    }

    fn extract(&self, action_type: ActionType, message: &str) -> Extraction {
        let patterns = &self.patterns;
        let config = &self.config;
        match action_type {
            ActionType::CreateTask => extract::extract_task(patterns, config, message),
            ActionType::StartPomodoro => extract::extract_pomodoro(patterns, config, message),
            ActionType::CreateNote => extract::extract_note(patterns, config, message),
            ActionType::ListTasks => extract::list_tasks(),
            ActionType::AnalyzeProductivity => extract::analyze_productivity(),
            ActionType::GenerateDailyPlan => extract::generate_daily_plan(),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

// === SHARED INTERPRETER ===

static SHARED: OnceLock<std::result::Result<Interpreter, String>> = OnceLock::new();

/// The process-wide interpreter, built from the global config on first use
pub fn shared() -> Result<&'static Interpreter> {
    SHARED
        .get_or_init(|| {
            Interpreter::with_config(config::config().clone()).map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| AssistantError::Evaluation(e.clone()))
}

/// Interpret a message with the shared interpreter, reporting faults as errors
pub fn try_interpret(message: &str) -> Result<InterpreterResponse> {
    shared()?.try_interpret(message)
}

/// Interpret a message with the shared interpreter
///
/// Always returns a well-formed response; faults become an apology.
pub fn interpret(message: &str) -> InterpreterResponse {
    try_interpret(message).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Interpretation failed");
        InterpreterResponse::failure(&e)
    })
}
