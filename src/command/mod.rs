//! Command interpretation pipeline
//!
//! message -> Interpreter -> InterpreterResponse -> render (chat text | API JSON)

pub mod interpreter;
pub mod render;

pub use interpreter::{
    interpret, shared, try_interpret, Interpreter, InterpreterResponse, EXAMPLE_PROMPTS,
};
