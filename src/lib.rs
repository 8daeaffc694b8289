//! Zeno Assistant - rule-based natural language command interpreter
//!
//! Turns a free-text message into a reply plus typed action descriptors
//! for the Zeno productivity app to execute.

pub mod actions;
pub mod command;
pub mod core;
pub mod intent;

pub use crate::actions::{ActionDescriptor, ActionType};
pub use crate::command::{interpret, try_interpret, Interpreter, InterpreterResponse};
pub use crate::core::{AssistantError, InterpreterConfig, Result};
