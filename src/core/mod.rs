pub mod config;
pub mod error;

pub use config::InterpreterConfig;
pub use error::{AssistantError, Result};
