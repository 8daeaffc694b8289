//! Interpreter configuration
//!
//! Holds the handful of defaults the extractors fall back to when a message
//! does not carry the value itself. Trigger phrases and priority keywords are
//! fixed behavior and deliberately not part of the configuration.

use crate::core::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the intent interpreter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Focus session length (minutes) when the message names no duration
    pub default_focus_minutes: u32,

    /// Characters of note content kept in the note title
    ///
    /// Longer content is cut to this many characters and suffixed with "...".
    pub note_title_limit: usize,

    /// Task title used when no title can be captured from the message
    pub default_task_title: String,

    /// Note content used when no content can be captured from the message
    pub default_note_content: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            default_focus_minutes: 25,
            note_title_limit: 50,
            default_task_title: "New Task".to_string(),
            default_note_content: "Quick note created by AI".to_string(),
        }
    }
}

impl InterpreterConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file and validate it
    ///
    /// Missing keys take their default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded interpreter config");
        Ok(config)
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: InterpreterConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.default_focus_minutes == 0 {
            return Err(AssistantError::Config(
                "default_focus_minutes must be positive".into(),
            ));
        }

        if self.note_title_limit == 0 {
            return Err(AssistantError::Config(
                "note_title_limit must be positive".into(),
            ));
        }

        if self.default_task_title.trim().is_empty() {
            return Err(AssistantError::Config(
                "default_task_title must not be blank".into(),
            ));
        }

        if self.default_note_content.trim().is_empty() {
            return Err(AssistantError::Config(
                "default_note_content must not be blank".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<InterpreterConfig> = OnceLock::new();

/// Get the global interpreter config (initializes with defaults if not set)
pub fn config() -> &'static InterpreterConfig {
    CONFIG.get_or_init(InterpreterConfig::default)
}

/// Set the global interpreter config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: InterpreterConfig) -> std::result::Result<(), InterpreterConfig> {
    CONFIG.set(config)
}
