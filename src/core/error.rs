use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Evaluation failed: {0}")]
    Evaluation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssistantError>;
