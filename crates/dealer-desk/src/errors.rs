use forecourt_config::ConfigError;
use forecourt_core::CoreError;
use thiserror::Error;

/// User-facing error wrapper for the dealer desk binary.
#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}
