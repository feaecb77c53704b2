//! Error types for configuration loading

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file or environment could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] config::ConfigError),

    /// Configuration value failed validation
    #[error("Validation error: {0}")]
    Validation(String),
}
