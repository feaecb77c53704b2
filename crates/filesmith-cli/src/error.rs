// Error types for the filesmith CLI

use filesmith_config::ConfigError;
use filesmith_console::ConsoleError;
use filesmith_files::FileError;
use filesmith_templates::TemplateError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File error: {0}")]
    File(#[from] FileError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Console(e) => {
                format!("Console input failed: {}", e)
            }
            CliError::Config(e) => {
                format!(
                    "Configuration error: {}\n\nCheck your config file or FILESMITH_* environment variables.",
                    e
                )
            }
            CliError::File(e) => {
                format!("File creation failed: {}", e)
            }
            CliError::Template(e) => {
                format!("Template rendering failed: {}", e)
            }
            CliError::Internal(msg) => {
                format!("Internal error: {}\n\nPlease report this issue.", msg)
            }
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    /// Whether this error means the input stream ended
    pub fn is_eof(&self) -> bool {
        matches!(
            self,
            CliError::Console(ConsoleError::Eof)
                | CliError::File(FileError::Console(ConsoleError::Eof))
        )
    }
}

pub type CliResult<T> = Result<T, CliError>;
