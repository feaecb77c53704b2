//! Error types for file operations

use std::path::PathBuf;

use filesmith_console::ConsoleError;

/// Errors that can occur during file operations
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// Path has no file name component to replace
    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),

    /// Console interaction failed during collision resolution
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
