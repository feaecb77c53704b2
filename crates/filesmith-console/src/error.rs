//! Error types for console I/O

use thiserror::Error;

/// Errors that can occur while reading from or writing to the console
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream reached end of file
    #[error("input stream closed")]
    Eof,
}
