//! Configuration loading for Filesmith
//!
//! Reads user settings from a TOML file and layers `FILESMITH_*`
//! environment variables on top. Missing files are not an error; every
//! setting has a default.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

// Re-export public API
pub use error::{ConfigError, Result};
pub use loader::ConfigLoader;
pub use types::Config;
