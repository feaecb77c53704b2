//! Configuration types for Filesmith

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// User configuration for file generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory where generated files are placed, or the current
    /// working directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Author name stamped into document blocks
    pub author: String,
    /// Identification number stamped into document blocks
    pub id_number: String,
    /// Width used when expanding tabs in generated code
    pub tab_width: usize,
}

impl Config {
    /// Largest tab width accepted by validation; rendering expands
    /// every tab to this many spaces.
    pub const MAX_TAB_WIDTH: usize = 16;

    /// Returns the configured output directory, falling back to the
    /// current working directory.
    pub fn output_dir_or_cwd(&self) -> io::Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }

    /// Validates the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.tab_width == 0 {
            return Err(ConfigError::Validation(
                "Tab width must be greater than 0".to_string(),
            ));
        }
        if self.tab_width > Self::MAX_TAB_WIDTH {
            return Err(ConfigError::Validation(format!(
                "Tab width must be {} or less",
                Self::MAX_TAB_WIDTH
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            author: String::new(),
            id_number: String::new(),
            tab_width: 4,
        }
    }
}
