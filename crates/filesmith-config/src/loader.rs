//! Configuration loading from files and the environment

use std::path::{Path, PathBuf};

use config::{Environment, File};
use tracing::debug;

use crate::error::Result;
use crate::types::Config;

/// Loads configuration from a TOML file with environment overrides
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a loader pointing at the default config location.
    pub fn new() -> Self {
        let config_path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("filesmith")
            .join("config.toml");
        Self {
            config_path,
            env_prefix: "FILESMITH".to_string(),
        }
    }

    /// Creates a loader reading from an explicit config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: "FILESMITH".to_string(),
        }
    }

    /// Returns the path this loader reads from.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the configuration, layering `FILESMITH_*` environment
    /// variables over the file. A missing file yields defaults.
    pub fn load(&self) -> Result<Config> {
        let settings = config::Config::builder()
            .add_source(File::from(self.config_path.as_path()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        debug!(path = %self.config_path.display(), "loaded configuration");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_loader_points_at_config_toml() {
        let loader = ConfigLoader::new();
        assert!(loader.config_path().ends_with("filesmith/config.toml"));
    }

    #[test]
    fn with_path_stores_the_given_path() {
        let loader = ConfigLoader::with_path("/etc/filesmith.toml");
        assert_eq!(loader.config_path(), Path::new("/etc/filesmith.toml"));
    }
}
