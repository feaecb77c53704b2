// Show the effective configuration

use std::path::PathBuf;

use async_trait::async_trait;

use filesmith_config::Config;

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Print the effective configuration and where it came from
pub struct ConfigCommand {
    config: Config,
    config_path: PathBuf,
}

impl ConfigCommand {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
        }
    }
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        println!("{}", style.section("Configuration"));

        let source = if self.config_path.exists() {
            format!("{}", self.config_path.display())
        } else {
            format!(
                "{} (not found, using defaults)",
                self.config_path.display()
            )
        };
        println!("{}", style.key_value("Config file", &source));
        println!();

        let rendered = toml::to_string_pretty(&self.config)
            .map_err(|e| CliError::Internal(format!("Failed to render configuration: {}", e)))?;
        print!("{}", rendered);
        Ok(())
    }
}
