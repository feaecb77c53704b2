// Command handlers for the filesmith CLI

pub mod config;
pub mod make;
pub mod types;

pub use config::ConfigCommand;
pub use make::{MakeCommand, MenuSession};
pub use types::TypesCommand;

use crate::error::CliResult;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}
