// Filesmith CLI Library

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;

pub use commands::{Command, ConfigCommand, MakeCommand, MenuSession, TypesCommand};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, VerbosityLevel};
pub use output::OutputStyle;
pub use router::{Cli, CommandRouter, Commands};
