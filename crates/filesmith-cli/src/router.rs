// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use filesmith_config::{Config, ConfigLoader};

use crate::commands::{Command, ConfigCommand, MakeCommand, TypesCommand};
use crate::error::CliResult;

/// Filesmith - Interactive boilerplate file generator
#[derive(Parser, Debug)]
#[command(name = "filesmith")]
#[command(bin_name = "filesmith")]
#[command(about = "Interactive boilerplate file generator")]
#[command(
    long_about = "Filesmith: An interactive boilerplate file generator.\n\nPick a file type from a numbered menu, answer a couple of prompts, and get a ready-to-edit skeleton file with an optional document block.\n\nSupported types:\n  • Python  (.py)\n  • LaTeX   (.tex)\n  • C       (.c)\n  • C++     (.cpp)\n  • Java    (.java)\n\nRunning filesmith with no subcommand starts the interactive menu."
)]
#[command(version)]
#[command(author = "Filesmith Contributors")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory generated files are placed in
    #[arg(short = 'd', long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Author stamped into document blocks
    #[arg(long, global = true, value_name = "NAME")]
    pub author: Option<String>,

    /// ID number stamped into document blocks
    #[arg(long, global = true, value_name = "ID")]
    pub id_number: Option<String>,

    /// Spaces per tab in generated code
    #[arg(long, global = true, value_name = "WIDTH")]
    pub tab_width: Option<usize>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List supported file types
    #[command(about = "List supported file types and their suffixes")]
    Types,

    /// Show the effective configuration
    #[command(about = "Show the configuration after file, environment, and flag overrides")]
    Config,
}

/// Route and execute commands
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        // Initialize logging based on CLI flags
        crate::logging::init_logging(cli.verbose, cli.quiet);

        Self::execute(&cli).await
    }

    /// Execute a command
    pub async fn execute(cli: &Cli) -> CliResult<()> {
        let (config, config_path) = Self::load_config(cli)?;

        match &cli.command {
            Some(Commands::Types) => TypesCommand::new().execute().await,
            Some(Commands::Config) => ConfigCommand::new(config, config_path).execute().await,
            // Default to the interactive menu if no command specified
            None => MakeCommand::new(config).execute().await,
        }
    }

    /// Load configuration and layer flag overrides on top
    fn load_config(cli: &Cli) -> CliResult<(Config, PathBuf)> {
        let loader = match &cli.config {
            Some(path) => ConfigLoader::with_path(path),
            None => ConfigLoader::new(),
        };
        let config_path = loader.config_path().to_path_buf();

        let mut config = loader.load()?;
        if let Some(dir) = &cli.dir {
            config.output_dir = Some(dir.clone());
        }
        if let Some(author) = &cli.author {
            config.author = author.clone();
        }
        if let Some(id_number) = &cli.id_number {
            config.id_number = id_number.clone();
        }
        if let Some(tab_width) = cli.tab_width {
            config.tab_width = tab_width;
        }
        config.validate()?;

        Ok((config, config_path))
    }
}
