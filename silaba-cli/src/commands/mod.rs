//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod analyze;
pub mod list;
pub mod repl;

pub use analyze::AnalyzeArgs;
pub use repl::ReplArgs;

/// Phonotactic analyzer for a small fictional language
#[derive(Debug, Parser)]
#[command(name = "silaba", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: interactive shell)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE", env = "SILABA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }

    /// Load configuration and dispatch to the selected command
    pub fn run(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        log::debug!("Configuration: {:?}", config);

        match &self.command {
            None => ReplArgs::default().execute(&config),
            Some(Commands::Repl(args)) => args.execute(&config),
            Some(Commands::Analyze(args)) => args.execute(&config),
            Some(Commands::List { subcommand }) => subcommand.execute(),
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive shell
    Repl(ReplArgs),

    /// Analyze words given as arguments or read from files
    Analyze(AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ListCommands {
    /// List unit patterns with their weights
    Patterns,

    /// List available output formats
    Formats,
}
