//! Repl command implementation

use crate::config::CliConfig;
use crate::repl::{self, ReplSettings};
use anyhow::Result;
use clap::Args;
use std::io;

/// Arguments for the interactive shell
#[derive(Debug, Default, Args)]
pub struct ReplArgs {
    /// Do not print the usage banner
    #[arg(long)]
    pub no_intro: bool,

    /// Prompt printed before each line (default: from config)
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,
}

impl ReplArgs {
    /// Settings after applying arguments over the configuration
    pub fn settings(&self, config: &CliConfig) -> ReplSettings {
        let mut settings = ReplSettings::from(&config.repl);
        if self.no_intro {
            settings.show_intro = false;
        }
        if let Some(prompt) = &self.prompt {
            settings.prompt = prompt.clone();
        }
        settings
    }

    /// Run the shell on stdin and stdout
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let settings = self.settings(config);
        log::info!("Starting interactive shell");

        let stdin = io::stdin();
        let stdout = io::stdout();
        repl::run(stdin.lock(), stdout.lock(), &settings)
    }
}
