//! Silaba command-line entry point

use anyhow::Result;
use clap::Parser;
use silaba_cli::commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;
    cli.run()
}
