//! List command implementation

use super::ListCommands;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::ValueEnum;
use silaba_core::UnitPattern;
use std::io::{self, Write};

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the listing, one entry per line
    pub fn write_to<W: Write>(self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Patterns => {
                writeln!(out, "Unit patterns (in tie-break order):")?;
                for pattern in UnitPattern::ALL {
                    writeln!(out, "  {:<5} {:>6}", pattern.name(), pattern.weight())?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                        writeln!(out, "  {:<9} - {}", value.get_name(), help)?;
                    }
                }
            }
        }
        Ok(())
    }
}
