//! Analyze command implementation

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader};
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use silaba_core::analyze;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Words to analyze
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Input files or patterns with one word per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Exit with an error if any word is rejected
    #[arg(long)]
    pub strict: bool,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let words = self.collect_words()?;
        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        log::info!("Analyzing {} words as {:?}", words.len(), format);

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter = format.formatter(writer, config.output.pretty_json);

        let mut rejected = 0;
        for word in &words {
            let outcome = analyze(word);
            if outcome.is_err() {
                rejected += 1;
            }
            formatter.format_outcome(word, &outcome)?;
        }
        formatter.finish()?;

        log::info!("{} accepted, {} rejected", words.len() - rejected, rejected);
        if self.strict && rejected > 0 {
            return Err(CliError::RejectedWords {
                rejected,
                total: words.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Words from arguments first, then from each input file in path order,
    /// lower-cased like the interactive shell does
    pub fn collect_words(&self) -> CliResult<Vec<String>> {
        if self.words.is_empty() && self.input.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let mut words: Vec<String> = self.words.iter().map(|w| w.trim().to_string()).collect();
        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                log::debug!("Reading {}", path.display());
                words.extend(FileReader::read_words(&path)?);
            }
        }

        Ok(words
            .into_iter()
            .map(|word| word.to_ascii_lowercase())
            .collect())
    }
}
