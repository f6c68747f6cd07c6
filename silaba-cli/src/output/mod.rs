//! Output formatting module

use anyhow::Result;
use silaba_core::{Analysis, AnalysisError};
use std::io::Write;

/// Outcome of analyzing one word
pub type Outcome = std::result::Result<Analysis, AnalysisError>;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the outcome for one word
    fn format_outcome(&mut self, word: &str, outcome: &Outcome) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable blocks, one per word
    Text,
    /// JSON array of results
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Create the formatter for this format
    pub fn formatter<'a, W: Write + 'a>(
        self,
        writer: W,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Label shown before an error message
pub fn error_label(error: &AnalysisError) -> &'static str {
    if error.is_lexical() {
        "Lexical error"
    } else {
        "Syntax error"
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
