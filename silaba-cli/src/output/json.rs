//! JSON output formatter

use super::{error_label, Outcome, OutputFormatter};
use anyhow::Result;
use serde::Serialize;
use silaba_core::AnalysisReport;
use std::io::Write;

/// JSON formatter - outputs results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct WordData {
    /// The word as analyzed
    pub word: String,
    /// Whether the grammar accepts the word
    pub valid: bool,
    /// Full analysis, for accepted words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisReport>,
    /// Failure details, for rejected words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorData>,
}

/// Failure details for JSON output
#[derive(Debug, Serialize)]
pub struct ErrorData {
    /// "Lexical error" or "Syntax error"
    pub kind: &'static str,
    /// Human-readable message
    pub message: String,
    /// Offending position, when the failure has one
    pub position: Option<usize>,
}

impl WordData {
    fn from_outcome(word: &str, outcome: &Outcome) -> Self {
        match outcome {
            Ok(analysis) => Self {
                word: word.to_string(),
                valid: true,
                analysis: Some(analysis.report()),
                error: None,
            },
            Err(error) => Self {
                word: word.to_string(),
                valid: false,
                analysis: None,
                error: Some(ErrorData {
                    kind: error_label(error),
                    message: error.to_string(),
                    position: error.position(),
                }),
            },
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_outcome(&mut self, word: &str, outcome: &Outcome) -> Result<()> {
        self.entries.push(WordData::from_outcome(word, outcome));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
