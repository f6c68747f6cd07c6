//! Plain text output formatter

use super::{error_label, Outcome, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one block per word
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_outcome(&mut self, word: &str, outcome: &Outcome) -> Result<()> {
        match outcome {
            Ok(analysis) => {
                writeln!(self.writer, "{word}: valid")?;
                writeln!(self.writer, "  tokens: {}", analysis.token_line())?;
                writeln!(self.writer, "  units:  {}", analysis.unit_line())?;
                writeln!(self.writer, "  {}", analysis.semantics())?;
            }
            Err(error) => {
                writeln!(self.writer, "{word}: {}: {error}", error_label(error))?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
