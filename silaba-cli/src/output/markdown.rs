//! Markdown output formatter

use super::{error_label, Outcome, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs results as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
    valid_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
            valid_count: 0,
        }
    }
}

/// Escape characters that would split a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_outcome(&mut self, word: &str, outcome: &Outcome) -> Result<()> {
        let word = escape_cell(word);
        if self.word_count == 0 {
            writeln!(self.writer, "| # | Word | Result | Units | Expression |")?;
            writeln!(self.writer, "|---|---|---|---|---|")?;
        }
        self.word_count += 1;

        match outcome {
            Ok(analysis) => {
                self.valid_count += 1;
                let units: Vec<&str> = analysis.ast().units().iter().map(|u| u.text()).collect();
                writeln!(
                    self.writer,
                    "| {} | {} | valid | {} | `{}` |",
                    self.word_count,
                    word,
                    units.join(" · "),
                    analysis.semantics()
                )?;
            }
            Err(error) => {
                writeln!(
                    self.writer,
                    "| {} | {} | {}: {} | | |",
                    self.word_count,
                    word,
                    error_label(error),
                    error
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {} (valid: {}, rejected: {})*",
            self.word_count,
            self.valid_count,
            self.word_count - self.valid_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
