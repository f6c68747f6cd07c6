//! Command execution for the interactive shell
//!
//! The shell keeps a single piece of state between lines: the last word that
//! passed every stage. Steps never touch it directly. They receive it as an
//! argument and return a [`Step`] telling the loop whether to replace it.

use super::command::Command;
use super::messages::{NO_SAVED_WORD, SEMANTIC_RULES, VALID};
use crate::output::error_label;
use anyhow::Result;
use silaba_core::{analyze, Analysis, AnalysisError};
use std::io::Write;

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Read the next line
    Continue,
    /// Remember this word as the last valid one, then read the next line
    Save(String),
    /// Leave the shell
    Exit,
}

/// Execute one command against the current last valid word
pub fn execute<W: Write>(command: Command, last_valid: Option<&str>, out: &mut W) -> Result<Step> {
    match command {
        Command::Empty => Ok(Step::Continue),
        Command::Exit => Ok(Step::Exit),
        Command::Semantics => {
            show_semantics(last_valid, out)?;
            Ok(Step::Continue)
        }
        Command::Analyze(word) => analyze_word(word, out),
    }
}

fn analyze_word<W: Write>(word: String, out: &mut W) -> Result<Step> {
    match analyze(&word) {
        Ok(analysis) => {
            print_analysis(&analysis, out)?;
            writeln!(out, "{VALID}")?;
            log::info!("Accepted {word:?}");
            Ok(Step::Save(word))
        }
        Err(error) => {
            writeln!(out, "{}: {error}", error_label(&error))?;
            log::info!("Rejected {word:?}: {error}");
            Ok(Step::Continue)
        }
    }
}

fn show_semantics<W: Write>(last_valid: Option<&str>, out: &mut W) -> Result<()> {
    write!(out, "{SEMANTIC_RULES}")?;

    let Some(word) = last_valid else {
        writeln!(out, "{NO_SAVED_WORD}")?;
        return Ok(());
    };

    match analyze(word) {
        Ok(analysis) => {
            print_analysis(&analysis, out)?;
            writeln!(out, "{}", analysis.semantics())?;
        }
        Err(error) => writeln!(out, "{}", saved_word_failure(&error))?,
    }
    Ok(())
}

/// Lexical and grammar failures name the saved word; a partition failure
/// reads like a fresh syntax error.
fn saved_word_failure(error: &AnalysisError) -> String {
    match error {
        AnalysisError::Unsegmentable(_) => format!("{}: {error}", error_label(error)),
        _ => format!("{} in saved word: {error}", error_label(error)),
    }
}

fn print_analysis<W: Write>(analysis: &Analysis, out: &mut W) -> Result<()> {
    writeln!(out, "Lexical tokens:")?;
    writeln!(out, "{}", analysis.token_line())?;
    writeln!(out, "Syntactic units:")?;
    writeln!(out, "{}", analysis.unit_line())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_step(line: &str, last_valid: Option<&str>) -> (Step, String) {
        let mut out = Vec::new();
        let step = execute(Command::parse(line), last_valid, &mut out).unwrap();
        (step, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_valid_word_is_saved() {
        let (step, out) = run_step("AGUA", None);
        assert_eq!(step, Step::Save("agua".to_string()));
        assert_eq!(
            out,
            "Lexical tokens:\n\
             a:V(0) g:C(1) u:V(2) a:V(3)\n\
             Syntactic units:\n\
             Unit:V(a)@0 Unit:CV(gu)@1 Unit:V(a)@3\n\
             Valid\n"
        );
    }

    #[test]
    fn test_rejected_word_is_not_saved() {
        let (step, out) = run_step("ab3c", Some("agua"));
        assert_eq!(step, Step::Continue);
        assert_eq!(out, "Lexical error: non-alphabetic character at position 2\n");

        let (step, out) = run_step("kat", Some("agua"));
        assert_eq!(step, Step::Continue);
        assert_eq!(
            out,
            "Syntax error: string does not end in a vowel at position 2\n"
        );
    }

    #[test]
    fn test_semantics_without_saved_word() {
        let (step, out) = run_step("1", None);
        assert_eq!(step, Step::Continue);
        assert!(out.starts_with(SEMANTIC_RULES));
        assert!(out.ends_with("No word saved for semantic analysis\n"));
    }

    #[test]
    fn test_semantics_on_saved_word() {
        let (_, out) = run_step("1", Some("agua"));
        assert!(out.ends_with(
            "Syntactic units:\n\
             Unit:V(a)@0 Unit:CV(gu)@1 Unit:V(a)@3\n\
             x = +97 -103 +117 +97\n"
        ));
    }

    #[test]
    fn test_semantics_reports_broken_saved_word() {
        let (_, out) = run_step("1", Some("xyz"));
        assert!(out.ends_with(
            "Syntax error in saved word: string does not end in a vowel at position 2\n"
        ));
    }

    #[test]
    fn test_saved_word_failure_prefixes() {
        let lexical = analyze("ab3c").unwrap_err();
        assert_eq!(
            saved_word_failure(&lexical),
            "Lexical error in saved word: non-alphabetic character at position 2"
        );

        let partition = AnalysisError::from(silaba_core::Unsegmentable);
        assert_eq!(
            saved_word_failure(&partition),
            "Syntax error: string cannot be partitioned"
        );
    }

    #[test]
    fn test_exit_and_empty() {
        assert_eq!(run_step("0", Some("agua")), (Step::Exit, String::new()));
        assert_eq!(run_step("   ", None), (Step::Continue, String::new()));
    }
}
