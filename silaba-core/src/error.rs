//! Layered error types
//!
//! Each pipeline stage owns one failure kind. [`AnalysisError`] joins them
//! for callers that run the whole pipeline at once.

use thiserror::Error;

/// Lexical failure: the first non-alphabetic character in the input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("non-alphabetic character at position {position}")]
pub struct LexError {
    /// 0-based index of the offending character
    pub position: usize,
}

/// Grammar rule checked by the validator, in evaluation order
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarRule {
    /// The input has no characters
    #[error("empty input")]
    EmptyInput,

    /// Four or more vowels in a row
    #[error("more than 3 consecutive vowels")]
    TooManyVowels,

    /// The last character is not a vowel
    #[error("string does not end in a vowel")]
    MissingFinalVowel,

    /// A consonant run of length two or more is badly placed
    #[error("invalid consonant sequence")]
    InvalidConsonantRun,
}

/// Grammar failure with the position that triggered it
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{rule} at position {position}")]
pub struct ValidationError {
    /// Violated rule; its display text is the human-readable reason
    pub rule: GrammarRule,
    /// 0-based index the rule points at
    pub position: usize,
}

impl ValidationError {
    pub(crate) fn new(rule: GrammarRule, position: usize) -> Self {
        Self { rule, position }
    }

    /// Human-readable reason, without the position
    pub fn reason(&self) -> String {
        self.rule.to_string()
    }
}

/// Structural failure: no partition of the whole string exists
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("string cannot be partitioned")]
pub struct Unsegmentable;

/// Any failure of the full analysis pipeline
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    /// Tokenization failed
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Grammar validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Segmentation found no partition
    #[error(transparent)]
    Unsegmentable(#[from] Unsegmentable),
}

impl AnalysisError {
    /// Position tied to the failure, if the failure has one
    pub fn position(&self) -> Option<usize> {
        match self {
            AnalysisError::Lex(e) => Some(e.position),
            AnalysisError::Validation(e) => Some(e.position),
            AnalysisError::Unsegmentable(_) => None,
        }
    }

    /// Whether this is a lexical (as opposed to syntactic) failure
    pub fn is_lexical(&self) -> bool {
        matches!(self, AnalysisError::Lex(_))
    }
}

/// Result type for the full pipeline
pub type Result<T> = std::result::Result<T, AnalysisError>;
