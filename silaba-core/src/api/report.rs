//! Serializable analysis summaries

use super::Analysis;
use crate::domain::{alphabet::SoundClass, pattern::UnitPattern, pattern::Weight};
use serde::{Deserialize, Serialize};

/// One token of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReport {
    /// The character
    pub character: char,
    /// Vowel or consonant
    pub class: SoundClass,
    /// Index in the input
    pub position: usize,
}

/// One unit of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitReport {
    /// Covered text
    pub text: String,
    /// Shape, absent when the text matches no pattern
    pub shape: Option<UnitPattern>,
    /// Index of the first character
    pub start: usize,
}

/// Machine-readable result of a successful analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Analyzed text
    pub word: String,
    /// Lexer output
    pub tokens: Vec<TokenReport>,
    /// Units, left to right
    pub units: Vec<UnitReport>,
    /// Total weight of the chosen partition
    pub score: Weight,
    /// Arithmetic expression
    pub semantics: String,
}

impl From<&Analysis> for AnalysisReport {
    fn from(analysis: &Analysis) -> Self {
        let tokens = analysis
            .symbols()
            .iter()
            .map(|symbol| TokenReport {
                character: symbol.character(),
                class: symbol.class(),
                position: symbol.position(),
            })
            .collect();
        let units = analysis
            .ast()
            .units()
            .iter()
            .map(|unit| UnitReport {
                text: unit.text().to_string(),
                shape: unit.pattern(),
                start: unit.start(),
            })
            .collect();

        Self {
            word: analysis.text().to_string(),
            tokens,
            units,
            score: analysis.total_score(),
            semantics: analysis.semantics(),
        }
    }
}
