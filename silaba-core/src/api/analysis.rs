//! Full pipeline run over one word

use crate::domain::{
    ast::{build_ast, Ast},
    lexer::{tokenize, Symbol},
    pattern::Weight,
    segmenter::{segment, DpState},
    semantics::render_semantics,
    validator::validate,
};
use crate::error::Result;

/// Everything produced by one successful pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    text: String,
    symbols: Vec<Symbol>,
    state: DpState,
    ast: Ast,
}

impl Analysis {
    /// The analyzed text, unchanged
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lexer output
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Segmenter tables
    pub fn state(&self) -> &DpState {
        &self.state
    }

    /// Reconstructed tree
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    /// Total weight of the chosen partition
    pub fn total_score(&self) -> Weight {
        // A successful segment() guarantees a score at position 0.
        self.state.total_score().unwrap_or_default()
    }

    /// Tokens as `c:V(i)` entries separated by spaces
    pub fn token_line(&self) -> String {
        self.symbols
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Units as `Unit:SHAPE(text)@start` entries separated by spaces
    pub fn unit_line(&self) -> String {
        self.ast.unit_line()
    }

    /// Arithmetic expression, `x = ...`
    pub fn semantics(&self) -> String {
        render_semantics(&self.ast)
    }

    /// Serializable summary of the run
    #[cfg(feature = "serde")]
    pub fn report(&self) -> super::AnalysisReport {
        super::AnalysisReport::from(self)
    }
}

/// Runs tokenize, validate, segment and build_ast on `text`.
///
/// The text is used as given; callers that want case folding or trimming do it
/// first.
pub fn analyze(text: &str) -> Result<Analysis> {
    let symbols = tokenize(text)?;
    validate(text)?;
    let state = segment(&symbols)?;
    let ast = build_ast(&symbols, &state);
    log::debug!("analyzed {text:?} into {} units", ast.units().len());

    Ok(Analysis {
        text: text.to_string(),
        symbols,
        state,
        ast,
    })
}
