//! Syntax tree rebuilt from the segmenter's choices

use crate::domain::lexer::Symbol;
use crate::domain::pattern::UnitPattern;
use crate::domain::segmenter::DpState;
use std::fmt;

/// Kind of tree node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// The synthetic root covering the whole input
    Word,
    /// One syllable-like unit
    Unit,
}

impl NodeKind {
    /// Label used when printing nodes
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Word => "Word",
            NodeKind::Unit => "Unit",
        }
    }
}

/// A tree node: the Word root or one Unit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstNode {
    kind: NodeKind,
    text: String,
    start: usize,
}

impl AstNode {
    /// Creates the root node; it carries no text
    pub fn word() -> Self {
        Self {
            kind: NodeKind::Word,
            text: String::new(),
            start: 0,
        }
    }

    /// Creates a unit node
    pub fn unit(text: impl Into<String>, start: usize) -> Self {
        Self {
            kind: NodeKind::Unit,
            text: text.into(),
            start,
        }
    }

    /// Node kind
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Covered text; empty for the root
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the first covered character
    pub fn start(&self) -> usize {
        self.start
    }

    /// Shape of the unit text, if it is one of the known patterns
    pub fn pattern(&self) -> Option<UnitPattern> {
        UnitPattern::of_text(&self.text)
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self.pattern().map_or("?", UnitPattern::name);
        write!(
            f,
            "{}:{}({})@{}",
            self.kind.label(),
            shape,
            self.text,
            self.start
        )
    }
}

/// Word root with its units in input order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ast {
    root: AstNode,
    units: Vec<AstNode>,
}

impl Ast {
    /// Creates a tree from units already in order
    pub fn from_units(units: Vec<AstNode>) -> Self {
        Self {
            root: AstNode::word(),
            units,
        }
    }

    /// The Word root
    pub fn root(&self) -> &AstNode {
        &self.root
    }

    /// Units, left to right
    pub fn units(&self) -> &[AstNode] {
        &self.units
    }

    /// Concatenation of all unit texts
    pub fn text(&self) -> String {
        self.units.iter().map(AstNode::text).collect()
    }

    /// Units joined by spaces, as printed by the shell
    pub fn unit_line(&self) -> String {
        self.units
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Walks the chosen lengths from position 0 and emits one unit per step.
///
/// A missing choice is read as a single-character unit. Lengths never run past
/// the end of the input.
pub fn build_ast(symbols: &[Symbol], state: &DpState) -> Ast {
    let n = symbols.len();
    let mut units = Vec::new();
    let mut i = 0;

    while i < n {
        let length = state
            .length_at(i)
            .filter(|&length| length > 0)
            .unwrap_or(1)
            .min(n - i);
        let text: String = symbols[i..i + length]
            .iter()
            .map(Symbol::character)
            .collect();
        units.push(AstNode::unit(text, symbols[i].position()));
        i += length;
    }

    Ast::from_units(units)
}
