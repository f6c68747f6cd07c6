//! Domain layer: the grammar and the segmentation algorithm
//!
//! Stages run leaf to root: [`alphabet`] classifies characters, [`lexer`]
//! produces symbols, [`validator`] checks the grammar, [`segmenter`] finds
//! the optimal partition, [`ast`] rebuilds it and [`semantics`] renders it.

pub mod alphabet;
pub mod ast;
pub mod lexer;
pub mod pattern;
pub mod segmenter;
pub mod semantics;
pub mod validator;

pub use alphabet::{classify, is_vowel, SoundClass};
pub use ast::{build_ast, Ast, AstNode, NodeKind};
pub use lexer::{tokenize, Symbol};
pub use pattern::{UnitPattern, Weight};
pub use segmenter::{candidates, segment, DpState, UnitCandidate};
pub use semantics::{render_semantics, render_unit};
pub use validator::{validate, validate_classes};
