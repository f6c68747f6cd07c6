//! Phonotactic validation and weighted optimal segmentation
//!
//! This crate checks words against a small fictional grammar, splits valid
//! words into syllable-like units with a dynamic program over a fixed
//! pattern/weight table, and renders the result as an arithmetic expression.
//!
//! # Architecture
//!
//! - **Domain layer** (`domain`): the classifier, lexer, validator, segmenter,
//!   tree builder and renderer, each usable on its own
//! - **API layer** (`api`): the [`analyze`] pipeline and serializable reports
//!
//! The crate performs no I/O. Reading input, case folding and printing belong
//! to callers such as the `silaba` command-line shell.
//!
//! # Example
//!
//! ```rust
//! use silaba_core::analyze;
//!
//! let analysis = analyze("agua").unwrap();
//! assert_eq!(analysis.token_line(), "a:V(0) g:C(1) u:V(2) a:V(3)");
//! assert_eq!(analysis.semantics(), "x = +97 -103 +117 +97");
//!
//! let err = analyze("xyz").unwrap_err();
//! assert_eq!(err.to_string(), "string does not end in a vowel at position 2");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod domain;
pub mod error;

pub use api::{analyze, Analysis};
#[cfg(feature = "serde")]
pub use api::{AnalysisReport, TokenReport, UnitReport};
pub use domain::*;
pub use error::{AnalysisError, GrammarRule, LexError, Unsegmentable, ValidationError};
