//! Silaba CLI library
//!
//! This library provides the command-line interface for the silaba
//! phonotactic analyzer: an interactive shell and a batch `analyze` command.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod repl;

pub use error::{CliError, CliResult};
