//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither words nor input files were given
    #[error("No input: pass words as arguments or files with --input")]
    NoInput,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Strict mode found words the grammar rejects
    #[error("{rejected} of {total} words rejected")]
    RejectedWords {
        /// Number of rejected words
        rejected: usize,
        /// Number of analyzed words
        total: usize,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
