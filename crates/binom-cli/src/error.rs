//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid strike price.
    #[error("Invalid strike: {0}. Must be finite.")]
    InvalidStrike(f64),

    /// Invalid node address.
    #[error("Invalid node: '{0}'. Use t,k (e.g. 0,0).")]
    InvalidNode(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
