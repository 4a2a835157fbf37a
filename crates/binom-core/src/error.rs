//! Error types for the Binom library.
//!
//! Two families of errors exist:
//!
//! - **Configuration errors** are raised once, while a model or tree is being
//!   built, and mean the instance must not be used.
//! - **Contract violations** are raised when a caller addresses a node outside
//!   the triangular region or reads a node that was never written.
//!
//! Neither family is retryable; every error indicates caller misuse.

use thiserror::Error;

/// A specialized Result type for Binom operations.
pub type BinomResult<T> = Result<T, BinomError>;

/// The main error type for Binom operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BinomError {
    /// Model parameters violate an invariant of the binomial model.
    #[error("Invalid model parameters: {reason}")]
    InvalidModelParameters {
        /// Description of the violated invariant.
        reason: String,
    },

    /// A tree was requested with a negative horizon, or one too large to allocate.
    #[error("Invalid horizon: {horizon} (must be non-negative and addressable)")]
    InvalidHorizon {
        /// The requested horizon.
        horizon: i64,
    },

    /// Node address lies outside the triangular region `0 <= k <= t <= horizon`.
    #[error("Node ({t}, {k}) is out of range for a tree of horizon {horizon}")]
    IndexOutOfRange {
        /// Time step.
        t: usize,
        /// Number of up moves.
        k: usize,
        /// Horizon of the addressed tree.
        horizon: usize,
    },

    /// Node was read before any value was written to it.
    #[error("Node ({t}, {k}) has not been initialized")]
    UninitializedNode {
        /// Time step.
        t: usize,
        /// Number of up moves.
        k: usize,
    },
}

impl BinomError {
    /// Creates an invalid model parameters error.
    #[must_use]
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidModelParameters {
            reason: reason.into(),
        }
    }

    /// Creates an out-of-range error for node `(t, k)`.
    #[must_use]
    pub fn out_of_range(t: usize, k: usize, horizon: usize) -> Self {
        Self::IndexOutOfRange { t, k, horizon }
    }

    /// Returns true for errors raised while building a model or tree.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidModelParameters { .. } | Self::InvalidHorizon { .. }
        )
    }
}
