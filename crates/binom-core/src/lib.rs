//! # Binom Core
//!
//! Core types and abstractions for the Binom binomial pricing library.
//!
//! This crate provides the building blocks used by the pricing engine:
//!
//! - **Triangular Tree**: Arena storage for recombining binomial trees
//! - **Payoffs**: The [`Payoff`] capability plus European put/call contracts
//! - **Result Types**: Martingale measures and hedging portfolios
//! - **Errors**: The [`BinomError`] taxonomy shared by every crate
//!
//! ## Example
//!
//! ```rust
//! use binom_core::prelude::*;
//!
//! let call = EuropeanCall::new(100.0);
//! assert_eq!(call.payoff(121.0), 21.0);
//!
//! let mut tree = TriangularTree::new(1).unwrap();
//! tree.set(1, 1, 110.0).unwrap();
//! assert_eq!(*tree.get(1, 1).unwrap(), 110.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod payoff;
pub mod tree;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BinomError, BinomResult};
    pub use crate::payoff::{Contract, EuropeanCall, EuropeanPut, Payoff};
    pub use crate::tree::TriangularTree;
    pub use crate::types::{HedgingPortfolio, MartingaleMeasure};
}

pub use error::{BinomError, BinomResult};
pub use payoff::{Contract, EuropeanCall, EuropeanPut, Payoff};
pub use tree::TriangularTree;
pub use types::{HedgingPortfolio, MartingaleMeasure};
