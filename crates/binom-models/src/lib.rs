//! # Binom Models
//!
//! The discrete-time binomial market model and its pricing engine.
//!
//! This crate provides:
//!
//! - **Model Parameters**: Up/down factors, spot, rate and real-world probabilities
//! - **Price Process**: The asset price at every node, cached at construction
//! - **Martingale Measure**: The unique risk-neutral probabilities `(q_u, q_d)`
//! - **Valuation**: Backward induction of any [`Payoff`](binom_core::Payoff)
//! - **Hedging**: Self-financing replicating portfolios at every node
//!
//! ## Example
//!
//! ```rust
//! use binom_core::{EuropeanCall, EuropeanPut};
//! use binom_models::BinomialModel;
//!
//! let model = BinomialModel::new(2, 1.1, 0.9, 100.0, 0.05).unwrap();
//! assert!(model.is_arbitrage_free());
//!
//! let call = model.fair_price(&EuropeanCall::new(100.0)).unwrap();
//! let put = model.fair_price(&EuropeanPut::new(100.0)).unwrap();
//!
//! // Put-call parity
//! let parity = 100.0 - 100.0 / 1.05_f64.powi(2);
//! assert!((call - put - parity).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::float_cmp)]

pub mod binomial;
pub mod parameters;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::binomial::BinomialModel;
    pub use crate::parameters::ModelParameters;
    pub use binom_core::prelude::*;
}

pub use binomial::BinomialModel;
pub use parameters::{ModelParameters, MAX_STEPS, PROBABILITY_TOLERANCE};
