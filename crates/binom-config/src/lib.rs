//! # Binom Config
//!
//! Configuration layer for the Binom binomial pricing library.
//!
//! A [`ValuationConfig`] bundles the market model, the contract to value and
//! the reporting options. Configurations are stored as JSON or TOML files and
//! validated field by field before any model is built.
//!
//! # Example
//!
//! ```rust
//! use binom_config::{Validate, ValuationConfig};
//!
//! let config = ValuationConfig::from_json_str(r#"{
//!     "name": "atm-put",
//!     "model": {"steps": 2, "up": 1.1, "down": 0.9, "spot": 100.0, "rate": 0.05},
//!     "contract": {"type": "put", "strike": 100.0}
//! }"#).unwrap();
//!
//! assert!(config.is_valid());
//! let model = config.build_model().unwrap();
//! assert!(model.is_arbitrage_free());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod valuation;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use valuation::ValuationConfig;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::valuation::ValuationConfig;
}
