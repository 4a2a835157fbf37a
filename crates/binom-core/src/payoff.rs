//! Contract functions for contingent claims.
//!
//! A contingent claim is described by its payoff: a pure function of the
//! terminal asset price. The pricing engine only depends on the [`Payoff`]
//! capability, so any closure `Fn(f64) -> f64` can be priced alongside the
//! reference contracts defined here.

use serde::{Deserialize, Serialize};

/// A contract function mapping a terminal asset price to a payout.
///
/// Implementations must be pure: the engine may evaluate the payoff any
/// number of times, in any order.
pub trait Payoff {
    /// Returns the payout of the claim when the asset ends at `price`.
    fn payoff(&self, price: f64) -> f64;
}

impl<F> Payoff for F
where
    F: Fn(f64) -> f64,
{
    fn payoff(&self, price: f64) -> f64 {
        self(price)
    }
}

/// European put: `max(0, K - S_T)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuropeanPut {
    /// Strike price `K`.
    pub strike: f64,
}

impl EuropeanPut {
    /// Creates a put with the given strike.
    #[must_use]
    pub fn new(strike: f64) -> Self {
        Self { strike }
    }
}

impl Payoff for EuropeanPut {
    fn payoff(&self, price: f64) -> f64 {
        (self.strike - price).max(0.0)
    }
}

/// European call: `max(0, S_T - K)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuropeanCall {
    /// Strike price `K`.
    pub strike: f64,
}

impl EuropeanCall {
    /// Creates a call with the given strike.
    #[must_use]
    pub fn new(strike: f64) -> Self {
        Self { strike }
    }
}

impl Payoff for EuropeanCall {
    fn payoff(&self, price: f64) -> f64 {
        (price - self.strike).max(0.0)
    }
}

/// A reference contract selected at runtime (config files, CLI).
///
/// Serialized with an internal `type` tag:
///
/// ```json
/// { "type": "call", "strike": 100.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Contract {
    /// European put.
    Put {
        /// Strike price.
        strike: f64,
    },
    /// European call.
    Call {
        /// Strike price.
        strike: f64,
    },
}

impl Contract {
    /// Returns the strike of the contract.
    #[must_use]
    pub fn strike(&self) -> f64 {
        match self {
            Self::Put { strike } | Self::Call { strike } => *strike,
        }
    }

    /// Returns true if the strike is a finite number.
    ///
    /// Any finite strike is admissible; a zero-strike call pays the asset.
    #[must_use]
    pub fn has_finite_strike(&self) -> bool {
        self.strike().is_finite()
    }

    /// Short human-readable name (`"put"` / `"call"`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Put { .. } => "put",
            Self::Call { .. } => "call",
        }
    }
}

impl Payoff for Contract {
    fn payoff(&self, price: f64) -> f64 {
        match *self {
            Self::Put { strike } => EuropeanPut::new(strike).payoff(price),
            Self::Call { strike } => EuropeanCall::new(strike).payoff(price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_payoff() {
        let put = EuropeanPut::new(100.0);
        assert_eq!(put.payoff(81.0), 19.0);
        assert_eq!(put.payoff(100.0), 0.0);
        assert_eq!(put.payoff(121.0), 0.0);
    }

    #[test]
    fn test_call_payoff() {
        let call = EuropeanCall::new(100.0);
        assert_eq!(call.payoff(81.0), 0.0);
        assert_eq!(call.payoff(99.0), 0.0);
        assert_eq!(call.payoff(121.0), 21.0);
    }

    #[test]
    fn test_closure_is_payoff() {
        let digital = |s: f64| if s > 100.0 { 1.0 } else { 0.0 };
        assert_eq!(digital.payoff(101.0), 1.0);
        assert_eq!(digital.payoff(99.0), 0.0);

        let boxed: Box<dyn Payoff> = Box::new(EuropeanCall::new(90.0));
        assert_eq!(boxed.payoff(100.0), 10.0);
    }

    #[test]
    fn test_contract_dispatch() {
        let put = Contract::Put { strike: 50.0 };
        let call = Contract::Call { strike: 50.0 };
        assert_eq!(put.payoff(40.0), 10.0);
        assert_eq!(call.payoff(60.0), 10.0);
        assert_eq!(put.strike(), 50.0);
        assert_eq!(call.name(), "call");
    }

    #[test]
    fn test_contract_serde() {
        let contract: Contract = serde_json::from_str(r#"{"type":"put","strike":95.5}"#).unwrap();
        assert_eq!(contract, Contract::Put { strike: 95.5 });
        let json = serde_json::to_string(&Contract::Call { strike: 100.0 }).unwrap();
        assert_eq!(json, r#"{"type":"call","strike":100.0}"#);
    }

    #[test]
    fn test_finite_strike() {
        assert!(Contract::Call { strike: 0.0 }.has_finite_strike());
        assert!(Contract::Put { strike: -5.0 }.has_finite_strike());
        assert!(!Contract::Put { strike: f64::NAN }.has_finite_strike());
        assert!(!Contract::Call { strike: f64::INFINITY }.has_finite_strike());

        assert_eq!(Contract::Call { strike: 0.0 }.payoff(121.0), 121.0);
    }
}
