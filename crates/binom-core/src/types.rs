//! Result types produced by the pricing engine.

use serde::{Deserialize, Serialize};

/// One-period risk-neutral probabilities `(q_u, q_d)`.
///
/// In the binomial model the measure is the same at every node, so a single
/// pair drives the whole backward induction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MartingaleMeasure {
    /// Probability of an up move, `q_u`.
    pub up: f64,
    /// Probability of a down move, `q_d`.
    pub down: f64,
}

impl MartingaleMeasure {
    /// Returns true if both probabilities lie strictly inside `(0, 1)`.
    #[must_use]
    pub fn is_equivalent(&self) -> bool {
        self.up > 0.0 && self.up < 1.0 && self.down > 0.0 && self.down < 1.0
    }

    /// Expected value of a two-state quantity under this measure.
    #[must_use]
    pub fn expectation(&self, value_up: f64, value_down: f64) -> f64 {
        self.up * value_up + self.down * value_down
    }
}

impl From<MartingaleMeasure> for (f64, f64) {
    fn from(measure: MartingaleMeasure) -> Self {
        (measure.up, measure.down)
    }
}

/// A replicating portfolio formed at one node and held for one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HedgingPortfolio {
    /// Bond position `x` (units of a bond worth 1 today).
    pub bond: f64,
    /// Asset position `y` (units of the underlying).
    pub asset: f64,
}

impl HedgingPortfolio {
    /// Creates a portfolio of `bond` bonds and `asset` units of the asset.
    #[must_use]
    pub fn new(bond: f64, asset: f64) -> Self {
        Self { bond, asset }
    }

    /// Value of the portfolio given a bond price and an asset price.
    ///
    /// At formation the bond is worth 1; one period later it is worth `1 + R`.
    #[must_use]
    pub fn value(&self, bond_price: f64, asset_price: f64) -> f64 {
        self.bond * bond_price + self.asset * asset_price
    }
}

impl From<HedgingPortfolio> for (f64, f64) {
    fn from(portfolio: HedgingPortfolio) -> Self {
        (portfolio.bond, portfolio.asset)
    }
}
