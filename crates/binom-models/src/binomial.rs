//! Multi-period binomial model.
//!
//! Implements pricing and hedging of contingent claims in the binomial
//! model (Björk, *Arbitrage Theory in Continuous Time*, ch. 2):
//!
//! - The **price process** is built once at construction in a forward sweep.
//! - The **value process** of a claim is built per request by backward
//!   induction under the martingale measure.
//! - **Hedging portfolios** are read off the value process one period at a time.
//!
//! # Node convention
//!
//! Node `(t, k)` is reached after `t` periods of which `k` were up moves:
//!
//! ```text
//!                 (2,2)  S·u²
//!         (1,1)
//! (0,0)           (2,1)  S·u·d
//!         (1,0)
//!                 (2,0)  S·d²
//! ```

use log::{debug, trace};

use binom_core::{
    BinomError, BinomResult, HedgingPortfolio, MartingaleMeasure, Payoff, TriangularTree,
};

use crate::parameters::ModelParameters;

/// A binomial market with a bond and one risky asset.
///
/// # Example
///
/// ```rust
/// use binom_core::EuropeanCall;
/// use binom_models::BinomialModel;
///
/// let model = BinomialModel::new(2, 1.1, 0.9, 100.0, 0.05).unwrap();
/// let value = model.fair_price(&EuropeanCall::new(100.0)).unwrap();
/// assert!((value - 75.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BinomialModel {
    params: ModelParameters,
    price_process: TriangularTree<f64>,
}

impl BinomialModel {
    /// Creates a model with equal real-world probabilities.
    ///
    /// # Arguments
    ///
    /// * `steps` - Number of periods `T`
    /// * `up` - Up factor `u`
    /// * `down` - Down factor `d`
    /// * `spot` - Initial asset price `S`
    /// * `rate` - Per-period risk-free rate `R`
    pub fn new(steps: usize, up: f64, down: f64, spot: f64, rate: f64) -> BinomResult<Self> {
        Self::from_parameters(ModelParameters::new(steps, up, down, spot, rate))
    }

    /// Validates the parameters and builds the price process.
    ///
    /// Fails with [`BinomError::InvalidModelParameters`] if `u <= d`, if the
    /// real-world probabilities are not a probability measure, or if the
    /// spot is not positive.
    pub fn from_parameters(params: ModelParameters) -> BinomResult<Self> {
        params.validate()?;
        let price_process = Self::build_price_process(&params)?;

        debug!(
            "Built binomial price process: steps={}, nodes={}, u={}, d={}, R={}",
            params.steps,
            price_process.node_count(),
            params.up,
            params.down,
            params.rate
        );

        Ok(Self {
            params,
            price_process,
        })
    }

    fn build_price_process(params: &ModelParameters) -> BinomResult<TriangularTree<f64>> {
        let mut tree = TriangularTree::new(params.steps)?;

        for t in 0..=params.steps {
            for k in 0..=t {
                // k up moves, t - k down moves
                let price = params.spot * params.up.powi(k as i32) * params.down.powi((t - k) as i32);
                tree.set(t, k, price)?;
            }
        }

        Ok(tree)
    }

    /// Returns the model parameters.
    #[must_use]
    pub fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    /// Returns the number of periods `T`.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.params.steps
    }

    /// Returns the up factor `u`.
    #[must_use]
    pub fn up(&self) -> f64 {
        self.params.up
    }

    /// Returns the down factor `d`.
    #[must_use]
    pub fn down(&self) -> f64 {
        self.params.down
    }

    /// Returns the initial asset price `S`.
    #[must_use]
    pub fn initial_price(&self) -> f64 {
        self.params.spot
    }

    /// Returns the per-period risk-free rate `R`.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.params.rate
    }

    /// Returns the real-world probabilities `(p_u, p_d)`.
    #[must_use]
    pub fn real_world_probabilities(&self) -> (f64, f64) {
        (self.params.prob_up, self.params.prob_down)
    }

    /// Returns the asset price at node `(t, k)`: `S·u^k·d^(t−k)`.
    pub fn price(&self, t: usize, k: usize) -> BinomResult<f64> {
        self.price_process.get(t, k).copied()
    }

    /// Returns the cached price process.
    #[must_use]
    pub fn price_process(&self) -> &TriangularTree<f64> {
        &self.price_process
    }

    /// One-period discount factor `1 / (1 + R)`.
    #[must_use]
    pub fn discount_factor(&self) -> f64 {
        1.0 / (1.0 + self.params.rate)
    }

    /// Computes the martingale measure.
    ///
    /// # Formula
    ///
    /// q_u = ((1 + R) − d) / (u − d),  q_d = (u − (1 + R)) / (u − d)
    #[must_use]
    pub fn risk_neutral_measure(&self) -> MartingaleMeasure {
        let gross = 1.0 + self.params.rate;
        let spread = self.params.up - self.params.down;
        MartingaleMeasure {
            up: (gross - self.params.down) / spread,
            down: (self.params.up - gross) / spread,
        }
    }

    /// Builds the value process of a claim by backward induction.
    ///
    /// Terminal nodes hold `phi(price(T, k))`; every earlier node holds the
    /// discounted martingale expectation of its two successors. A new tree
    /// is built on every call.
    pub fn value_process<P: Payoff + ?Sized>(&self, payoff: &P) -> BinomResult<TriangularTree<f64>> {
        let n = self.params.steps;
        let measure = self.risk_neutral_measure();
        let df = self.discount_factor();

        let mut values = TriangularTree::new(n)?;

        // Work backwards through tree
        for t in (0..=n).rev() {
            for k in (0..=t).rev() {
                let value = if t == n {
                    payoff.payoff(self.price(t, k)?)
                } else {
                    let value_up = *values.get(t + 1, k + 1)?;
                    let value_down = *values.get(t + 1, k)?;
                    df * measure.expectation(value_up, value_down)
                };
                values.set(t, k, value)?;
            }
        }

        debug!("Value process built: steps={}, root value={}", n, values.get(0, 0)?);

        Ok(values)
    }

    /// Arbitrage-free price of a claim at time 0.
    pub fn fair_price<P: Payoff + ?Sized>(&self, payoff: &P) -> BinomResult<f64> {
        self.value_process(payoff)?.get(0, 0).copied()
    }

    /// Computes the replicating portfolio formed at node `(t, k)`.
    ///
    /// Requires `t < T`: portfolios are held through one period, so none is
    /// formed at the terminal layer.
    ///
    /// # Formula
    ///
    /// x = (1/(1+R)) · (u·V_d − d·V_u) / (u − d)
    /// y = (V_u − V_d) / ((u − d) · S(t, k))
    pub fn hedging_portfolio<P: Payoff + ?Sized>(
        &self,
        t: usize,
        k: usize,
        payoff: &P,
    ) -> BinomResult<HedgingPortfolio> {
        if t >= self.params.steps || k > t {
            return Err(BinomError::out_of_range(t, k, self.params.steps));
        }
        let values = self.value_process(payoff)?;
        self.portfolio_at(t, k, &values)
    }

    /// Computes the replicating portfolio at every non-terminal node.
    ///
    /// The value process is built once and shared by every node. The result
    /// has horizon `T − 1`; a one-layer model (`T = 0`) has no hedging
    /// portfolios and fails with [`BinomError::InvalidHorizon`].
    pub fn all_hedging_portfolios<P: Payoff + ?Sized>(
        &self,
        payoff: &P,
    ) -> BinomResult<TriangularTree<HedgingPortfolio>> {
        let mut portfolios = TriangularTree::with_horizon(self.params.steps as i64 - 1)?;
        let values = self.value_process(payoff)?;

        for t in 0..self.params.steps {
            for k in 0..=t {
                portfolios.set(t, k, self.portfolio_at(t, k, &values)?)?;
            }
        }

        Ok(portfolios)
    }

    fn portfolio_at(
        &self,
        t: usize,
        k: usize,
        values: &TriangularTree<f64>,
    ) -> BinomResult<HedgingPortfolio> {
        let (u, d) = (self.params.up, self.params.down);
        let value_up = *values.get(t + 1, k + 1)?;
        let value_down = *values.get(t + 1, k)?;
        let price = self.price(t, k)?;

        let bond = self.discount_factor() * (u * value_down - d * value_up) / (u - d);
        let asset = (value_up - value_down) / ((u - d) * price);

        trace!("Hedge at ({}, {}): bond={}, asset={}", t, k, bond, asset);

        Ok(HedgingPortfolio::new(bond, asset))
    }

    /// Returns true: with two states per period and two traded instruments,
    /// every claim can be replicated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        true
    }

    /// Returns true iff `d < 1 + R < u`.
    #[must_use]
    pub fn is_arbitrage_free(&self) -> bool {
        let gross = 1.0 + self.params.rate;
        self.params.down < gross && gross < self.params.up
    }
}
