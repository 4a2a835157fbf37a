//! Parameters of the binomial market model.

use serde::{Deserialize, Serialize};

use binom_core::{BinomError, BinomResult};

/// Absolute tolerance when checking that `p_u + p_d = 1`.
pub const PROBABILITY_TOLERANCE: f64 = 1e-12;

/// Largest supported number of periods; node exponents are evaluated as `i32`.
pub const MAX_STEPS: usize = i32::MAX as usize;

fn default_probability() -> f64 {
    0.5
}

/// Market parameters of a multi-period binomial model.
///
/// The real-world probabilities do not enter risk-neutral pricing; they are
/// validated and kept so that callers can compute real-world statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Number of periods `T`.
    pub steps: usize,

    /// Up factor `u`.
    pub up: f64,

    /// Down factor `d`.
    pub down: f64,

    /// Initial asset price `S`.
    pub spot: f64,

    /// Per-period risk-free rate `R`.
    pub rate: f64,

    /// Real-world probability of an up move `p_u`.
    #[serde(default = "default_probability")]
    pub prob_up: f64,

    /// Real-world probability of a down move `p_d`.
    #[serde(default = "default_probability")]
    pub prob_down: f64,
}

impl ModelParameters {
    /// Creates parameters with equal real-world probabilities.
    #[must_use]
    pub fn new(steps: usize, up: f64, down: f64, spot: f64, rate: f64) -> Self {
        Self {
            steps,
            up,
            down,
            spot,
            rate,
            prob_up: default_probability(),
            prob_down: default_probability(),
        }
    }

    /// Sets the real-world probabilities.
    #[must_use]
    pub fn with_probabilities(mut self, prob_up: f64, prob_down: f64) -> Self {
        self.prob_up = prob_up;
        self.prob_down = prob_down;
        self
    }

    /// Lists every violated invariant as `(field, message)` pairs.
    #[must_use]
    pub fn violations(&self) -> Vec<(&'static str, String)> {
        let mut violations = Vec::new();

        if self.steps > MAX_STEPS {
            violations.push((
                "steps",
                format!("steps must not exceed {MAX_STEPS}, got {}", self.steps),
            ));
        }

        let reals = [
            ("up", self.up),
            ("down", self.down),
            ("spot", self.spot),
            ("rate", self.rate),
            ("prob_up", self.prob_up),
            ("prob_down", self.prob_down),
        ];
        for (field, value) in reals {
            if !value.is_finite() {
                violations.push((field, format!("{field} must be finite, got {value}")));
            }
        }

        if !(self.up > self.down) {
            violations.push((
                "up",
                format!(
                    "up factor must exceed down factor (u = {}, d = {})",
                    self.up, self.down
                ),
            ));
        }

        if !(self.spot > 0.0) {
            violations.push(("spot", format!("spot must be positive, got {}", self.spot)));
        }

        for (field, p) in [("prob_up", self.prob_up), ("prob_down", self.prob_down)] {
            if !(0.0..=1.0).contains(&p) {
                violations.push((field, format!("{field} must lie in [0, 1], got {p}")));
            }
        }

        let total = self.prob_up + self.prob_down;
        if !((total - 1.0).abs() <= PROBABILITY_TOLERANCE) {
            violations.push((
                "prob_up",
                format!("probabilities must sum to 1, got {} + {} = {total}", self.prob_up, self.prob_down),
            ));
        }

        violations
    }

    /// Fails with [`BinomError::InvalidModelParameters`] on the first violation.
    pub fn validate(&self) -> BinomResult<()> {
        match self.violations().into_iter().next() {
            Some((_, reason)) => Err(BinomError::invalid_parameters(reason)),
            None => Ok(()),
        }
    }
}
