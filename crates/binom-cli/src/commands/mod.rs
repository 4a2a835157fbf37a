//! CLI command implementations.

pub mod check;
pub mod hedge;
pub mod price;
pub mod run;

pub use check::CheckArgs;
pub use hedge::HedgeArgs;
pub use price::PriceArgs;
pub use run::RunArgs;

use clap::{Args, ValueEnum};

use binom_core::Contract;
use binom_models::{BinomialModel, ModelParameters};

use crate::error::{CliError, CliResult};

/// Market model arguments shared by every command.
#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    /// Number of periods T
    #[arg(long)]
    pub steps: usize,

    /// Up factor u
    #[arg(long)]
    pub up: f64,

    /// Down factor d
    #[arg(long)]
    pub down: f64,

    /// Initial asset price S
    #[arg(long)]
    pub spot: f64,

    /// Per-period risk-free rate R (e.g. 0.05 for 5%)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: f64,

    /// Real-world probability of an up move
    #[arg(long, default_value = "0.5")]
    pub prob_up: f64,

    /// Real-world probability of a down move
    #[arg(long, default_value = "0.5")]
    pub prob_down: f64,
}

impl MarketArgs {
    /// Returns the model parameters described by the arguments.
    pub fn parameters(&self) -> ModelParameters {
        ModelParameters::new(self.steps, self.up, self.down, self.spot, self.rate)
            .with_probabilities(self.prob_up, self.prob_down)
    }

    /// Builds the pricing engine.
    pub fn build(&self) -> anyhow::Result<BinomialModel> {
        let model = BinomialModel::from_parameters(self.parameters())?;
        tracing::debug!(steps = self.steps, "market model built");
        Ok(model)
    }
}

/// Contract type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContractKind {
    /// European put
    Put,
    /// European call
    Call,
}

/// Contract arguments.
#[derive(Args, Debug, Clone)]
pub struct ContractArgs {
    /// Contract type
    #[arg(short, long, value_enum)]
    pub contract: ContractKind,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,
}

impl ContractArgs {
    /// Returns the contract, rejecting a non-finite strike.
    pub fn contract(&self) -> CliResult<Contract> {
        let contract = match self.contract {
            ContractKind::Put => Contract::Put {
                strike: self.strike,
            },
            ContractKind::Call => Contract::Call {
                strike: self.strike,
            },
        };
        if !contract.has_finite_strike() {
            return Err(CliError::InvalidStrike(self.strike));
        }
        Ok(contract)
    }
}

/// Parses a node address written as `t,k`.
pub fn parse_node(s: &str) -> CliResult<(usize, usize)> {
    let invalid = || CliError::InvalidNode(s.to_string());
    let (t, k) = s.split_once(',').ok_or_else(invalid)?;
    let t = t.trim().parse().map_err(|_| invalid())?;
    let k = k.trim().parse().map_err(|_| invalid())?;
    Ok((t, k))
}
