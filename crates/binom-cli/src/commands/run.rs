//! Run command implementation.
//!
//! Loads a valuation configuration file (JSON or TOML) and reports the fair
//! value of its contract, plus hedging portfolios when `hedge = true`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use binom_config::ValuationConfig;

use crate::cli::OutputFormat;
use crate::commands::{hedge, price};

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to a .json or .toml valuation file
    #[arg(short = 'C', long, env = "BINOM_CONFIG")]
    pub config: PathBuf,

    /// Also print the price and value of every node
    #[arg(long)]
    pub tree: bool,
}

/// Execute the run command.
pub fn execute(args: RunArgs, format: OutputFormat) -> Result<()> {
    let config = ValuationConfig::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    tracing::info!(name = %config.name, "running valuation config");

    let model = config.build_model()?;
    price::report(&model, &config.contract, args.tree, format)?;

    if config.hedge {
        hedge::report(&model, &config.contract, format)?;
    }

    Ok(())
}
