//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CheckArgs, HedgeArgs, PriceArgs, RunArgs};

/// Binom - Binomial model pricing and hedging CLI
#[derive(Parser)]
#[command(name = "binom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Value a contingent claim by backward induction
    Price(PriceArgs),

    /// Compute replicating portfolios for a contingent claim
    Hedge(HedgeArgs),

    /// Check completeness and absence of arbitrage
    Check(CheckArgs),

    /// Run a valuation described in a JSON or TOML file
    Run(RunArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
