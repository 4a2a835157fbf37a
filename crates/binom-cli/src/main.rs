//! Binom CLI - Command-line interface for binomial option pricing.
//!
//! # Usage
//!
//! ```bash
//! # Value a call in a two-period market
//! binom price --steps 2 --up 1.1 --down 0.9 --spot 100 --rate 0.05 --contract call --strike 100
//!
//! # Replicating portfolios at every node
//! binom hedge --steps 2 --up 1.1 --down 0.9 --spot 100 --rate 0.05 --contract put --strike 100
//!
//! # Completeness and no-arbitrage checks
//! binom check --steps 1 --up 1.2 --down 0.8 --spot 100 --rate 0.25
//!
//! # Run a valuation described in a JSON or TOML file
//! binom run --config valuation.toml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, format)?,
        Commands::Hedge(args) => commands::hedge::execute(args, format)?,
        Commands::Check(args) => commands::check::execute(args, format)?,
        Commands::Run(args) => commands::run::execute(args, format)?,
    }

    Ok(())
}
