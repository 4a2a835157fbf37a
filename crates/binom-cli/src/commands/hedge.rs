//! Hedge command implementation.
//!
//! Prints the replicating portfolio (bond and asset positions) formed at
//! every non-terminal node, or at a single node with `--node t,k`.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use binom_core::{Contract, HedgingPortfolio};
use binom_models::BinomialModel;

use crate::cli::OutputFormat;
use crate::commands::{parse_node, ContractArgs, MarketArgs};
use crate::output::{format_value, print_header, print_output, print_warning};

/// Arguments for the hedge command.
#[derive(Args, Debug)]
pub struct HedgeArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    #[command(flatten)]
    pub contract: ContractArgs,

    /// Only report the portfolio formed at node t,k
    #[arg(long)]
    pub node: Option<String>,
}

/// Replicating portfolio at one node.
#[derive(Debug, Serialize, Tabled)]
pub struct HedgeRow {
    #[tabled(rename = "t")]
    pub t: usize,
    #[tabled(rename = "k")]
    pub k: usize,
    #[tabled(rename = "Price", display_with = "format_value")]
    pub price: f64,
    #[tabled(rename = "Value", display_with = "format_value")]
    pub value: f64,
    #[tabled(rename = "Bond (x)", display_with = "format_value")]
    pub bond: f64,
    #[tabled(rename = "Asset (y)", display_with = "format_value")]
    pub asset: f64,
}

impl HedgeRow {
    /// The value column is the portfolio's value at formation, which equals
    /// the claim value at `(t, k)`.
    fn new(model: &BinomialModel, t: usize, k: usize, portfolio: &HedgingPortfolio) -> Result<Self> {
        let price = model.price(t, k)?;
        Ok(Self {
            t,
            k,
            price,
            value: portfolio.value(1.0, price),
            bond: portfolio.bond,
            asset: portfolio.asset,
        })
    }
}

/// Execute the hedge command.
pub fn execute(args: HedgeArgs, format: OutputFormat) -> Result<()> {
    let contract = args.contract.contract()?;
    let model = args.market.build()?;

    match args.node.as_deref() {
        Some(node) => {
            let (t, k) = parse_node(node)?;
            let portfolio = model.hedging_portfolio(t, k, &contract)?;
            let row = HedgeRow::new(&model, t, k, &portfolio)?;
            print_rows(&[row], format)
        }
        None => report(&model, &contract, format),
    }
}

/// Prints the replicating portfolio at every non-terminal node.
pub fn report(model: &BinomialModel, contract: &Contract, format: OutputFormat) -> Result<()> {
    if model.steps() == 0 {
        print_warning("A zero-period model has no hedging portfolios");
        return print_rows(&[], format);
    }

    let portfolios = model.all_hedging_portfolios(contract)?;
    let rows = portfolios
        .nodes()
        .map(|(t, k, portfolio)| HedgeRow::new(model, t, k, portfolio))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(nodes = rows.len(), "hedging portfolios computed");
    print_rows(&rows, format)
}

fn print_rows(rows: &[HedgeRow], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Table {
        print_header("Hedging Portfolios");
    }
    print_output(rows, format)
}
