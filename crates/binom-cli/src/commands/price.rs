//! Price command implementation.
//!
//! Values a contingent claim by backward induction and optionally prints the
//! full price and value processes.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use binom_core::{Contract, MartingaleMeasure};
use binom_models::{BinomialModel, ModelParameters};

use crate::cli::OutputFormat;
use crate::commands::{ContractArgs, MarketArgs};
use crate::output::{format_value, print_header, print_json, print_output, print_warning, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    #[command(flatten)]
    pub contract: ContractArgs,

    /// Also print the price and value of every node
    #[arg(long)]
    pub tree: bool,
}

/// One node of the price and value processes.
#[derive(Debug, Serialize, Tabled)]
pub struct NodeRow {
    #[tabled(rename = "t")]
    pub t: usize,
    #[tabled(rename = "k")]
    pub k: usize,
    #[tabled(rename = "Price", display_with = "format_value")]
    pub price: f64,
    #[tabled(rename = "Value", display_with = "format_value")]
    pub value: f64,
}

#[derive(Debug, Serialize)]
struct PriceReport<'a> {
    contract: &'a Contract,
    parameters: &'a ModelParameters,
    martingale_measure: MartingaleMeasure,
    discount_factor: f64,
    arbitrage_free: bool,
    complete: bool,
    fair_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<Vec<NodeRow>>,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat) -> Result<()> {
    let contract = args.contract.contract()?;
    let model = args.market.build()?;
    report(&model, &contract, args.tree, format)
}

/// Values `contract` under `model` and prints the result.
pub fn report(
    model: &BinomialModel,
    contract: &Contract,
    show_tree: bool,
    format: OutputFormat,
) -> Result<()> {
    let values = model.value_process(contract)?;
    let fair_value = *values.get(0, 0)?;
    let measure = model.risk_neutral_measure();

    tracing::info!(contract = contract.name(), fair_value, "valuation complete");

    if !model.is_arbitrage_free() {
        print_warning("Market admits arbitrage: d < 1 + R < u does not hold");
    }

    let nodes = if show_tree {
        let mut rows = Vec::with_capacity(values.node_count());
        for (t, k, value) in values.nodes() {
            rows.push(NodeRow {
                t,
                k,
                price: model.price(t, k)?,
                value: *value,
            });
        }
        Some(rows)
    } else {
        None
    };

    match format {
        OutputFormat::Table => {
            let summary = vec![
                KeyValue::new("Contract", contract.name()),
                KeyValue::from_f64("Strike", contract.strike(), 4),
                KeyValue::new("Steps", model.steps().to_string()),
                KeyValue::from_f64("Up (u)", model.up(), 6),
                KeyValue::from_f64("Down (d)", model.down(), 6),
                KeyValue::from_f64("Spot (S)", model.initial_price(), 4),
                KeyValue::from_percent("Rate (R)", model.rate()),
                KeyValue::from_f64("q_u", measure.up, 6),
                KeyValue::from_f64("q_d", measure.down, 6),
                KeyValue::from_f64("Discount Factor", model.discount_factor(), 8),
                KeyValue::from_bool("Arbitrage Free", model.is_arbitrage_free()),
                KeyValue::from_bool("Complete", model.is_complete()),
                KeyValue::from_f64("Fair Value", fair_value, 6),
            ];
            print_header("Binomial Valuation");
            print_output(&summary, format)?;
            if let Some(rows) = &nodes {
                print_header("Price and Value Process");
                print_output(rows, format)?;
            }
        }
        OutputFormat::Json => {
            print_json(&PriceReport {
                contract,
                parameters: model.parameters(),
                martingale_measure: measure,
                discount_factor: model.discount_factor(),
                arbitrage_free: model.is_arbitrage_free(),
                complete: model.is_complete(),
                fair_value,
                nodes,
            })?;
        }
        OutputFormat::Csv => match &nodes {
            Some(rows) => print_output(rows, format)?,
            None => print_output(
                &[KeyValue::from_f64("fair_value", fair_value, 10)],
                format,
            )?,
        },
        OutputFormat::Minimal => println!("{:.6}", fair_value),
    }

    Ok(())
}
