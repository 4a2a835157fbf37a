//! Check command implementation.
//!
//! Reports whether the binomial market is complete and arbitrage free.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use binom_core::MartingaleMeasure;

use crate::cli::OutputFormat;
use crate::commands::MarketArgs;
use crate::output::{print_header, print_json, print_output, print_warning, KeyValue};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub market: MarketArgs,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    complete: bool,
    arbitrage_free: bool,
    martingale_measure: MartingaleMeasure,
    discount_factor: f64,
}

/// Execute the check command.
pub fn execute(args: CheckArgs, format: OutputFormat) -> Result<()> {
    let model = args.market.build()?;
    let measure = model.risk_neutral_measure();
    let report = CheckReport {
        complete: model.is_complete(),
        arbitrage_free: model.is_arbitrage_free(),
        martingale_measure: measure,
        discount_factor: model.discount_factor(),
    };

    if !report.arbitrage_free {
        print_warning(&format!(
            "1 + R = {} is not strictly between d = {} and u = {}",
            1.0 + model.rate(),
            model.down(),
            model.up()
        ));
    }

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Minimal => println!("{}", report.arbitrage_free),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::from_bool("Complete", report.complete),
                KeyValue::from_bool("Arbitrage Free", report.arbitrage_free),
                KeyValue::from_f64("q_u", measure.up, 6),
                KeyValue::from_f64("q_d", measure.down, 6),
                KeyValue::from_f64("Discount Factor", report.discount_factor, 8),
            ];
            if format == OutputFormat::Table {
                print_header("Market Checks");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
