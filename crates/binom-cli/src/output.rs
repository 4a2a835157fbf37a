//! Rendering of command results in the selected output format.

use std::io;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Decimals shown for model quantities in table cells.
const CELL_PRECISION: usize = 6;

/// Renders `rows` in `format`.
///
/// `Minimal` prints only the first row, as compact JSON.
pub fn print_output<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No results.");
            } else {
                let table = Table::new(rows)
                    .with(Style::rounded())
                    .with(Modify::new(Columns::first()).with(Alignment::left()))
                    .to_string();
                println!("{table}");
            }
        }
        OutputFormat::Json => print_json(rows)?,
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Minimal => {
            if let Some(first) = rows.first() {
                println!("{}", serde_json::to_string(first)?);
            }
        }
    }
    Ok(())
}

/// Prints any serializable report as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(report: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Formats `value` with a fixed number of decimals.
pub fn fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Cell formatter for `#[tabled(display_with = ...)]` columns.
pub fn format_value(value: &f64) -> String {
    fixed(*value, CELL_PRECISION)
}

/// Prints a warning to stderr, keeping stdout machine-readable.
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

/// Prints a section title above a table.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// One labelled line of a summary table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn from_f64(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self::new(key, fixed(value, precision))
    }

    /// A rate shown in percent, e.g. `0.05` as `5.0000%`.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format!("{}%", fixed(value * 100.0, 4)))
    }

    pub fn from_bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, if value { "yes" } else { "no" })
    }
}
