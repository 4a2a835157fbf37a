//! End-to-end tests of the `binom` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const MARKET: [&str; 10] = [
    "--steps", "2", "--up", "1.1", "--down", "0.9", "--spot", "100", "--rate", "0.05",
];

fn binom() -> Command {
    Command::cargo_bin("binom").unwrap()
}

#[test]
fn price_call_minimal() {
    binom()
        .args(["price", "--format", "minimal"])
        .args(MARKET)
        .args(["--contract", "call", "--strike", "100"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("10.714286"));
}

#[test]
fn price_json_reports_tree() {
    let output = binom()
        .args(["price", "--format", "json", "--tree"])
        .args(MARKET)
        .args(["--contract", "put", "--strike", "100"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["arbitrage_free"], true);
    assert_eq!(report["complete"], true);
    assert_eq!(report["nodes"].as_array().unwrap().len(), 6);
    let fair_value = report["fair_value"].as_f64().unwrap();
    assert!((fair_value - 1.417_233_560_090_703).abs() < 1e-9);
}

#[test]
fn hedge_single_node() {
    let output = binom()
        .args(["hedge", "--format", "json", "--node", "0,0"])
        .args(MARKET)
        .args(["--contract", "call", "--strike", "100"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let asset = rows[0]["asset"].as_f64().unwrap();
    assert!((asset - 0.75).abs() < 1e-9);
}

#[test]
fn hedge_terminal_node_fails() {
    binom()
        .args(["hedge", "--node", "2,0"])
        .args(MARKET)
        .args(["--contract", "call", "--strike", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn check_reports_arbitrage() {
    binom()
        .args(["check", "--format", "minimal"])
        .args(["--steps", "1", "--up", "1.2", "--down", "0.8", "--spot", "100", "--rate", "0.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn invalid_model_is_rejected() {
    binom()
        .args(["price"])
        .args(["--steps", "2", "--up", "0.9", "--down", "1.1", "--spot", "100", "--rate", "0.05"])
        .args(["--contract", "call", "--strike", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid model parameters"));
}

#[test]
fn run_toml_config() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
name = "two-period-call"

[model]
steps = 2
up = 1.1
down = 0.9
spot = 100.0
rate = 0.05

[contract]
type = "call"
strike = 100.0
"#
    )
    .unwrap();

    binom()
        .args(["run", "--format", "minimal", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("10.714286"));
}

#[test]
fn hedge_zero_period_model_has_no_portfolios() {
    binom()
        .args(["hedge"])
        .args(["--steps", "0", "--up", "1.1", "--down", "0.9", "--spot", "100", "--rate", "0.05"])
        .args(["--contract", "put", "--strike", "110"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results."))
        .stderr(predicate::str::contains("no hedging portfolios"));
}

#[test]
fn hedge_json_values_match_price() {
    let output = binom()
        .args(["hedge", "--format", "json"])
        .args(MARKET)
        .args(["--contract", "call", "--strike", "100"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    let root = rows[0]["value"].as_f64().unwrap();
    assert!((root - 75.0 / 7.0).abs() < 1e-9);
}

#[test]
fn oversized_horizon_is_rejected() {
    binom()
        .args(["price", "--steps", "18446744073709551615"])
        .args(["--up", "1.1", "--down", "0.9", "--spot", "100", "--rate", "0.05"])
        .args(["--contract", "call", "--strike", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid model parameters"));
}

#[test]
fn zero_strike_call_is_worth_the_asset() {
    binom()
        .args(["price", "--format", "minimal"])
        .args(MARKET)
        .args(["--contract", "call", "--strike", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("100.000000"));
}
