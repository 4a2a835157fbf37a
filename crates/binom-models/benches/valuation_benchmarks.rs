//! Benchmarks for binomial model construction, valuation and hedging.
//!
//! Run with: cargo bench -p binom-models

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use binom_core::{EuropeanCall, TriangularTree};
use binom_models::BinomialModel;

const STEPS: [usize; 3] = [50, 200, 800];

fn nodes(steps: usize) -> u64 {
    TriangularTree::<f64>::nodes_for_horizon(steps).unwrap() as u64
}

fn market(steps: usize) -> BinomialModel {
    // Cox-Ross-Rubinstein style factors for a one-year horizon at 20% vol.
    let dt = 1.0 / steps as f64;
    let up = (0.2 * dt.sqrt()).exp();
    let down = 1.0 / up;
    let rate = 0.05 * dt;
    BinomialModel::new(steps, up, down, 100.0, rate).unwrap()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_process");
    for steps in STEPS {
        group.throughput(Throughput::Elements(
            nodes(steps),
        ));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| market(black_box(steps)));
        });
    }
    group.finish();
}

fn bench_value_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_process");
    let call = EuropeanCall::new(100.0);
    for steps in STEPS {
        let model = market(steps);
        group.throughput(Throughput::Elements(
            nodes(steps),
        ));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &model, |b, model| {
            b.iter(|| model.fair_price(black_box(&call)).unwrap());
        });
    }
    group.finish();
}

fn bench_all_hedging_portfolios(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_hedging_portfolios");
    let call = EuropeanCall::new(100.0);
    for steps in STEPS {
        let model = market(steps);
        group.bench_with_input(BenchmarkId::from_parameter(steps), &model, |b, model| {
            b.iter(|| model.all_hedging_portfolios(black_box(&call)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_value_process,
    bench_all_hedging_portfolios
);
criterion_main!(benches);
