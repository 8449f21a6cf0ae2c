//! Criterion benchmarks for fincalc_core calculators
//!
//! Run with: cargo bench -p fincalc_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fincalc_core::calculation::{Calculation, evaluate_all};
use fincalc_core::{
    amortization_schedule, calculate_financial_freedom_years, calculate_maximum_home_price,
    calculate_mortgage_payoff_savings,
};

fn create_batch(size: usize) -> Vec<Calculation> {
    (0..size)
        .map(|i| Calculation::MortgagePayoffSavings {
            principal: 100_000.0 + 1_000.0 * i as f64,
            annual_rate_percent: 6.0,
            years: 30.0,
            extra_monthly_payment: 250.0,
        })
        .collect()
}

fn bench_mortgage_payoff(c: &mut Criterion) {
    c.bench_function("mortgage_payoff_30yr", |b| {
        b.iter(|| {
            calculate_mortgage_payoff_savings(
                black_box(300_000.0),
                black_box(4.5),
                black_box(30.0),
                black_box(200.0),
            )
        })
    });
}

fn bench_amortization_schedule(c: &mut Criterion) {
    c.bench_function("amortization_schedule_30yr", |b| {
        b.iter(|| amortization_schedule(black_box(300_000.0), black_box(4.5), black_box(30.0), 0.0))
    });
}

fn bench_goal_seek(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_seek");

    group.bench_function("maximum_home_price", |b| {
        b.iter(|| {
            calculate_maximum_home_price(
                black_box(100_000.0),
                black_box(500.0),
                black_box(6.5),
                black_box(30.0),
                black_box(50_000.0),
                black_box(1.1),
            )
        })
    });

    // Sustainable withdrawals run the full 50-year horizon
    group.bench_function("freedom_years_full_horizon", |b| {
        b.iter(|| {
            calculate_financial_freedom_years(
                black_box(1_000_000.0),
                black_box(1_000.0),
                black_box(0.04),
            )
        })
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_all");

    for size in [10, 100, 1000].iter() {
        let batch = create_batch(*size);
        group.bench_with_input(BenchmarkId::new("payoff_batch", size), size, |b, _| {
            b.iter(|| evaluate_all(black_box(&batch)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mortgage_payoff,
    bench_amortization_schedule,
    bench_goal_seek,
    bench_batch,
);
criterion_main!(benches);
