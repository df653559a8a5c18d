//! Criterion benchmarks comparing the three ways of getting Greeks.
//!
//! Benchmarks cover:
//! - Closed-form Greeks after one forward step
//! - The adjoint sweep after one forward step
//! - Bump-and-revalue Greeks (eleven forward steps plus the nested gamma)
//! - The full verification report

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::OptionParams;
use pricer_models::analytical::EuropeanOption;
use pricer_risk::finite_difference::{delta_fd, fd_greeks, gamma_fd, FdConfig};
use pricer_risk::verification::verify_greeks;

const EPSILONS: [f64; 2] = [0.01, 1e-3];

fn reference_params() -> OptionParams {
    OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).expect("finite parameters")
}

/// Analytic vs adjoint vs finite differences on the reference option.
fn bench_greek_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("greek_methods");
    let params = reference_params();

    group.bench_function("analytic", |b| {
        b.iter(|| EuropeanOption::new(black_box(params)).calculate().greeks());
    });

    group.bench_function("adjoint", |b| {
        b.iter(|| EuropeanOption::new(black_box(params)).calculate().adjoint());
    });

    for epsilon in EPSILONS {
        group.bench_with_input(
            BenchmarkId::new("finite_difference", epsilon),
            &epsilon,
            |b, &epsilon| {
                b.iter(|| fd_greeks(black_box(&params), epsilon));
            },
        );
    }

    group.finish();
}

/// Single-Greek entry points from raw inputs.
fn bench_single_fd(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_fd");

    group.bench_function("delta_fd", |b| {
        b.iter(|| delta_fd(black_box(100.0), 100.0, 1.0, 0.05, 0.2, 0.01));
    });

    group.bench_function("gamma_fd", |b| {
        b.iter(|| gamma_fd(black_box(100.0), 100.0, 1.0, 0.05, 0.2, 0.01));
    });

    group.finish();
}

fn bench_verification(c: &mut Criterion) {
    let params = reference_params();
    let config = FdConfig::default();

    c.bench_function("verify_greeks", |b| {
        b.iter(|| verify_greeks(black_box(&params), &config));
    });
}

criterion_group!(benches, bench_greek_methods, bench_single_fd, bench_verification);
criterion_main!(benches);
