//! Performance benchmarks for the profile evaluator
//!
//! Compares the one-shot evaluator against the precomputed-mode evaluator
//! on identical problems, and measures how both scale with resolution.
//!
//! # What We're Measuring
//!
//! 1. **One-shot** (`evaluate_profile`):
//!    - Recomputes wavenumbers, sines and exponentials for every sample
//!    - Cost ∝ sample_count × series_terms (trig + exp per term)
//!
//! 2. **Precomputed** (`ProfileEvaluator::profile_at`):
//!    - Mode shapes and decay rates prepared once at construction
//!    - Per call: series_terms exponentials + one matrix-vector product
//!
//! # Expected Results
//!
//! The precomputed path should win clearly at animation tick rates, since
//! it trades per-call trigonometry for a single upfront table build. Both
//! paths scale linearly in sample_count and series_terms.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all evaluator benchmarks
//! cargo bench --bench evaluator_performance
//!
//! # Only the one-shot path
//! cargo bench --bench evaluator_performance one_shot
//!
//! # Direct comparison
//! cargo bench --bench evaluator_performance comparison
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;

use fick_rs::physics::{evaluate_profile, EvaluatorConfig, ProfileEvaluator, SlabParameters};

/// Default slab used by every benchmark
fn bench_params() -> SlabParameters {
    SlabParameters::new(1e-10, 200e-6, 1.0)
}

/// One-shot evaluation across increasing sample counts
fn bench_one_shot_scaling(c: &mut Criterion) {
    let params = bench_params();

    let mut group = c.benchmark_group("one_shot");
    group.measurement_time(Duration::from_secs(5));

    for &samples in &[81usize, 321, 1281] {
        let config = EvaluatorConfig::new(samples, 20);
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            &config,
            |b, config| {
                b.iter(|| evaluate_profile(black_box(&params), black_box(300.0), config).unwrap())
            },
        );
    }

    group.finish();
}

/// One-shot evaluation across increasing series truncation
fn bench_series_terms_scaling(c: &mut Criterion) {
    let params = bench_params();

    let mut group = c.benchmark_group("series_terms");
    group.measurement_time(Duration::from_secs(5));

    for &terms in &[5usize, 20, 80] {
        let config = EvaluatorConfig::new(81, terms);
        group.bench_with_input(BenchmarkId::from_parameter(terms), &config, |b, config| {
            b.iter(|| evaluate_profile(black_box(&params), black_box(10.0), config).unwrap())
        });
    }

    group.finish();
}

/// Head-to-head: one-shot vs precomputed at animation settings
fn bench_comparison(c: &mut Criterion) {
    let params = bench_params();
    let config = EvaluatorConfig::default();
    let evaluator = ProfileEvaluator::new(params, config).unwrap();

    let mut group = c.benchmark_group("comparison");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("one_shot", |b| {
        b.iter(|| evaluate_profile(black_box(&params), black_box(300.0), &config).unwrap())
    });

    group.bench_function("precomputed", |b| {
        b.iter(|| evaluator.profile_at(black_box(300.0)).unwrap())
    });

    group.finish();
}

/// Construction cost of the precomputed tables
fn bench_evaluator_construction(c: &mut Criterion) {
    let params = bench_params();
    let config = EvaluatorConfig::default();

    c.bench_function("evaluator_construction", |b| {
        b.iter(|| ProfileEvaluator::new(black_box(params), black_box(config)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_one_shot_scaling,
    bench_series_terms_scaling,
    bench_comparison,
    bench_evaluator_construction
);
criterion_main!(benches);
