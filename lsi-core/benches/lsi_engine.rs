//! Benchmarks for the LSI engine
//!
//! A calculator recomputes one index and six sensitivity curves on every
//! slider move, roughly 280 index evaluations. These benchmarks measure both
//! halves of that work.
//!
//! ```bash
//! cargo bench --bench lsi_engine
//! cargo bench --bench lsi_engine sample
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use lsi_core::{calculate_lsi, sample_all, sample_parameter, LsiBreakdown, Parameter, WaterParameters};

fn bench_single_index(c: &mut Criterion) {
    let params = WaterParameters::default();

    c.bench_function("calculate_lsi", |b| b.iter(|| calculate_lsi(black_box(&params))));
    c.bench_function("lsi_breakdown", |b| b.iter(|| LsiBreakdown::compute(black_box(&params))));
}

fn bench_sampling(c: &mut Criterion) {
    let params = WaterParameters::default();
    let mut group = c.benchmark_group("sample_parameter");

    for parameter in Parameter::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(parameter), &parameter, |b, &p| {
            b.iter(|| sample_parameter(p, black_box(&params)))
        });
    }
    group.finish();

    c.bench_function("sample_all", |b| b.iter(|| sample_all(black_box(&params))));
}

criterion_group!(benches, bench_single_index, bench_sampling);
criterion_main!(benches);
