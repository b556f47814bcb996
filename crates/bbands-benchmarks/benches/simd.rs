//! Benchmarks for the SIMD reductions
//!
//! Compares the runtime-dispatched kernels against the scalar reference for
//! the two window reductions the bands are built from.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bbands_core::simd::{self, scalar, SimdLevel};

const SIZES: [usize; 6] = [8, 20, 64, 256, 1024, 4096];

fn series(size: usize) -> Vec<f64> {
    (0..size).map(|i| 100.0 + ((i * 7) % 13) as f64 * 0.25).collect()
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("sum/{}", SimdLevel::detect()));

    for size in SIZES {
        let data = series(size);

        group.bench_with_input(BenchmarkId::new("dispatch", size), &data, |b, data| {
            b.iter(|| black_box(simd::sum(black_box(data))))
        });
        group.bench_with_input(BenchmarkId::new("scalar", size), &data, |b, data| {
            b.iter(|| black_box(scalar::sum(black_box(data))))
        });
    }

    group.finish();
}

fn bench_sum_sq_dev(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("sum_sq_dev/{}", SimdLevel::detect()));

    for size in SIZES {
        let data = series(size);
        let mean = scalar::sum(&data) / size as f64;

        group.bench_with_input(BenchmarkId::new("dispatch", size), &data, |b, data| {
            b.iter(|| black_box(simd::sum_sq_dev(black_box(data), black_box(mean))))
        });
        group.bench_with_input(BenchmarkId::new("scalar", size), &data, |b, data| {
            b.iter(|| black_box(scalar::sum_sq_dev(black_box(data), black_box(mean))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sum, bench_sum_sq_dev);
criterion_main!(benches);
