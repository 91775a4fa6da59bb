//! Search benchmark.
//!
//! Compares linear `index` against binary `sorted_index` for hits in the
//! middle of the slice and for misses past the end.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ordseq::prelude::*;
use std::hint::black_box;

const SIZES: [i32; 4] = [100, 1000, 10000, 100000];

fn benchmark_index_hit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("index_hit");

    for size in SIZES {
        let elements: Vec<i32> = (0..size).collect();
        let target = size / 2;

        group.bench_with_input(BenchmarkId::new("index", size), &size, |bencher, _| {
            bencher.iter(|| black_box(index(black_box(&elements), black_box(&target))));
        });

        group.bench_with_input(BenchmarkId::new("sorted_index", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sorted_index(black_box(&elements), black_box(&target))));
        });
    }

    group.finish();
}

fn benchmark_index_miss(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("index_miss");

    for size in SIZES {
        let elements: Vec<i32> = (0..size).collect();
        let target = size;

        group.bench_with_input(BenchmarkId::new("index", size), &size, |bencher, _| {
            bencher.iter(|| black_box(index(black_box(&elements), black_box(&target))));
        });

        group.bench_with_input(BenchmarkId::new("sorted_index", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sorted_index(black_box(&elements), black_box(&target))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_index_hit, benchmark_index_miss);

criterion_main!(benches);
