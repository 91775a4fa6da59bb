//! IAI-Callgrind benchmark for the sorted-merge set algebra.
//!
//! Measures instruction counts for union and difference against the
//! order-preserving subtract.
//! Data sizes: 100, 1000, 10000.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use ordseq::prelude::*;
use std::hint::black_box;

// Setup functions for different data sizes
fn setup_operands(size: i32) -> (Vec<i32>, Vec<i32>) {
    let left = (0..size).rev().collect();
    let right = (size / 2..size + size / 2).collect();
    (left, right)
}

fn setup_operands_100() -> (Vec<i32>, Vec<i32>) {
    setup_operands(100)
}

fn setup_operands_1000() -> (Vec<i32>, Vec<i32>) {
    setup_operands(1000)
}

fn setup_operands_10000() -> (Vec<i32>, Vec<i32>) {
    setup_operands(10000)
}

// union benchmarks
#[library_benchmark]
#[bench::with_setup(setup_operands_100())]
fn union_100(operands: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    black_box(union(black_box(&operands.0), black_box(&operands.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_operands_1000())]
fn union_1000(operands: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    black_box(union(black_box(&operands.0), black_box(&operands.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_operands_10000())]
fn union_10000(operands: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    black_box(union(black_box(&operands.0), black_box(&operands.1)))
}

// difference benchmarks
#[library_benchmark]
#[bench::with_setup(setup_operands_100())]
fn difference_100(operands: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    black_box(difference(black_box(&operands.0), black_box(&operands.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_operands_1000())]
fn difference_1000(operands: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    black_box(difference(black_box(&operands.0), black_box(&operands.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_operands_10000())]
fn difference_10000(operands: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    black_box(difference(black_box(&operands.0), black_box(&operands.1)))
}

// subtract benchmarks (order-preserving counterpart of difference)
#[library_benchmark]
#[bench::with_setup(setup_operands_100())]
fn subtract_100(operands: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    black_box(subtract(black_box(&operands.0), black_box(&operands.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_operands_1000())]
fn subtract_1000(operands: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    black_box(subtract(black_box(&operands.0), black_box(&operands.1)))
}

#[library_benchmark]
#[bench::with_setup(setup_operands_10000())]
fn subtract_10000(operands: (Vec<i32>, Vec<i32>)) -> Vec<i32> {
    black_box(subtract(black_box(&operands.0), black_box(&operands.1)))
}

library_benchmark_group!(
    name = set_algebra_group;
    benchmarks =
        union_100, union_1000, union_10000,
        difference_100, difference_1000, difference_10000,
        subtract_100, subtract_1000, subtract_10000
);

main!(library_benchmark_groups = set_algebra_group);
