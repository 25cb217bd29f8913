//! Criterion benchmarks for the algorithm families.
//!
//! Benchmarks cover:
//! - The elementary sorts (1K to 5K elements)
//! - The search family (10K to 1M elements)
//! - The polynomial evaluators (degree 50 and 200)
//! - String matching (10K to 100K characters)
//! - The brute-force scans (sizes chosen per asymptotic cost)
//!
//! Input comes from the same seeded generators the trial harness uses, so
//! every run times identical data.

use algokit::prelude::*;
use algolab::generate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const SEED: u64 = 42;

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");
    group.sample_size(20);

    for size in [1_000, 2_000, 5_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = generate::uniform_ints(size, SEED);

        let sorts: [(&str, fn(&mut [i64])); 8] = [
            ("insertion_sort", |a| insertion_sort(a)),
            ("insertion_sort_swapping", |a| insertion_sort_swapping(a)),
            ("insertion_sort_recursive", |a| insertion_sort_recursive(a)),
            ("selection_sort", |a| selection_sort(a)),
            ("selection_sort_recursive", |a| selection_sort_recursive(a)),
            ("bubble_sort", |a| bubble_sort(a)),
            ("bubble_sort_backward", |a| bubble_sort_backward(a)),
            ("exchange_sort", |a| exchange_sort(a)),
        ];
        for (name, sort) in sorts {
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| {
                    let mut scratch = data.clone();
                    sort(black_box(&mut scratch));
                    scratch
                })
            });
        }
    }
    group.finish();
}

fn bench_searching(c: &mut Criterion) {
    let mut group = c.benchmark_group("searching");
    group.sample_size(100);

    for size in [10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (data, needle) = generate::sorted_with_needle(size, SEED);

        let searches: [(&str, fn(&[i64], &i64) -> Option<usize>); 4] = [
            ("linear_search", |a, k| linear_search(a, k)),
            ("jump_search", |a, k| jump_search(a, k)),
            ("binary_search", |a, k| binary_search(a, k)),
            ("binary_search_recursive", |a, k| binary_search_recursive(a, k)),
        ];
        for (name, search) in searches {
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| search(black_box(data), black_box(&needle)))
            });
        }

        // Sentinel search mutates, so it gets its own scratch copy per
        // iteration like the sorts.
        group.bench_with_input(BenchmarkId::new("sentinel_search", size), &data, |b, data| {
            b.iter(|| {
                let mut scratch = data.clone();
                sentinel_search(black_box(&mut scratch), black_box(&needle))
            })
        });
    }
    group.finish();
}

fn bench_polynomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial");
    group.sample_size(100);

    let x = 1.1;
    for degree in [50, 200] {
        group.throughput(Throughput::Elements(degree as u64 + 1));
        let coeffs = generate::float_coefficients(degree, 3.0, SEED);

        type Eval = fn(&[f64], f64) -> Result<f64, AlgokitError>;
        let evals: [(&str, Eval); 3] = [
            ("evaluate_terms", |c, x| evaluate_terms(c, x)),
            ("evaluate_cached_power", |c, x| evaluate_cached_power(c, x)),
            ("evaluate_horner", |c, x| evaluate_horner(c, x)),
        ];
        for (name, eval) in evals {
            group.bench_with_input(BenchmarkId::new(name, degree), &coeffs, |b, coeffs| {
                b.iter(|| eval(black_box(coeffs), black_box(x)))
            });
        }
    }
    group.finish();
}

fn bench_string_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_matching");
    group.sample_size(100);

    for size in [10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (text, pattern, _) = generate::embedded_pattern(size, 10, SEED);

        group.bench_with_input(BenchmarkId::new("find_first", size), &text, |b, text| {
            b.iter(|| find_first(black_box(text), black_box(&pattern)))
        });
        group.bench_with_input(BenchmarkId::new("find_all", size), &text, |b, text| {
            b.iter(|| find_all(black_box(text), black_box(&pattern)))
        });
    }
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");
    group.sample_size(20);

    for size in [200, 500] {
        let data = generate::uniform_ints(size, SEED);
        group.bench_with_input(
            BenchmarkId::new("max_subarray_cubic", size),
            &data,
            |b, data| b.iter(|| max_subarray_cubic(black_box(data))),
        );
    }

    for size in [1_000, 2_000] {
        let data = generate::uniform_ints(size, SEED);
        group.bench_with_input(
            BenchmarkId::new("max_subarray_quadratic", size),
            &data,
            |b, data| b.iter(|| max_subarray_quadratic(black_box(data))),
        );
    }

    for size in [5_000, 10_000] {
        let data = generate::uniform_ints(size, SEED);
        group.bench_with_input(
            BenchmarkId::new("longest_ascending_run", size),
            &data,
            |b, data| b.iter(|| longest_ascending_run(black_box(data))),
        );
    }

    for size in [200, 500] {
        let points = generate::distinct_points(size, SEED);
        group.bench_with_input(
            BenchmarkId::new("closest_pair", size),
            &points,
            |b, points| b.iter(|| closest_pair(black_box(points))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sorting,
    bench_searching,
    bench_polynomial,
    bench_string_matching,
    bench_brute_force,
);

criterion_main!(benches);
