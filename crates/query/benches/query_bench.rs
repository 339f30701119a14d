//! Benchmarks for statistics and join execution.
//!
//! These benchmarks measure pure execution time by using iter_batched to
//! exclude operator construction from measurement.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use minnow_core::schema::{FieldDesc, TupleDesc};
use minnow_core::{DataType, Value};
use minnow_query::ast::{JoinPredicate, Op};
use minnow_query::executor::{drain, DbIterator, NestedLoopJoin, SeqScan};
use minnow_query::stats::IntHistogram;

// ============================================================================
// Data Generation Utilities
// ============================================================================

/// Simple LCG for reproducible pseudo-random values
fn pseudo_random(count: usize, range: i64, seed: u64) -> Vec<i64> {
    let mut s = seed;
    (0..count)
        .map(|_| {
            s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((s >> 33) as i64).rem_euclid(range)
        })
        .collect()
}

fn scan(alias: &str, keys: &[i64]) -> SeqScan {
    let desc = TupleDesc::new(vec![
        FieldDesc::new("k", DataType::Int64),
        FieldDesc::new("payload", DataType::String),
    ]);
    let rows = keys
        .iter()
        .map(|k| vec![Value::Int64(*k), Value::String(format!("row_{}", k))])
        .collect();
    SeqScan::new(alias, &desc, rows).unwrap()
}

// ============================================================================
// Histogram Benchmarks
// ============================================================================

fn bench_histogram_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_ingest");
    for size in [1_000usize, 100_000] {
        let values = pseudo_random(size, 10_000, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter_batched(
                || IntHistogram::new(100, 0, 9_999).unwrap(),
                |mut hist| {
                    for v in values {
                        hist.add_value(*v).unwrap();
                    }
                    black_box(hist)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_histogram_estimate(c: &mut Criterion) {
    let mut hist = IntHistogram::new(100, 0, 9_999).unwrap();
    for v in pseudo_random(100_000, 10_000, 7) {
        hist.add_value(v).unwrap();
    }
    let probes = pseudo_random(1_000, 12_000, 99);

    let mut group = c.benchmark_group("histogram_estimate");
    for op in [Op::Equals, Op::LessThan, Op::GreaterThanOrEq] {
        group.bench_function(format!("{:?}", op), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for v in &probes {
                    acc += hist.estimate_selectivity(op, *v - 1_000);
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

// ============================================================================
// Join Benchmarks
// ============================================================================

fn bench_nested_loop_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_loop_join");
    for size in [100usize, 1_000] {
        let left = pseudo_random(size, size as i64 / 4, 1);
        let right = pseudo_random(size, size as i64 / 4, 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || {
                    let mut join = NestedLoopJoin::new(
                        JoinPredicate::equals(0, 0),
                        Box::new(scan("l", &left)),
                        Box::new(scan("r", &right)),
                    )
                    .unwrap();
                    join.open().unwrap();
                    join
                },
                |mut join| black_box(drain(&mut join).unwrap().len()),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_histogram_ingest,
    bench_histogram_estimate,
    bench_nested_loop_join
);
criterion_main!(benches);
