//! Benchmark for bind chains: Identity, Maybe, and Either.
//!
//! Compares the default-aware `bind` of each wrapper against a plain
//! `Option::map` chain of the same length.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use monadex::{Cause, Either, Identity, Maybe};
use std::hint::black_box;

const CHAIN_LENGTHS: [usize; 3] = [1, 10, 100];

fn benchmark_good_path(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind_good_path");

    for length in CHAIN_LENGTHS {
        group.bench_with_input(BenchmarkId::new("option_map", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current = Some(black_box(1_u64));
                for _ in 0..length {
                    current = current.map(|n| n.wrapping_add(1));
                }
                black_box(current)
            });
        });

        group.bench_with_input(BenchmarkId::new("identity", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current = Identity::new(black_box(1_u64));
                for _ in 0..length {
                    current = current.bind(|n| n.wrapping_add(1));
                }
                black_box(current)
            });
        });

        group.bench_with_input(BenchmarkId::new("maybe", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current = Maybe::wrap(black_box(1_u64));
                for _ in 0..length {
                    current = current.bind(|n| n.wrapping_add(1));
                }
                black_box(current)
            });
        });

        group.bench_with_input(BenchmarkId::new("either", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current: Either<u64> = Either::wrap(black_box(1_u64));
                for _ in 0..length {
                    current = current.bind(|n| n.wrapping_add(1));
                }
                black_box(current)
            });
        });
    }

    group.finish();
}

fn benchmark_bad_path(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind_bad_path");

    // Failure at the first step, the rest of the chain passes the cause through
    for length in CHAIN_LENGTHS {
        group.bench_with_input(BenchmarkId::new("maybe", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current = Maybe::wrap(black_box("x")).try_bind(str::parse::<u64>);
                for _ in 0..length {
                    current = current.bind(|n| n.wrapping_add(1));
                }
                black_box(current)
            });
        });

        group.bench_with_input(BenchmarkId::new("either", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut current: Either<u64> =
                    Either::wrap(black_box("x")).try_bind(str::parse::<u64>);
                for _ in 0..length {
                    current = current.bind(|n| n.wrapping_add(1));
                }
                black_box(current)
            });
        });
    }

    group.bench_function("either_cause_clone", |bencher| {
        let cause = Cause::msg("shared");
        bencher.iter(|| black_box(cause.clone()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_good_path, benchmark_bad_path);
criterion_main!(benches);
