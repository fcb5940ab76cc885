//! Criterion micro-benchmarks for region allocation and release.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use strata_arena::RegionAllocator;
use strata_bench::{comb_profile, packed_profile};
use strata_test_utils::{churn_workload, run_churn};

/// Benchmark: fill an empty default arena to its region cap.
fn bench_fill_128(c: &mut Criterion) {
    c.bench_function("fill_128", |b| {
        b.iter_batched(
            RegionAllocator::default,
            |mut alloc| {
                for _ in 0..128 {
                    black_box(alloc.allocate(16).unwrap());
                }
                alloc
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: allocate past 64 exact-size gaps to the tail, then free it.
fn bench_comb_tail_alloc(c: &mut Criterion) {
    let (mut alloc, _kept) = comb_profile(128, 16);
    c.bench_function("comb_tail_alloc", |b| {
        b.iter(|| {
            let addr = alloc.allocate(black_box(16)).unwrap();
            alloc.free(addr).unwrap();
        });
    });
}

/// Benchmark: free the first block of a packed table and append a new one
/// (worst-case shifting on both sides).
fn bench_front_free_realloc(c: &mut Criterion) {
    c.bench_function("front_free_realloc", |b| {
        b.iter_batched(
            || packed_profile(128, 16),
            |(mut alloc, blocks)| {
                alloc.free(blocks[0]).unwrap();
                // The freed front slot is a leading gap, which is never scanned.
                black_box(alloc.allocate(16).unwrap());
                alloc
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: a seeded 10k-op churn workload on the default arena.
fn bench_churn_10k(c: &mut Criterion) {
    let ops = churn_workload(42, 10_000, 64);
    c.bench_function("churn_10k", |b| {
        b.iter_batched(
            RegionAllocator::default,
            |mut alloc| black_box(run_churn(&mut alloc, &ops)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_fill_128,
    bench_comb_tail_alloc,
    bench_front_free_realloc,
    bench_churn_10k
);
criterion_main!(benches);
