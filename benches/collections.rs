//! Benchmarks for immutable-collection
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use immutable_collection::{create_immutable_collection, map, ImmutableCollection, PropertyKey};

// =============================================================================
// CONSTRUCTION BENCHMARKS
// =============================================================================

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_immutable_collection");
    for size in [0usize, 16, 1024, 65536] {
        let input: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| black_box(create_immutable_collection(input).unwrap()))
        });
    }
    group.finish();
}

fn bench_from_vec(c: &mut Criterion) {
    c.bench_function("from_vec_1024", |b| {
        b.iter(|| {
            let input: Vec<u64> = (0..1024).collect();
            black_box(ImmutableCollection::from(input))
        })
    });
}

// =============================================================================
// MAP BENCHMARKS
// =============================================================================

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    for size in [16usize, 1024, 65536] {
        let input: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| black_box(map(input, |x, i| x * 10 + i as u64).unwrap()))
        });
    }
    group.finish();
}

// =============================================================================
// READ BENCHMARKS
// =============================================================================

fn bench_iterate(c: &mut Criterion) {
    let collection: ImmutableCollection<u64> = (0..1024).collect();
    c.bench_function("iterate_1024", |b| {
        b.iter(|| black_box(collection.iter().sum::<u64>()))
    });
}

fn bench_reflect_slot(c: &mut Criterion) {
    let collection: ImmutableCollection<u64> = (0..1024).collect();
    c.bench_function("get_own_slot", |b| {
        b.iter(|| black_box(collection.get_own_slot(PropertyKey::Index(black_box(512))).is_some()))
    });
}

criterion_group!(
    benches,
    bench_create,
    bench_from_vec,
    bench_map,
    bench_iterate,
    bench_reflect_slot,
);
criterion_main!(benches);
