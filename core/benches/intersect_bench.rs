use boolsearch_core::intersect::intersect;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_intersect(c: &mut Criterion) {
    let evens: Vec<u64> = (0..100_000).map(|i| i * 2).collect();
    let odds: Vec<u64> = (0..100_000).map(|i| i * 2 + 1).collect();
    let thirds: Vec<u64> = (0..100_000).map(|i| i * 3).collect();

    c.bench_function("intersect_disjoint_100k", |b| {
        b.iter(|| intersect(black_box(&evens), black_box(&odds)))
    });
    c.bench_function("intersect_overlapping_100k", |b| {
        b.iter(|| intersect(black_box(&evens), black_box(&thirds)))
    });
}

criterion_group!(benches, bench_intersect);
criterion_main!(benches);
