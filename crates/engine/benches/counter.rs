use criterion::{Criterion, criterion_group, criterion_main};
use pwc_engine::counter::compute_stats;
use pwc_engine::options::{DecodePolicy, MetricSet};
use std::hint::black_box;

fn benchmark_compute_stats(c: &mut Criterion) {
    let text = "the quick brown fox jumps over the lazy dog ✓\n".repeat(20_000);
    let data = text.as_bytes();

    c.bench_function("compute_stats_default", |b| {
        b.iter(|| {
            let counts = compute_stats(black_box(data), MetricSet::default(), DecodePolicy::Strict);
            black_box(counts)
        })
    });

    c.bench_function("compute_stats_all", |b| {
        b.iter(|| {
            let counts = compute_stats(black_box(data), MetricSet::all(), DecodePolicy::Strict);
            black_box(counts)
        })
    });
}

criterion_group!(benches, benchmark_compute_stats);
criterion_main!(benches);
