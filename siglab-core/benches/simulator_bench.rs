//! Criterion benchmarks for the replay hot path.
//!
//! Benchmarks:
//! 1. Replay over a dense signal sequence (many short trades)
//! 2. Replay over a sparse sequence (horizon scans dominate)
//! 3. Metrics reduction over the resulting trade list

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use siglab_core::{PerformanceMetrics, Signal, Simulator};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_prices(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

/// Alternating long/short entries every `gap` indices, flat in between.
fn make_signals(n: usize, gap: usize) -> Vec<Signal> {
    (0..n)
        .map(|i| {
            if i % gap != 0 {
                Signal::Flat
            } else if (i / gap) % 2 == 0 {
                Signal::Long
            } else {
                Signal::Short
            }
        })
        .collect()
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    for &n in &[1_000usize, 10_000, 100_000] {
        let prices = make_prices(n);
        let dense = make_signals(n, 3);
        let sparse = make_signals(n, 200);
        let sim = Simulator::default();

        group.bench_with_input(BenchmarkId::new("dense", n), &n, |b, _| {
            b.iter(|| sim.replay(black_box(&prices), black_box(&dense)))
        });
        group.bench_with_input(BenchmarkId::new("sparse", n), &n, |b, _| {
            b.iter(|| sim.replay(black_box(&prices), black_box(&sparse)))
        });
    }
    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let n = 100_000;
    let prices = make_prices(n);
    let signals = make_signals(n, 3);
    let trades = Simulator::default().replay(&prices, &signals);

    c.bench_function("metrics_compute", |b| {
        b.iter(|| PerformanceMetrics::compute(black_box(&trades)))
    });
}

criterion_group!(benches, bench_replay, bench_metrics);
criterion_main!(benches);
