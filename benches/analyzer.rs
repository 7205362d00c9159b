use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use frame_timing::{LogLoader, TimingAnalyzer};

/// An hour at 30 fps with light jitter and a dropped frame every 500.
fn recording(frames: usize) -> Vec<f64> {
    (0..frames)
        .filter(|i| i % 500 != 499)
        .map(|i| i as f64 * 1000.0 / 30.0 + (i % 7) as f64 * 0.3)
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer");

    for frames in [1_000usize, 108_000] {
        let ts = recording(frames);
        group.bench_with_input(BenchmarkId::new("construct", frames), &ts, |b, ts| {
            b.iter(|| TimingAnalyzer::from_millis(black_box(ts.clone())))
        });
    }

    group.finish();
}

fn bench_deviation_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("deviation");

    let analyzer = TimingAnalyzer::from_millis(recording(108_000)).unwrap();
    group.bench_function("walk_30hz", |b| {
        b.iter(|| analyzer.deviation_from_target(black_box(30.0)))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader");

    let content: String = recording(108_000)
        .iter()
        .map(|t| format!("{:.6}\n", t))
        .collect();
    group.bench_function("parse_hour", |b| {
        b.iter(|| LogLoader::new().parse_str(black_box(&content)))
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_deviation_walk, bench_parse);
criterion_main!(benches);
