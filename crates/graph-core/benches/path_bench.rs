use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use graph_core::{smooth_path, DataPoint, PlotScale};

fn gen_points(n: usize) -> Vec<DataPoint> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        // simple waveform with drift
        let y = (x * 0.01).sin() * 10.0 + x * 0.0001 + 20.0;
        v.push(DataPoint::new(x, y));
    }
    v
}

fn bench_smooth_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth_path");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let points = gen_points(n);
        let scale = PlotScale::new(n as f64, 50.0, 1024.0, 640.0).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, p| {
            b.iter_batched(
                || p.clone(),
                |p| {
                    let _ = black_box(smooth_path(&p, &scale));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_smooth_path);
criterion_main!(benches);
