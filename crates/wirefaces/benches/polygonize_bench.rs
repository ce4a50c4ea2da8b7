//! Criterion benchmarks for the polygonization pipeline.
//! Focus sizes: n in {4, 12, 24, 48} random segments, plus the 12-edge cube-like grid.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use wirefaces::arrangement::{build_arrangement, trace_faces};
use wirefaces::sample::{draw_segments, grid_edges, ReplayToken, SegmentCfg};
use wirefaces::{polygonize, Point, Tolerances};

fn bench_polygonize(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygonize");
    for &n in &[4usize, 12, 24, 48] {
        let cfg = SegmentCfg {
            count: n,
            ..SegmentCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("random_segments", n), &n, |b, _| {
            b.iter_batched(
                || draw_segments(cfg, ReplayToken { seed: 43, index: n as u64 }),
                |segs| {
                    let _faces = polygonize(&segs);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("build_and_trace", n), &n, |b, _| {
            let tol = Tolerances::default();
            b.iter_batched(
                || draw_segments(cfg, ReplayToken { seed: 44, index: n as u64 }),
                |segs| {
                    let arr = build_arrangement(&segs, &tol);
                    let _trace = trace_faces(&arr, None);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function("grid_3x3", |b| {
        let segs = grid_edges(3, 50.0, Point::new(0.0, 0.0));
        b.iter(|| polygonize(&segs))
    });
    group.finish();
}

criterion_group!(benches, bench_polygonize);
criterion_main!(benches);
