//! Criterion benchmarks for segment and polygon crossing tests.
//! Focus sizes: n in {4, 8, 32, 128} vertices per ring; disjoint pairs
//! exercise the full O(n·m) scan, overlapping pairs the early exit.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use polycross::polygon::polys_intersect;
use polycross::sample::{draw_ring, shift, ReplayToken, RingCfg, VertexCount};
use polycross::segment::segment_intersection;

fn ring(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let cfg = RingCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RingCfg::default()
    };
    draw_ring(cfg, ReplayToken { seed, index: 0 })
}

fn bench_cross(c: &mut Criterion) {
    let mut group = c.benchmark_group("polys_intersect");
    for &n in &[4usize, 8, 32, 128] {
        let base = ring(n, 43);
        let disjoint = shift(&base, Vector2::new(10.0, 0.0));
        let overlapping = shift(&base, Vector2::new(0.05, 0.0));
        group.bench_with_input(BenchmarkId::new("disjoint", n), &n, |b, _| {
            b.iter(|| {
                let _hit = polys_intersect(&base, &disjoint);
            })
        });
        group.bench_with_input(BenchmarkId::new("overlapping", n), &n, |b, _| {
            b.iter(|| {
                let _hit = polys_intersect(&base, &overlapping);
            })
        });
    }
    group.finish();

    c.bench_function("segment_intersection", |b| {
        let (p, q) = (Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0));
        let (r, s) = (Vector2::new(0.0, 2.0), Vector2::new(2.0, 0.0));
        b.iter(|| {
            let _hit = segment_intersection(p, q, r, s);
        })
    });
}

criterion_group!(benches, bench_cross);
criterion_main!(benches);
