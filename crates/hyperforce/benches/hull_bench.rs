//! Criterion benchmarks for the boundary pipeline (hull, inflate, order,
//! smooth). Focus sizes: m in {8, 32, 128} points.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hyperforce::boundary::{inflate, order_cycle, smooth_closed};
use hyperforce::geom::ConvexHull;
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_cloud(m: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

fn bench_boundary(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary");
    for &m in &[8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("curve", m), &m, |b, &m| {
            b.iter_batched(
                || random_cloud(m, 43),
                |pts| {
                    let hull = ConvexHull::from_points(&pts).unwrap();
                    let inflated = inflate(&hull, 0.008).unwrap();
                    let order = order_cycle(&inflated).unwrap();
                    let ordered: Vec<Vector2<f64>> =
                        order.iter().map(|&i| inflated.points[i]).collect();
                    smooth_closed(&ordered, 1000)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_boundary);
criterion_main!(benches);
