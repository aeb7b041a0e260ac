use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pbr_math::*;

fn vec_benchmark(c: &mut Criterion) {
    let a = Vec3::new(1.5f32, -2.0, 3.25);
    let b = Vec3::new(-0.5f32, 4.0, 1.0);

    c.bench_function("f32v3::cross", |bench| bench.iter(|| black_box(a).cross(black_box(b))));
    c.bench_function("f32v3::normalize", |bench| bench.iter(|| black_box(a).normalize()));
    c.bench_function("f32v3 / scalar", |bench| bench.iter(|| black_box(a) / black_box(3.0f32)));
    c.bench_function("f32v3::coordinate_system", |bench| bench.iter(|| black_box(a.normalize()).coordinate_system()));
}

fn aabb_benchmark(c: &mut Criterion) {
    let boxes : Vec<f32aabb3> = (0..64)
        .map(|i| {
            let f = i as f32;
            AABB3::new(Vec3::new(f, -f, f * 0.5), Vec3::new(f + 2.0, 1.0 - f, f))
        })
        .collect();

    c.bench_function("f32aabb3::union (64)", |bench| bench.iter(|| {
        black_box(&boxes).iter().fold(f32aabb3::empty(), |acc, b| acc.union(*b))
    }));
    c.bench_function("f32aabb3::overlaps (64)", |bench| bench.iter(|| {
        let probe = black_box(boxes[17]);
        black_box(&boxes).iter().filter(|b| b.overlaps(probe)).count()
    }));
    c.bench_function("f32aabb3::bounding_sphere", |bench| bench.iter(|| black_box(boxes[5]).bounding_sphere()));
}

fn ray_benchmark(c: &mut Criterion) {
    let diff = Differentials {
        rx_origin: Vec3::new(0.01f32, 0.0, 0.0),
        ry_origin: Vec3::new(0.0, 0.01, 0.0),
        rx_direction: Vec3::new(0.001, 0.0, 1.0),
        ry_direction: Vec3::new(0.0, 0.001, 1.0),
    };
    let ray = RayDifferential::with_differentials(Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0)), diff);

    c.bench_function("RayDifferential::scale_differentials", |bench| bench.iter(|| {
        let mut ray = black_box(ray);
        ray.scale_differentials(black_box(0.25));
        ray
    }));
    c.bench_function("Ray::at", |bench| bench.iter(|| black_box(ray.ray).at(black_box(2.5))));
}

criterion_group!(benches, vec_benchmark, aabb_benchmark, ray_benchmark);
criterion_main!(benches);
