use pbr_math::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const ITERATIONS : usize = 256;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_1234)
}

fn random_vec(rng: &mut StdRng) -> f32v3 {
    Vec3::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0))
}

fn random_ivec(rng: &mut StdRng) -> i32v3 {
    Vec3::new(rng.gen_range(-50..50), rng.gen_range(-50..50), rng.gen_range(-50..50))
}

fn random_box(rng: &mut StdRng) -> i32aabb3 {
    AABB3::new(random_ivec(rng), random_ivec(rng))
}

#[test]
fn negation_is_additive_inverse() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = random_vec(&mut rng);
        assert_eq!(v + (-v), Vec3::zero());
        let i = random_ivec(&mut rng);
        assert_eq!(i + (-i), Vec3::zero());
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = random_vec(&mut rng);
        if v.len_sq() < 1e-3 {
            continue;
        }
        assert!((v.normalize().len() - 1.0).abs() < 1e-5, "{v}");
    }
}

#[test]
fn dot_is_symmetric_and_cross_anti_symmetric() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_ivec(&mut rng);
        let b = random_ivec(&mut rng);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(b).dot(a), 0);
        assert_eq!(a.cross(b).dot(b), 0);
    }
}

#[test]
fn two_point_box_is_ordered() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let p = random_vec(&mut rng);
        let q = random_vec(&mut rng);
        let b = AABB3::new(p, q);
        assert_eq!(b, AABB3::new(q, p));
        assert_eq!(b.min, Vec3::new(p.x.min(q.x), p.y.min(q.y), p.z.min(q.z)));
        assert_eq!(b.max, Vec3::new(p.x.max(q.x), p.y.max(q.y), p.z.max(q.z)));
        assert!(!b.is_empty());
    }
}

#[test]
fn union_point_contains_box_and_point() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let b = random_box(&mut rng);
        let p = random_ivec(&mut rng);
        let u = b.union_point(p);
        assert!(u.contains(p));
        for i in 0..8 {
            assert!(u.contains(b.corner(i)));
        }
        for _ in 0..8 {
            let q = Vec3::new(rng.gen_range(b.min.x..=b.max.x), rng.gen_range(b.min.y..=b.max.y), rng.gen_range(b.min.z..=b.max.z));
            assert!(b.contains(q));
            assert!(u.contains(q));
        }
    }
}

#[test]
fn overlap_matches_intersection() {
    let mut rng = rng();
    for _ in 0..ITERATIONS * 4 {
        let a = random_box(&mut rng);
        let b = random_box(&mut rng);
        let i = a.intersect(b);
        let valid = i.min.x <= i.max.x && i.min.y <= i.max.y && i.min.z <= i.max.z;
        assert_eq!(a.overlaps(b), valid, "{a} {b}");
        assert_eq!(a.overlaps(b), b.overlaps(a));
        assert_eq!(valid, !i.is_empty());
    }
}

#[test]
fn corners_are_inside() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let b = AABB3::new(random_vec(&mut rng), random_vec(&mut rng));
        for i in 0..8 {
            assert!(b.contains(b.corner(i)));
        }
    }
}

#[test]
fn smoke_bounding_sphere() {
    let b : f32aabb3 = AABB3::new(Vec3::new(-7.0, -5.0, -3.0), Vec3::new(-3.0, -1.0, 1.0));
    assert_eq!(b.min, Vec3::new(-7.0, -5.0, -3.0));
    assert_eq!(b.max, Vec3::new(-3.0, -1.0, 1.0));

    let (center, radius) = b.bounding_sphere();
    assert_eq!(center, Vec3::new(-5.0, -3.0, -1.0));
    assert_eq!(radius, center.dist(Vec3::new(-3.0, -1.0, 1.0)));
    assert!((radius - 3.4641).abs() < 1e-4);
    assert_eq!(center.to_string(), "[ -5, -3, -1 ]");
}

#[test]
fn maximum_extent_prefers_x() {
    let b = AABB3::new(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(4.0, 4.0, 2.0));
    assert_eq!(b.diagonal(), Vec3::new(4.0, 4.0, 2.0));
    assert_eq!(b.maximum_extent(), Axis::X);
}

#[test]
fn ray_differentials() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let ray = Ray::new(random_vec(&mut rng), random_vec(&mut rng));
        assert_eq!(ray.at(0.0), ray.orig);

        let diff = Differentials {
            rx_origin: random_vec(&mut rng),
            ry_origin: random_vec(&mut rng),
            rx_direction: random_vec(&mut rng),
            ry_direction: random_vec(&mut rng),
        };
        let mut ray_diff = RayDifferential::with_differentials(ray, diff);
        ray_diff.scale_differentials(1.0);
        let scaled = ray_diff.differentials.unwrap();
        assert!(scaled.rx_origin.is_close_to(diff.rx_origin, 1e-4));
        assert!(scaled.ry_origin.is_close_to(diff.ry_origin, 1e-4));
        assert!(scaled.rx_direction.is_close_to(diff.rx_direction, 1e-4));
        assert!(scaled.ry_direction.is_close_to(diff.ry_direction, 1e-4));

        let mut plain = RayDifferential::from(ray);
        plain.scale_differentials(rng.gen_range(0.0..4.0));
        assert_eq!(plain, RayDifferential::from(ray));
    }
}
