use isect3d::bounding_volume::BoundingSphere;
use na::{Point3, Vector3};

fn random_point(rng: &mut oorandom::Rand32, range: f32) -> Point3<f32> {
    Point3::new(
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
    ) * range
}

#[test]
fn rays_towards_and_away_from_sphere() {
    let sphere = BoundingSphere::new(Point3::origin(), 1.0);

    let start = Point3::new(0.0, 0.0, 5.0);
    assert!(sphere.intersects_ray(&start, &(start - Vector3::z())));

    let start = Point3::new(5.0, 0.0, 0.0);
    assert!(!sphere.intersects_ray(&start, &(start + Vector3::x())));
}

#[test]
fn smaller_sphere_never_contains_larger_one() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let a = BoundingSphere::new(random_point(&mut rng, 4.0), rng.rand_float() * 3.0);
        let b = BoundingSphere::new(random_point(&mut rng, 4.0), rng.rand_float() * 3.0);
        let (small, large) = if a.radius() < b.radius() { (a, b) } else { (b, a) };

        if small.radius() < large.radius() {
            assert!(!small.contains_sphere(&large));
        }

        // A sphere centered at the same place with a smaller radius is always contained.
        let inner = BoundingSphere::new(*large.center(), small.radius());
        assert!(large.contains_sphere(&inner));
        assert_eq!(a.intersects_sphere(&b), b.intersects_sphere(&a));
    }
}

#[test]
fn rays_through_random_spheres() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let sphere = BoundingSphere::new(random_point(&mut rng, 10.0), 0.1 + rng.rand_float());
        let start = random_point(&mut rng, 40.0);

        if sphere.contains_point(&start) {
            continue;
        }

        // Aimed at the center: hits, whatever the length of the segment.
        let towards = *sphere.center() - start;
        assert!(sphere.intersects_ray(&start, &(start + towards * 0.01)));
        // Aimed away from the center: misses.
        assert!(!sphere.intersects_ray(&start, &(start - towards)));
    }
}
