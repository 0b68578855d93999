use isect3d::query::{cast_segment_triangle, intersect_triangle, segment_intersects_triangle};
use na::{Point3, Vector3};

fn random_vector(rng: &mut oorandom::Rand32, range: f32) -> Vector3<f32> {
    Vector3::new(
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
    ) * range
}

#[test]
fn rays_aimed_inside_random_triangles() {
    let mut rng = oorandom::Rand32::new(42);
    let mut num_tested = 0;

    for _ in 0..1000 {
        let [a, b, c] = [(); 3].map(|_| Point3::from(random_vector(&mut rng, 10.0)));
        let normal = (b - a).cross(&(c - a));

        if normal.norm() < 1.0 {
            continue;
        }

        // A target point with barycentric coordinates away from the edges.
        let u = 0.05 + rng.rand_float() * 0.4;
        let v = 0.05 + rng.rand_float() * 0.4;
        let target = a + (b - a) * u + (c - a) * v;
        let origin = Point3::from(random_vector(&mut rng, 20.0));
        let dir = target - origin;

        if normal.normalize().dot(&dir.normalize()).abs() < 0.1 {
            continue;
        }

        num_tested += 1;

        let hit = intersect_triangle(&origin, &dir, &a, &b, &c)
            .unwrap_or_else(|| panic!("the ray from {:?} misses {:?}", origin, target));
        assert_relative_eq!(hit.t, 1.0, epsilon = 1.0e-3);
        assert_relative_eq!(hit.u, u, epsilon = 1.0e-3);
        assert_relative_eq!(hit.v, v, epsilon = 1.0e-3);
        assert_relative_eq!(hit.point_on_triangle(&a, &b, &c), target, epsilon = 1.0e-2);

        // Pointing away from the triangle.
        assert!(intersect_triangle(&origin, &-dir, &a, &b, &c).is_none());

        // The segment variant only accepts hits before its end.
        let far_end = origin + dir * 2.0;
        let hit = cast_segment_triangle(&origin, &far_end, &a, &b, &c)
            .expect("the segment crosses the triangle");
        assert_relative_eq!(hit.t, 0.5, epsilon = 1.0e-3);
        assert!(segment_intersects_triangle(&origin, &far_end, &a, &b, &c));
        assert!(!segment_intersects_triangle(&origin, &(origin + dir * 0.5), &a, &b, &c));
    }

    assert!(num_tested > 100);
}

#[test]
fn rays_aimed_outside_random_triangles() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let [a, b, c] = [(); 3].map(|_| Point3::from(random_vector(&mut rng, 10.0)));
        let normal = (b - a).cross(&(c - a));

        if normal.norm() < 1.0 {
            continue;
        }

        // Beyond the edge `[b, c]`.
        let u = 0.6 + rng.rand_float() * 0.3;
        let v = 0.6 + rng.rand_float() * 0.3;
        let target = a + (b - a) * u + (c - a) * v;
        let origin = Point3::from(random_vector(&mut rng, 20.0));
        let dir = target - origin;

        if normal.normalize().dot(&dir.normalize()).abs() < 0.1 {
            continue;
        }

        assert!(intersect_triangle(&origin, &dir, &a, &b, &c).is_none());
    }
}
