use isect3d::bounding_volume::{Aabb, BoundingVolume};
use na::{Point3, Vector3};

fn random_aabb(rng: &mut oorandom::Rand32, range: f32) -> Aabb {
    let a = Point3::new(rng.rand_float(), rng.rand_float(), rng.rand_float()) * range;
    let b = Point3::new(rng.rand_float(), rng.rand_float(), rng.rand_float()) * range;
    Aabb::new(a, b)
}

#[test]
fn nested_box_overlap() {
    let outer = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let inner = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));

    assert_eq!(outer.overlap(&inner), inner);
    assert!(outer.contains_aabb(&inner));
    assert!(!inner.contains_aabb(&outer));
}

#[test]
fn disjoint_box_overlap_is_empty() {
    let a = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let b = Aabb::new(Point3::new(10.0, 10.0, 10.0), Point3::new(11.0, 11.0, 11.0));

    assert!(a.overlap(&b).is_empty());
    assert!(!a.intersects_aabb(&b));
}

#[test]
fn overlap_properties() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let a = random_aabb(&mut rng, 10.0);
        let b = random_aabb(&mut rng, 10.0);

        assert_eq!(a.intersects_aabb(&b), b.intersects_aabb(&a));
        assert_eq!(a.overlap(&a), a);
        assert_eq!(a.overlap(&b), b.overlap(&a));

        let overlap = a.overlap(&b);

        if a.intersects_aabb(&b) {
            assert!(a.contains_aabb(&overlap) && b.contains_aabb(&overlap));
        } else {
            assert!(overlap.is_empty());
        }

        let merged = a.merged(&b);
        assert!(merged.contains_aabb(&a) && merged.contains_aabb(&b));
    }
}

#[test]
fn segments_through_boxes() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let aabb = random_aabb(&mut rng, 4.0);
        let target = aabb.center();
        let dir = Vector3::new(
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
        );

        if dir.norm() < 0.1 {
            continue;
        }

        let start = target - dir.normalize() * 20.0;
        let end = target + dir.normalize() * 20.0;
        let hit = aabb
            .collide_line(&start, &end)
            .expect("the segment passes through the box center");

        let entry = start + (end - start) * hit.toi;
        let face = hit.face.expect("the segment starts outside of the box");
        let bound = if face.is_positive() { aabb.maxs } else { aabb.mins };
        assert!((entry[face.axis()] - bound[face.axis()]).abs() < 1.0e-3);
        // The segment enters through that face.
        assert!(hit.normal.dot(&(end - start)) < 0.0);

        // A segment stopping short of the box misses it.
        let short_end = start + (end - start) * (hit.toi * 0.9);
        assert!(!aabb.collide_line_test(&start, &short_end));
    }
}
