use isect3d::bounding_volume::{Aabb, BoundingSphere, Obb};
use isect3d::query::{GeometryClass, PlaneMask, PlaneSet};
use isect3d::shape::{Plane, Polyhedron};
use na::{Isometry3, Point3, Vector3};

fn random_vector(rng: &mut oorandom::Rand32, range: f32) -> Vector3<f32> {
    Vector3::new(
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
    ) * range
}

/// The six inward planes of a perspective frustum looking down `-z`, with the given near and
/// far distances and a 90° field of view.
fn frustum_planes(near: f32, far: f32) -> Vec<Plane> {
    let origin = Point3::origin();
    vec![
        Plane::from_point_normal(&Point3::new(0.0, 0.0, -near), &-Vector3::z()),
        Plane::from_point_normal(&Point3::new(0.0, 0.0, -far), &Vector3::z()),
        Plane::from_point_normal(&origin, &Vector3::new(1.0, 0.0, -1.0)),
        Plane::from_point_normal(&origin, &Vector3::new(-1.0, 0.0, -1.0)),
        Plane::from_point_normal(&origin, &Vector3::new(0.0, 1.0, -1.0)),
        Plane::from_point_normal(&origin, &Vector3::new(0.0, -1.0, -1.0)),
    ]
}

#[test]
fn frustum_culls_boxes_and_spheres() {
    let planes = frustum_planes(1.0, 100.0);
    let frustum = PlaneSet::new(&planes);

    let visible = Aabb::new(Point3::new(-1.0, -1.0, -12.0), Point3::new(1.0, 1.0, -10.0));
    let behind = Aabb::new(Point3::new(-1.0, -1.0, 2.0), Point3::new(1.0, 1.0, 4.0));
    let on_the_side = Aabb::new(Point3::new(20.0, -1.0, -12.0), Point3::new(22.0, 1.0, -10.0));
    let straddling = Aabb::new(Point3::new(9.0, -1.0, -11.0), Point3::new(12.0, 1.0, -9.0));

    assert_eq!(frustum.test_potential_intersection(&visible), GeometryClass::Inside);
    assert_eq!(frustum.test_potential_intersection(&behind), GeometryClass::Outside);
    assert_eq!(frustum.test_potential_intersection(&on_the_side), GeometryClass::Outside);
    assert_eq!(
        frustum.test_potential_intersection(&straddling),
        GeometryClass::Intersecting
    );

    let sphere = BoundingSphere::new(Point3::new(0.0, 0.0, -50.0), 2.0);
    assert_eq!(frustum.test_potential_intersection(&sphere), GeometryClass::Inside);
    let sphere = BoundingSphere::new(Point3::new(0.0, 0.0, -101.0), 2.0);
    assert_eq!(
        frustum.test_potential_intersection(&sphere),
        GeometryClass::Intersecting
    );

    let obb = Obb::from_half_extents(
        &Isometry3::new(Vector3::new(0.0, 0.0, -20.0), Vector3::y() * 0.7),
        &Vector3::new(3.0, 1.0, 1.0),
    );
    assert_eq!(frustum.test_potential_intersection(&obb), GeometryClass::Inside);
}

#[test]
fn hierarchical_plane_masks() {
    let planes = frustum_planes(1.0, 100.0);
    let frustum = PlaneSet::new(&planes);
    let all_planes = PlaneMask::first_planes(frustum.len());

    // A parent node straddling the right plane only.
    let parent = Aabb::new(Point3::new(5.0, -1.0, -12.0), Point3::new(15.0, 1.0, -10.0));
    let mask = frustum.test_planes(&parent, all_planes, 0.0);
    assert_eq!(mask, PlaneMask::plane(3));

    // Its children only need to be tested against that plane.
    let inside_child = Aabb::new(Point3::new(5.0, -1.0, -12.0), Point3::new(8.0, 1.0, -10.0));
    let outside_child = Aabb::new(Point3::new(12.5, -1.0, -12.0), Point3::new(15.0, 1.0, -10.0));
    assert_eq!(frustum.test_planes(&inside_child, mask, 0.0), PlaneMask::empty());
    assert_eq!(frustum.test_planes(&outside_child, mask, 0.0), PlaneMask::ALL);
}

#[test]
fn plane_set_classification_is_conservative() {
    let mut rng = oorandom::Rand32::new(42);
    let mut counts = [0; 3];

    for _ in 0..200 {
        let pos = Isometry3::new(random_vector(&mut rng, 4.0), random_vector(&mut rng, 6.0));
        let half_extents = Vector3::repeat(0.5) + random_vector(&mut rng, 2.0).abs();
        let region = Obb::from_half_extents(&pos, &half_extents);
        let polyhedron = Polyhedron::from_obb(&region);
        let set = PlaneSet::new(&polyhedron.planes);
        let all_planes = PlaneMask::first_planes(set.len());

        for _ in 0..20 {
            let center = Point3::from(random_vector(&mut rng, 6.0));
            let aabb = Aabb::from_half_extents(center, random_vector(&mut rng, 0.5).abs());
            let class = set.test_potential_intersection(&aabb);
            let mask = set.test_planes(&aabb, all_planes, 0.0);

            match class {
                GeometryClass::Outside => {
                    counts[0] += 1;
                    assert_eq!(mask, PlaneMask::ALL);

                    for corner in aabb.vertices() {
                        assert!(!set.contains_point(&corner, -1.0e-3));
                    }

                    assert!(!set.contains_point(&aabb.center(), -1.0e-3));
                }
                GeometryClass::Inside => {
                    counts[1] += 1;
                    assert_eq!(mask, PlaneMask::empty());
                    assert!(set.contains_aabb(&aabb));
                }
                GeometryClass::Intersecting => counts[2] += 1,
            }
        }
    }

    assert!(counts.iter().all(|count| *count > 0), "{:?}", counts);
}

#[test]
fn clipped_segments_lie_in_region() {
    let mut rng = oorandom::Rand32::new(42);
    let planes = frustum_planes(1.0, 20.0);
    let frustum = PlaneSet::new(&planes);
    let mut num_clipped = 0;

    for _ in 0..1000 {
        let a = Point3::from(random_vector(&mut rng, 40.0));
        let b = Point3::from(random_vector(&mut rng, 40.0));

        if let Some((start, end)) = frustum.clip_segment(&a, &b) {
            num_clipped += 1;
            assert!(frustum.contains_point(&start, 1.0e-2));
            assert!(frustum.contains_point(&end, 1.0e-2));
        } else {
            // Nothing along the segment is in the frustum.
            for i in 0..=20 {
                let pt = a + (b - a) * (i as f32 / 20.0);
                assert!(!frustum.contains_point(&pt, -1.0e-2));
            }
        }
    }

    assert!(num_clipped > 0);
}
