// Cross-checks the triangle/box test against polygon clipping.

use isect3d::bounding_volume::{Aabb, BoxFace};
use isect3d::query::{tri_box_overlap, PlaneSet};
use isect3d::shape::Plane;
use na::{Isometry3, Point3, Vector3};

fn random_vector(rng: &mut oorandom::Rand32, range: f32) -> Vector3<f32> {
    Vector3::new(
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
    ) * range
}

fn inward_planes(aabb: &Aabb) -> Vec<Plane> {
    BoxFace::ALL
        .iter()
        .map(|face| aabb.face_plane(*face).flipped())
        .collect()
}

/// Does the triangle keep any vertex once clipped by the planes of `aabb`?
fn clipping_keeps_triangle(aabb: &Aabb, triangle: &[Point3<f32>; 3]) -> bool {
    let planes = inward_planes(aabb);
    let mut out = vec![];
    PlaneSet::new(&planes)
        .clip_polygon(triangle, &mut out, 16)
        .expect("a clipped triangle has at most 9 vertices")
        > 0
}

/// Checks the overlap test against clipping by slightly shrunk and enlarged boxes.
fn check_triangle(center: &Point3<f32>, half_size: &Vector3<f32>, triangle: &[Point3<f32>; 3]) {
    let overlap = tri_box_overlap(center, half_size, triangle);
    let margin = Vector3::repeat(2.0e-2);
    let shrunk = Aabb::from_half_extents(*center, half_size - margin);
    let enlarged = Aabb::from_half_extents(*center, half_size + margin);

    if clipping_keeps_triangle(&shrunk, triangle) {
        assert!(overlap, "{:?} crosses the box but was not detected", triangle);
    }

    if !clipping_keeps_triangle(&enlarged, triangle) {
        assert!(!overlap, "{:?} misses the box but was detected", triangle);
    }
}

#[test]
fn random_triangles_against_unit_box() {
    let mut rng = oorandom::Rand32::new(42);
    let center = Point3::origin();
    let half_size = Vector3::repeat(1.0);
    let mut num_overlaps = 0;

    for _ in 0..2000 {
        let triangle = [(); 3].map(|_| Point3::from(random_vector(&mut rng, 6.0)));
        check_triangle(&center, &half_size, &triangle);
        num_overlaps += tri_box_overlap(&center, &half_size, &triangle) as usize;
    }

    assert!(num_overlaps > 0 && num_overlaps < 2000);
}

#[test]
fn axis_aligned_triangles() {
    let mut rng = oorandom::Rand32::new(42);
    let center = Point3::new(3.0, -2.0, 1.0);
    let half_size = Vector3::new(1.0, 0.5, 2.0);

    for _ in 0..1000 {
        // All the vertices share one coordinate.
        let axis = (rng.rand_u32() % 3) as usize;
        let level = center[axis] + (rng.rand_float() - 0.5) * 2.0 * (half_size[axis] + 0.5);
        let triangle = [(); 3].map(|_| {
            let mut pt = center + random_vector(&mut rng, 8.0);
            pt[axis] = level;
            pt
        });

        check_triangle(&center, &half_size, &triangle);
    }
}

#[test]
fn rotated_triangles_around_box_edges() {
    let mut rng = oorandom::Rand32::new(42);
    let center = Point3::origin();
    let half_size = Vector3::repeat(1.0);

    for _ in 0..1000 {
        // A small triangle near one of the box edges, randomly rotated about it.
        let base = [
            Point3::new(-0.5, 0.0, 0.0),
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(0.0, 0.6, 0.0),
        ];
        let pos = Isometry3::new(
            Vector3::new(0.0, 1.0, 1.0) + random_vector(&mut rng, 1.0),
            random_vector(&mut rng, 6.0),
        );
        let triangle = base.map(|pt| pos * pt);

        check_triangle(&center, &half_size, &triangle);
    }
}

#[test]
fn degenerate_triangles() {
    let mut rng = oorandom::Rand32::new(42);
    let center = Point3::origin();
    let half_size = Vector3::repeat(1.0);

    for _ in 0..1000 {
        let a = Point3::from(random_vector(&mut rng, 5.0));
        let b = Point3::from(random_vector(&mut rng, 5.0));

        // A single point and a segment.
        let point = [a; 3];
        assert_eq!(
            tri_box_overlap(&center, &half_size, &point),
            Aabb::from_half_extents(center, half_size).contains_aabb(&Aabb::new(a, a))
        );

        let segment = [a, b, na::center(&a, &b)];
        check_triangle(&center, &half_size, &segment);
    }
}
