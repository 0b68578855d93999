// Cross-checks the polyhedron/box intersector against point sampling.

use isect3d::bounding_volume::{Aabb, Obb};
use isect3d::query::{GeometryClass, PolyhedronBoxIntersector};
use isect3d::shape::{Plane, Polyhedron, PolyhedronEdge};
use isect3d::utils::centroid;
use na::{Isometry3, Point3, Vector3};

fn random_vector(rng: &mut oorandom::Rand32, range: f32) -> Vector3<f32> {
    Vector3::new(
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
        rng.rand_float() - 0.5,
    ) * range
}

/// A random tetrahedron with inward planes, or `None` if it is too flat.
fn random_tetrahedron(rng: &mut oorandom::Rand32) -> Option<Polyhedron> {
    let pts: Vec<_> = (0..4)
        .map(|_| Point3::from(random_vector(rng, 4.0)))
        .collect();

    let volume = (pts[1] - pts[0])
        .cross(&(pts[2] - pts[0]))
        .dot(&(pts[3] - pts[0]));

    if volume.abs() < 1.0 {
        return None;
    }

    // The face `i` is opposite to the vertex `i`.
    let planes = (0..4)
        .map(|i| {
            let [a, b, c] = [(i + 1) % 4, (i + 2) % 4, (i + 3) % 4].map(|j| pts[j]);
            let mut normal = (b - a).cross(&(c - a));

            if normal.dot(&(pts[i] - a)) < 0.0 {
                normal = -normal;
            }

            Plane::from_point_normal(&a, &normal)
        })
        .collect();

    // The edge `[i, j]` is shared by the two faces opposite to the two other vertices.
    let mut edges = vec![];
    for i in 0..4u32 {
        for j in i + 1..4 {
            let faces: Vec<u32> = (0..4).filter(|k| *k != i && *k != j).collect();
            edges.push(PolyhedronEdge::new([i, j], [faces[0], faces[1]]));
        }
    }

    Some(Polyhedron::new(pts, planes, edges))
}

fn random_box_polyhedron(rng: &mut oorandom::Rand32) -> Polyhedron {
    let pos = Isometry3::new(random_vector(rng, 2.0), random_vector(rng, 6.0));
    let half_extents = Vector3::repeat(0.8) + random_vector(rng, 2.0).abs();
    Polyhedron::from_obb(&Obb::from_half_extents(&pos, &half_extents))
}

/// Signed distance from `pt` to the surface of the polyhedron, positive inside, computed in
/// the local frame of the polyhedron.
fn depth_inside(polyhedron: &Polyhedron, to_local: &Isometry3<f32>, scale: &Vector3<f32>, pt: &Point3<f32>) -> f32 {
    let local = Point3::from((to_local * pt).coords.component_div(scale));
    polyhedron
        .planes
        .iter()
        .map(|plane| plane.distance_to_point(&local))
        .fold(f32::MAX, f32::min)
}

fn sample_points(aabb: &Aabb, n: usize) -> Vec<Point3<f32>> {
    let mut pts = vec![];
    for i in 0..=n {
        for j in 0..=n {
            for k in 0..=n {
                let t = Vector3::new(i as f32, j as f32, k as f32) / n as f32;
                pts.push(aabb.mins + aabb.extents().component_mul(&t));
            }
        }
    }
    pts
}

fn check_polyhedron(rng: &mut oorandom::Rand32, polyhedron: &Polyhedron, counts: &mut [usize; 3]) {
    let pos = Isometry3::new(random_vector(rng, 4.0), random_vector(rng, 6.0));
    let scale = Vector3::repeat(0.5) + random_vector(rng, 2.0).abs();
    let to_local = pos.inverse();
    let intersector = PolyhedronBoxIntersector::new(polyhedron, &pos, &scale)
        .expect("the polyhedron is valid");

    let local_centroid = centroid(&polyhedron.points).expect("the polyhedron is not empty");
    let world_centroid = pos * Point3::from(local_centroid.coords.component_mul(&scale));

    for i in 0..30 {
        // One box out of three is small and close to the centroid.
        let aabb = if i % 3 == 0 {
            Aabb::from_half_extents(
                world_centroid + random_vector(rng, 0.4),
                random_vector(rng, 0.2).abs(),
            )
        } else {
            Aabb::from_half_extents(
                Point3::from(random_vector(rng, 8.0)),
                random_vector(rng, 3.0).abs(),
            )
        };

        match intersector.test(&aabb) {
            GeometryClass::Outside => {
                counts[0] += 1;

                for pt in sample_points(&aabb, 6) {
                    assert!(
                        depth_inside(polyhedron, &to_local, &scale, &pt) < 1.0e-2,
                        "{:?} is inside of the polyhedron but {:?} was classified outside",
                        pt,
                        aabb
                    );
                }
            }
            GeometryClass::Inside => {
                counts[1] += 1;

                for corner in aabb.vertices() {
                    assert!(
                        depth_inside(polyhedron, &to_local, &scale, &corner) > -1.0e-3,
                        "{:?} is outside of the polyhedron but {:?} was classified inside",
                        corner,
                        aabb
                    );
                }
            }
            GeometryClass::Intersecting => {
                counts[2] += 1;
                assert!(intersector.bounds().intersects_aabb(&aabb));
            }
        }
    }
}

#[test]
fn box_polyhedra_against_random_boxes() {
    let mut rng = oorandom::Rand32::new(42);
    let mut counts = [0; 3];

    for _ in 0..100 {
        let polyhedron = random_box_polyhedron(&mut rng);
        assert_eq!(polyhedron.validate(), Ok(()));
        check_polyhedron(&mut rng, &polyhedron, &mut counts);
    }

    assert!(counts.iter().all(|count| *count > 0), "{:?}", counts);
}

#[test]
fn tetrahedra_against_random_boxes() {
    let mut rng = oorandom::Rand32::new(42);
    let mut counts = [0; 3];
    let mut num_tested = 0;

    while num_tested < 100 {
        let Some(polyhedron) = random_tetrahedron(&mut rng) else {
            continue;
        };

        assert_eq!(polyhedron.validate(), Ok(()));
        check_polyhedron(&mut rng, &polyhedron, &mut counts);
        num_tested += 1;
    }

    assert!(counts[0] > 0 && counts[2] > 0, "{:?}", counts);
}

#[test]
fn test_many_agrees_with_test() {
    let mut rng = oorandom::Rand32::new(42);
    let polyhedron = random_box_polyhedron(&mut rng);
    let intersector =
        PolyhedronBoxIntersector::new(&polyhedron, &Isometry3::identity(), &Vector3::repeat(1.0))
            .expect("the polyhedron is valid");
    let aabbs: Vec<_> = (0..500)
        .map(|_| {
            Aabb::from_half_extents(
                Point3::from(random_vector(&mut rng, 8.0)),
                random_vector(&mut rng, 3.0).abs(),
            )
        })
        .collect();
    let expected: Vec<_> = aabbs.iter().map(|aabb| intersector.test(aabb)).collect();

    assert_eq!(intersector.test_many(&aabbs), expected);
}
