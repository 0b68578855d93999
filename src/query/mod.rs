//! Intersection and classification queries.
//!
//! # Pairwise tests
//! Most pairwise predicates are inherent methods of the bounding volumes involved:
//!
//! * [`Aabb::collide_line`](crate::bounding_volume::Aabb::collide_line) to find where a
//!   segment enters a box.
//! * [`Aabb::collide_oriented_box`](crate::bounding_volume::Aabb::collide_oriented_box) for
//!   the exact box/oriented-box test.
//! * [`BoundingSphere::intersects_ray`](crate::bounding_volume::BoundingSphere::intersects_ray)
//!   for rays against spheres.
//!
//! The triangle predicates are free functions: [`tri_box_overlap`], [`intersect_triangle`],
//! [`cast_segment_triangle`] and [`segment_intersects_triangle`].
//!
//! # Region tests
//! * [`PlaneSet`] classifies volumes against a set of inward planes, like a view frustum.
//!   Its answers are conservative.
//! * [`PolyhedronBoxIntersector`] classifies boxes exactly against a convex polyhedron.

pub use self::error::{ClipError, PolyhedronError};
pub use self::geometry_class::GeometryClass;
pub use self::plane_set::{PlaneMask, PlaneSet};
pub use self::polyhedron_box::PolyhedronBoxIntersector;
pub use self::ray_aabb::LineHit;
pub use self::triangle::{
    cast_segment_triangle, intersect_triangle, segment_intersects_triangle, tri_box_overlap,
    TriangleHit,
};

mod error;
mod geometry_class;
mod plane_set;
mod polyhedron_box;
mod ray_aabb;
mod ray_sphere;
mod sat_aabb_obb;
mod triangle;
