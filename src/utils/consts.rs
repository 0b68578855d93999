//! Tolerances used by the geometric predicates.
//!
//! All of these are absolute values. They assume a world expressed in
//! "human-scale" units (roughly one unit per meter): classification results
//! of very large or very small geometry will drift from the exact answer by
//! up to these amounts.

use crate::math::Real;

/// Half-width of the band around a plane inside which a point is
/// classified as [`PlaneSide::On`](crate::shape::PlaneSide::On).
pub const PLANE_SIDE_EPSILON: Real = 0.005;

/// Smallest squared length of the cross product of two plane normals for the
/// planes to be considered non-parallel, by
/// [`Plane::intersect_plane`](crate::shape::Plane::intersect_plane) and
/// [`Plane::is_parallel_to`](crate::shape::Plane::is_parallel_to).
pub const PLANE_PARALLEL_EPSILON: Real = 0.00001;

/// Largest absolute value of a unit-normal component (or of the dot product of
/// two unit normals) still treated as zero by the plane orientation predicates
/// such as [`Plane::is_vertical`](crate::shape::Plane::is_vertical) and
/// [`Plane::is_perpendicular_to`](crate::shape::Plane::is_perpendicular_to).
pub const PLANE_ORIENTATION_EPSILON: Real = 0.00001;

/// Smallest absolute triple product of three unit normals for
/// [`Plane::intersect_three`](crate::shape::Plane::intersect_three) to accept
/// them as independent.
pub const PLANE_TRIPLE_PRODUCT_EPSILON: Real = 0.00001;

/// Smallest `|a| + |b|` of a projected silhouette line `a * u + b * v + c = 0`
/// kept by [`PolyhedronBoxIntersector`](crate::query::PolyhedronBoxIntersector).
/// Shorter lines come from edges parallel to the projection axis.
pub const SILHOUETTE_LINE_EPSILON: Real = 0.00001;

/// Largest squared sine of the angle between two triangle edges for which
/// [`tri_box_overlap`](crate::query::tri_box_overlap) treats the triangle as
/// collinear and skips its normal axis.
pub const COLLINEAR_TRIANGLE_EPSILON: Real = Real::EPSILON;

/// Smallest absolute value of `dot(segment_dir, normal)` for a segment to be
/// considered non-parallel to a plane.
pub const SEGMENT_PARALLEL_EPSILON: Real = 0.000001;

/// Slack allowed when checking whether a segment/plane intersection point
/// lies inside a whole [`PlaneSet`](crate::query::PlaneSet).
pub const PLANE_SET_CONTAINMENT_EPSILON: Real = 1.0e-4;

/// Smallest determinant accepted by the ray/triangle test before the ray is
/// considered parallel to the triangle.
#[cfg(feature = "f32")]
pub const TRIANGLE_EPSILON: Real = 1.0e-5;

/// Smallest determinant accepted by the ray/triangle test before the ray is
/// considered parallel to the triangle.
#[cfg(feature = "f64")]
pub const TRIANGLE_EPSILON: Real = 1.0e-6;

/// Maximum number of vertices a single [`Plane::clip_polygon`](crate::shape::Plane::clip_polygon)
/// call may produce.
pub const MAX_CLIP_VERTICES: usize = 128;

/// Maximum number of planes [`PlaneSet::test_planes`](crate::query::PlaneSet::test_planes)
/// can report in its bit mask.
pub const MAX_PLANE_SET_MASK_PLANES: usize = 32;

/// Parameter standing for "no intersection" when segment/plane parameters are
/// stored in flat arrays.
///
/// [`Plane::intersect_segment`](crate::shape::Plane::intersect_segment)
/// returns `None` for a segment parallel to the plane; use
/// `.unwrap_or(PARALLEL_PLANE)` to store it.
pub const PARALLEL_PLANE: Real = 1.0e20;
