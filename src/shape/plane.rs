//! Implicit plane and side classification.

use crate::bounding_volume::{Aabb, BoundingSphere, Obb};
use crate::math::{Isometry, Point, Real, Vector};
use crate::query::ClipError;
use crate::utils::consts::{
    MAX_CLIP_VERTICES, PLANE_ORIENTATION_EPSILON, PLANE_PARALLEL_EPSILON, PLANE_SIDE_EPSILON,
    PLANE_TRIPLE_PRODUCT_EPSILON, SEGMENT_PARALLEL_EPSILON,
};
use crate::utils::{interpolate, VectorExt};
use arrayvec::ArrayVec;

/// The side of a plane a geometric object lies on.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// Entirely on the side the normal points to.
    Front,
    /// Entirely on the side opposite to the normal.
    Back,
    /// Straddling the plane, or within [`PLANE_SIDE_EPSILON`] of it.
    On,
}

/// An infinite plane given by a normal and a signed offset.
///
/// A point `p` lies on the plane when `dot(normal, p) + d == 0`, so `d` is the *negated*
/// signed distance from the origin to the plane along `normal`. Distances are only metric
/// if `normal` has unit length, which all the constructors except
/// [`Plane::from_normal_and_bias`] ensure.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use isect3d::shape::{Plane, PlaneSide};
/// use nalgebra::{Point3, Vector3};
///
/// let plane = Plane::from_point_normal(&Point3::origin(), &Vector3::x());
/// assert_eq!(plane.which_side(&Point3::new(1.0, 0.0, 0.0)), PlaneSide::Front);
/// assert_eq!(plane.which_side(&Point3::new(-1.0, 0.0, 0.0)), PlaneSide::Back);
/// assert_eq!(plane.distance_to_point(&Point3::new(1.0, 0.0, 0.0)), 1.0);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Plane {
    /// The plane normal.
    pub normal: Vector<Real>,
    /// The negated distance from the origin to the plane, along `normal`.
    pub d: Real,
}

/// Geometric objects that can be classified against a [`Plane`].
pub trait PlaneClassify {
    /// On which side of `plane` does `self` lie?
    fn plane_side(&self, plane: &Plane) -> PlaneSide;
}

impl Plane {
    /// Creates a plane from its raw coefficients.
    ///
    /// `normal` is used as-is: if it does not have unit length, the distances computed by
    /// this plane are scaled by its norm.
    #[inline]
    pub fn from_normal_and_bias(normal: Vector<Real>, d: Real) -> Plane {
        Plane { normal, d }
    }

    /// Creates the plane passing through `point` and orthogonal to `normal`.
    ///
    /// The normal is normalized. A zero normal is a caller error and results in NaN
    /// coefficients.
    #[inline]
    pub fn from_point_normal(point: &Point<Real>, normal: &Vector<Real>) -> Plane {
        let normal = normal.normalize();
        Plane {
            normal,
            d: -normal.dot(&point.coords),
        }
    }

    /// Creates the plane passing through three points.
    ///
    /// The normal follows the right-hand rule: the points are seen counterclockwise when
    /// looking at the front side of the plane.
    #[inline]
    pub fn from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Plane {
        Self::from_point_normal(a, &(b - a).cross(&(c - a)))
    }

    /// Creates the plane passing through three points, or returns `None` if they are
    /// collinear (up to [`SEGMENT_PARALLEL_EPSILON`]).
    #[inline]
    pub fn try_from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Option<Plane> {
        let normal = (b - a).cross(&(c - a));

        if normal.is_zero_eps(SEGMENT_PARALLEL_EPSILON) {
            return None;
        }

        Some(Self::from_point_normal(a, &normal))
    }

    /// Creates the plane passing through `point` and containing the directions `u` and `v`.
    ///
    /// The normal is `u × v`, normalized.
    #[inline]
    pub fn from_point_and_vectors(point: &Point<Real>, u: &Vector<Real>, v: &Vector<Real>) -> Plane {
        Self::from_point_normal(point, &u.cross(v))
    }

    /// The signed distance from this plane to `point`, positive on the front side.
    #[inline]
    pub fn distance_to_point(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) + self.d
    }

    /// Classifies `geom` against this plane.
    ///
    /// Points are classified with an absolute tolerance of [`PLANE_SIDE_EPSILON`]. Boxes
    /// and spheres only test the one or two points of their boundary closest to and
    /// furthest from the plane.
    #[inline]
    pub fn which_side<G: PlaneClassify + ?Sized>(&self, geom: &G) -> PlaneSide {
        geom.plane_side(self)
    }

    /// The orthogonal projection of `point` on this plane.
    #[inline]
    pub fn project_point(&self, point: &Point<Real>) -> Point<Real> {
        point - self.normal * self.distance_to_point(point)
    }

    /// The mirror image of `point` with respect to this plane.
    #[inline]
    pub fn reflect_point(&self, point: &Point<Real>) -> Point<Real> {
        point - self.normal * (self.distance_to_point(point) * 2.0)
    }

    /// The same plane with its front and back sides swapped.
    #[inline]
    #[must_use]
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            d: -self.d,
        }
    }

    /// Is this plane orthogonal to the `z` (up) axis?
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.normal.x.abs() < PLANE_ORIENTATION_EPSILON
            && self.normal.y.abs() < PLANE_ORIENTATION_EPSILON
    }

    /// Does this plane contain the `z` (up) axis direction?
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.normal.z.abs() < PLANE_ORIENTATION_EPSILON
    }

    /// Are the normals of these two planes collinear?
    #[inline]
    pub fn is_parallel_to(&self, other: &Plane) -> bool {
        self.normal.cross(&other.normal).norm_squared() < PLANE_PARALLEL_EPSILON
    }

    /// Are the normals of these two planes orthogonal?
    #[inline]
    pub fn is_perpendicular_to(&self, other: &Plane) -> bool {
        self.normal.dot(&other.normal).abs() < PLANE_ORIENTATION_EPSILON
    }

    /// Computes the image of this plane by the non-uniform scaling `scale` followed by the
    /// rigid motion `pos`.
    ///
    /// The side every point lies on is preserved: a point in front of `self` is mapped to a
    /// point in front of the result. All components of `scale` must be non-zero.
    #[must_use]
    pub fn transformed(&self, pos: &Isometry<Real>, scale: &Vector<Real>) -> Plane {
        // Planes are covectors: they are transformed by the inverse-transpose.
        let scaled_normal = self.normal.component_div(scale);
        let inv_norm = 1.0 / scaled_normal.norm();
        let normal = pos.rotation * (scaled_normal * inv_norm);
        let d = self.d * inv_norm - normal.dot(&pos.translation.vector);

        Plane { normal, d }
    }

    /// The parameter `t` such that `start + t * (end - start)` lies on this plane.
    ///
    /// `t` is not restricted to `[0, 1]`. Returns `None` if the segment is parallel to the
    /// plane.
    #[inline]
    pub fn intersect_segment(&self, start: &Point<Real>, end: &Point<Real>) -> Option<Real> {
        let den = self.normal.dot(&(end - start));

        if den.abs() < SEGMENT_PARALLEL_EPSILON {
            None
        } else {
            Some(-self.distance_to_point(start) / den)
        }
    }

    /// The parameter `t >= 0` such that `origin + t * dir` lies on this plane.
    ///
    /// Returns `None` if the ray is parallel to the plane or points away from it.
    #[inline]
    pub fn intersect_ray(&self, origin: &Point<Real>, dir: &Vector<Real>) -> Option<Real> {
        let den = self.normal.dot(dir);

        if den.abs() < SEGMENT_PARALLEL_EPSILON {
            return None;
        }

        let t = -self.distance_to_point(origin) / den;
        (t >= 0.0).then_some(t)
    }

    /// Clips the segment `[start, end]` to the front half-space of this plane.
    ///
    /// Returns `None` if the segment lies entirely behind the plane. Otherwise, only the
    /// endpoint lying behind the plane (if any) is replaced by the intersection point.
    pub fn clip_segment(
        &self,
        start: &Point<Real>,
        end: &Point<Real>,
    ) -> Option<(Point<Real>, Point<Real>)> {
        let start_dist = self.distance_to_point(start);
        let end_dist = self.distance_to_point(end);

        match (start_dist >= 0.0, end_dist >= 0.0) {
            (true, true) => Some((*start, *end)),
            (false, false) => None,
            (start_in_front, _) => {
                let hit = interpolate(start, end, start_dist / (start_dist - end_dist));

                if start_in_front {
                    Some((*start, hit))
                } else {
                    Some((hit, *end))
                }
            }
        }
    }

    /// Clips a convex polygon to the front half-space of this plane.
    ///
    /// The clipped polygon is written to `out` (which is cleared first) with the same
    /// winding as `polygon`. Vertices within [`PLANE_SIDE_EPSILON`] of the plane are kept
    /// as-is, and a new vertex is inserted wherever an edge goes from one strict side of the
    /// plane to the other.
    ///
    /// An edge leaving such an on-plane vertex toward the back of the plane does not insert
    /// a vertex: the on-plane vertex already is the exit point, so the result never holds
    /// two copies of it.
    ///
    /// Returns the number of vertices of the clipped polygon, `0` if the polygon lies
    /// entirely behind the plane, or an error if the result would not fit in
    /// [`MAX_CLIP_VERTICES`] vertices.
    pub fn clip_polygon(
        &self,
        polygon: &[Point<Real>],
        out: &mut ArrayVec<Point<Real>, MAX_CLIP_VERTICES>,
    ) -> Result<usize, ClipError> {
        out.clear();

        let Some(last) = polygon.last() else {
            return Ok(0);
        };

        if polygon.len() > MAX_CLIP_VERTICES {
            return Err(overflow());
        }

        let sides: ArrayVec<(Real, PlaneSide), MAX_CLIP_VERTICES> = polygon
            .iter()
            .map(|pt| (self.distance_to_point(pt), self.which_side(pt)))
            .collect();

        if sides.iter().all(|(_, side)| *side == PlaneSide::Back) {
            return Ok(0);
        }

        let mut prev = last;
        let mut prev_side = sides[sides.len() - 1];

        for (curr, curr_side) in polygon.iter().zip(sides.iter().copied()) {
            match (prev_side.1, curr_side.1) {
                (PlaneSide::Front, PlaneSide::Back) | (PlaneSide::Back, PlaneSide::Front) => {
                    let t = prev_side.0 / (prev_side.0 - curr_side.0);
                    push_clipped(out, interpolate(prev, curr, t))?;
                }
                _ => {}
            }

            if curr_side.1 != PlaneSide::Back {
                push_clipped(out, *curr)?;
            }

            prev = curr;
            prev_side = curr_side;
        }

        Ok(out.len())
    }

    /// The line shared by this plane and `other`, as a point and a unit direction.
    ///
    /// The direction is `self.normal × other.normal`. Returns `None` if the planes are
    /// parallel.
    pub fn intersect_plane(&self, other: &Plane) -> Option<(Point<Real>, Vector<Real>)> {
        let dir = self.normal.cross(&other.normal);
        let denom = dir.norm_squared();

        if denom < PLANE_PARALLEL_EPSILON {
            log::debug!("Cannot intersect parallel planes {:?} and {:?}.", self, other);
            return None;
        }

        let point = (other.normal * -self.d - self.normal * -other.d).cross(&dir) / denom;
        Some((point.into(), dir / denom.sqrt()))
    }

    /// The single point shared by three planes.
    ///
    /// Returns `None` if at least two of the planes are parallel, or if the three normals
    /// are coplanar.
    pub fn intersect_three(a: &Plane, b: &Plane, c: &Plane) -> Option<Point<Real>> {
        let u = b.normal.cross(&c.normal);
        let denom = a.normal.dot(&u);

        if denom.abs() < PLANE_TRIPLE_PRODUCT_EPSILON {
            return None;
        }

        let num = u * -a.d + a.normal.cross(&(b.normal * -c.d - c.normal * -b.d));
        Some((num / denom).into())
    }
}

fn push_clipped(
    out: &mut ArrayVec<Point<Real>, MAX_CLIP_VERTICES>,
    pt: Point<Real>,
) -> Result<(), ClipError> {
    out.try_push(pt).map_err(|_| overflow())
}

fn overflow() -> ClipError {
    log::debug!(
        "Polygon clipping aborted: more than {} vertices.",
        MAX_CLIP_VERTICES
    );
    ClipError::VertexOverflow {
        capacity: MAX_CLIP_VERTICES,
    }
}

impl PlaneClassify for Point<Real> {
    #[inline]
    fn plane_side(&self, plane: &Plane) -> PlaneSide {
        let dist = plane.distance_to_point(self);

        if dist > PLANE_SIDE_EPSILON {
            PlaneSide::Front
        } else if dist < -PLANE_SIDE_EPSILON {
            PlaneSide::Back
        } else {
            PlaneSide::On
        }
    }
}

impl PlaneClassify for BoundingSphere {
    #[inline]
    fn plane_side(&self, plane: &Plane) -> PlaneSide {
        let dist = plane.distance_to_point(&self.center);

        if dist > self.radius {
            PlaneSide::Front
        } else if dist < -self.radius {
            PlaneSide::Back
        } else {
            PlaneSide::On
        }
    }
}

impl PlaneClassify for Aabb {
    #[inline]
    fn plane_side(&self, plane: &Plane) -> PlaneSide {
        // The n-vertex is the corner deepest behind the plane, the p-vertex the one
        // furthest in front of it.
        if plane.which_side(&self.anti_support_point(&plane.normal)) == PlaneSide::Front {
            PlaneSide::Front
        } else if plane.which_side(&self.support_point(&plane.normal)) == PlaneSide::Back {
            PlaneSide::Back
        } else {
            PlaneSide::On
        }
    }
}

impl PlaneClassify for Obb {
    #[inline]
    fn plane_side(&self, plane: &Plane) -> PlaneSide {
        let radius = self.projected_radius(&plane.normal);
        let dist = plane.distance_to_point(self.center());

        if dist > radius {
            PlaneSide::Front
        } else if dist < -radius {
            PlaneSide::Back
        } else {
            PlaneSide::On
        }
    }
}
