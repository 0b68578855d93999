//! Batch tests against a set of planes bounding a convex region.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::{ClipError, GeometryClass};
use crate::shape::{Plane, PlaneClassify, PlaneSide};
use crate::utils::consts::{
    MAX_CLIP_VERTICES, MAX_PLANE_SET_MASK_PLANES, PLANE_SET_CONTAINMENT_EPSILON,
};
use crate::utils::interpolate;
use arrayvec::ArrayVec;

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// One bit per plane of a [`PlaneSet`], bit `i` standing for the plane `i`.
///
/// [`PlaneSet::test_planes`] returns [`PlaneMask::ALL`] to signal that a box was rejected.
pub struct PlaneMask(u32);

bitflags::bitflags! {
    impl PlaneMask: u32 {
        /// Every plane.
        const ALL = u32::MAX;
    }
}

impl PlaneMask {
    /// The mask with only the bit of the plane `i` set.
    ///
    /// Panics if `i >= 32`.
    #[inline]
    pub fn plane(i: usize) -> Self {
        assert!(
            i < MAX_PLANE_SET_MASK_PLANES,
            "A plane mask can only address {} planes.",
            MAX_PLANE_SET_MASK_PLANES
        );
        Self::from_bits_retain(1 << i)
    }

    /// The mask with the bits of the planes `0..n` set.
    #[inline]
    pub fn first_planes(n: usize) -> Self {
        if n >= MAX_PLANE_SET_MASK_PLANES {
            Self::ALL
        } else {
            Self::from_bits_retain((1 << n) - 1)
        }
    }
}

/// A borrowed set of planes, typically the six planes of a view frustum.
///
/// The planes face *inward*: the region described by the set is the intersection of the
/// front half-spaces of all the planes.
///
/// The classification tests are conservative: they never report [`GeometryClass::Outside`]
/// for something overlapping the region nor [`GeometryClass::Inside`] for something
/// sticking out of it, but they may report [`GeometryClass::Intersecting`] for something
/// that is actually outside. Use a
/// [`PolyhedronBoxIntersector`](crate::query::PolyhedronBoxIntersector) for an exact answer.
#[derive(Copy, Clone, Debug)]
pub struct PlaneSet<'a> {
    planes: &'a [Plane],
}

impl<'a> PlaneSet<'a> {
    /// Creates a set viewing the given planes.
    #[inline]
    pub fn new(planes: &'a [Plane]) -> Self {
        Self { planes }
    }

    /// The planes of this set.
    #[inline]
    pub fn planes(&self) -> &'a [Plane] {
        self.planes
    }

    /// The number of planes in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Does this set have no plane at all?
    ///
    /// An empty set describes the whole space.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Is `point` in front of every plane, up to `epsilon`?
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>, epsilon: Real) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= -epsilon)
    }

    /// Are all the corners of `aabb` in front of every plane?
    pub fn contains_aabb(&self, aabb: &Aabb) -> bool {
        aabb.vertices()
            .iter()
            .all(|corner| self.contains_point(corner, 0.0))
    }

    /// Classifies `geom` against the region bounded by this set.
    ///
    /// Returns [`GeometryClass::Outside`] as soon as `geom` lies behind one of the planes,
    /// [`GeometryClass::Inside`] if it is in front of all of them, and
    /// [`GeometryClass::Intersecting`] otherwise.
    pub fn test_potential_intersection<G: PlaneClassify + ?Sized>(&self, geom: &G) -> GeometryClass {
        let mut inside = true;

        for plane in self.planes {
            match plane.which_side(geom) {
                PlaneSide::Back => return GeometryClass::Outside,
                PlaneSide::On => inside = false,
                PlaneSide::Front => {}
            }
        }

        if inside {
            GeometryClass::Inside
        } else {
            GeometryClass::Intersecting
        }
    }

    /// Tests `aabb` against the planes enabled in `mask`, each pushed back by `expand`.
    ///
    /// Returns [`PlaneMask::ALL`] if the box lies entirely behind one of the tested planes.
    /// Otherwise, returns the set of tested planes the box straddles. When culling a
    /// hierarchy, the result can be used as the mask of the children of a node: the planes
    /// the node is fully in front of do not need to be tested again.
    ///
    /// Panics if this set has more than 32 planes.
    pub fn test_planes(&self, aabb: &Aabb, mask: PlaneMask, expand: Real) -> PlaneMask {
        assert!(
            self.planes.len() <= MAX_PLANE_SET_MASK_PLANES,
            "A plane mask can only address {} planes.",
            MAX_PLANE_SET_MASK_PLANES
        );

        let mut straddled = PlaneMask::empty();

        for (i, plane) in self.planes.iter().enumerate() {
            let bit = PlaneMask::plane(i);

            if !mask.contains(bit) {
                continue;
            }

            let max_point = aabb.support_point(&plane.normal);

            if plane.normal.dot(&max_point.coords) <= -(plane.d + expand) {
                return PlaneMask::ALL;
            }

            let min_point = aabb.anti_support_point(&plane.normal);

            if plane.distance_to_point(&min_point) < 0.0 {
                straddled |= bit;
            }
        }

        straddled
    }

    /// Clips the segment `[p0, p1]` to the region bounded by this set.
    ///
    /// Only the intersections with the planes lying on the boundary of the region (up to
    /// [`PLANE_SET_CONTAINMENT_EPSILON`]) are considered. Returns `None` if the segment lies
    /// outside of the region.
    pub fn clip_segment(
        &self,
        p0: &Point<Real>,
        p1: &Point<Real>,
    ) -> Option<(Point<Real>, Point<Real>)> {
        let mut tmin = Real::MAX;
        let mut tmax = -Real::MAX;
        let mut num_hits = 0;

        for plane in self.planes {
            let Some(t) = plane.intersect_segment(p0, p1) else {
                continue;
            };

            if (0.0..=1.0).contains(&t)
                && self.contains_point(&interpolate(p0, p1, t), PLANE_SET_CONTAINMENT_EPSILON)
            {
                tmin = tmin.min(t);
                tmax = tmax.max(t);
                num_hits += 1;
            }
        }

        let p0_inside = self.contains_point(p0, 0.0);

        if num_hits == 0 {
            // Either fully inside or fully outside.
            return p0_inside.then_some((*p0, *p1));
        }

        let p1_inside = self.contains_point(p1, 0.0);
        let start = if p0_inside { 0.0 } else { tmin };
        let end = if p1_inside { 1.0 } else { tmax };

        Some((interpolate(p0, p1, start), interpolate(p0, p1, end)))
    }

    /// Clips a convex polygon to the region bounded by this set.
    ///
    /// The polygon is clipped by each plane in turn with [`Plane::clip_polygon`]. The result
    /// is written to `out`, which is cleared first. Returns the number of vertices of the
    /// clipped polygon, `0` if it was clipped away entirely, or an error if it has more than
    /// `max_out_vertices` vertices (or if an intermediate polygon exceeds
    /// [`MAX_CLIP_VERTICES`]).
    pub fn clip_polygon(
        &self,
        polygon: &[Point<Real>],
        out: &mut Vec<Point<Real>>,
        max_out_vertices: usize,
    ) -> Result<usize, ClipError> {
        out.clear();

        let mut current: ArrayVec<Point<Real>, MAX_CLIP_VERTICES> =
            ArrayVec::try_from(polygon).map_err(|_| ClipError::VertexOverflow {
                capacity: MAX_CLIP_VERTICES,
            })?;
        let mut next = ArrayVec::new();

        for plane in self.planes {
            if plane.clip_polygon(&current, &mut next)? == 0 {
                return Ok(0);
            }

            core::mem::swap(&mut current, &mut next);
        }

        if current.len() > max_out_vertices {
            log::debug!(
                "Clipped polygon has {} vertices, more than the {} allowed.",
                current.len(),
                max_out_vertices
            );
            return Err(ClipError::VertexOverflow {
                capacity: max_out_vertices,
            });
        }

        out.extend_from_slice(&current);
        Ok(out.len())
    }
}
