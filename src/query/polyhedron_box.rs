use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::query::{GeometryClass, PolyhedronError};
use crate::shape::{Plane, PlaneSide, Polyhedron};
use crate::utils::consts::SILHOUETTE_LINE_EPSILON;
use smallvec::SmallVec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The projection of a silhouette edge, as the line `a * u + b * v + c = 0` of the plane
/// orthogonal to one of the coordinate axes.
///
/// The projection of the polyhedron lies on the side where `a * u + b * v + c >= 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
struct SilhouetteLine {
    a: Real,
    b: Real,
    c: Real,
}

impl SilhouetteLine {
    /// The largest value taken by the line equation over the projection of `aabb`.
    #[inline]
    fn max_over_aabb(&self, aabb: &Aabb, u: usize, v: usize) -> Real {
        let pu = if self.a > 0.0 {
            aabb.maxs[u]
        } else {
            aabb.mins[u]
        };
        let pv = if self.b > 0.0 {
            aabb.maxs[v]
        } else {
            aabb.mins[v]
        };
        self.a * pu + self.b * pv + self.c
    }
}

/// Exact classification of axis-aligned boxes against a convex polyhedron.
///
/// All the work depending only on the polyhedron is done once by
/// [`PolyhedronBoxIntersector::new`]: its face planes are moved to world-space and, for
/// each coordinate axis, its silhouette edges as seen along that axis are projected to 2D
/// lines. The resulting value is immutable, so [`PolyhedronBoxIntersector::test`] can be
/// called from several threads at once.
///
/// A box is tested in three stages:
/// 1. against the bounding box of the polyhedron,
/// 2. against each of its face planes,
/// 3. against each silhouette line, in each of the three axis-aligned projections.
///
/// Together, these stages test all the axes that may separate a box from a convex
/// polyhedron, so none of the results is an approximation.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use isect3d::bounding_volume::Aabb;
/// use isect3d::math::{Isometry, Point, Vector};
/// use isect3d::query::{GeometryClass, PolyhedronBoxIntersector};
/// use isect3d::shape::Polyhedron;
///
/// let cube = Polyhedron::from_aabb(&Aabb::new(Point::origin(), Point::new(2.0, 2.0, 2.0)));
/// let intersector =
///     PolyhedronBoxIntersector::new(&cube, &Isometry::identity(), &Vector::repeat(1.0))
///         .unwrap();
///
/// let inner = Aabb::new(Point::new(0.5, 0.5, 0.5), Point::new(1.0, 1.0, 1.0));
/// let far = Aabb::new(Point::new(5.0, 5.0, 5.0), Point::new(6.0, 6.0, 6.0));
/// assert_eq!(intersector.test(&inner), GeometryClass::Inside);
/// assert_eq!(intersector.test(&far), GeometryClass::Outside);
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PolyhedronBoxIntersector {
    planes: Vec<Plane>,
    bounds: Aabb,
    silhouettes: [SmallVec<[SilhouetteLine; 8]>; DIM],
}

impl PolyhedronBoxIntersector {
    /// Preprocesses `polyhedron`, placed in world-space by first scaling it by `scale`
    /// (in its local frame) and then applying `pos`.
    ///
    /// Fails if the edges of the polyhedron reference missing vertices or faces. In debug
    /// builds, this also fails if one of its planes faces outward.
    pub fn new(
        polyhedron: &Polyhedron,
        pos: &Isometry<Real>,
        scale: &Vector<Real>,
    ) -> Result<Self, PolyhedronError> {
        polyhedron.validate_indices()?;

        if cfg!(debug_assertions) {
            polyhedron.validate_orientation()?;
        }

        let world_points: Vec<Point<Real>> = polyhedron
            .points
            .iter()
            .map(|pt| pos * Point::from(pt.coords.component_mul(scale)))
            .collect();
        let bounds = Aabb::from_points_ref(&world_points);
        let planes: Vec<Plane> = polyhedron
            .planes
            .iter()
            .map(|plane| plane.transformed(pos, scale))
            .collect();

        let mut silhouettes: [SmallVec<[SilhouetteLine; 8]>; DIM] = Default::default();

        for (k, lines) in silhouettes.iter_mut().enumerate() {
            let (u, v) = ((k + 1) % DIM, (k + 2) % DIM);

            for edge in &polyhedron.edges {
                let p1 = &planes[edge.faces[0] as usize];
                let p2 = &planes[edge.faces[1] as usize];
                let (n1k, n2k) = (p1.normal[k], p2.normal[k]);

                if n1k * n2k >= 0.0 {
                    continue;
                }

                // Combination of both planes that is parallel to the axis `k` and still
                // contains the edge.
                let g = p1.normal * n2k.abs() + p2.normal * n1k.abs();
                let c = p1.d * n2k.abs() + p2.d * n1k.abs();

                if g[u].abs() + g[v].abs() < SILHOUETTE_LINE_EPSILON {
                    log::debug!(
                        "Skipping degenerate silhouette edge {:?} along axis {}.",
                        edge.vertices,
                        k
                    );
                    continue;
                }

                lines.push(SilhouetteLine {
                    a: g[u],
                    b: g[v],
                    c,
                });
            }
        }

        Ok(Self {
            planes,
            bounds,
            silhouettes,
        })
    }

    /// The world-space bounding box of the polyhedron.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// The world-space face planes of the polyhedron, facing inward.
    #[inline]
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Classifies `aabb` against the polyhedron.
    ///
    /// Returns [`GeometryClass::Intersecting`] if the box fully contains the bounding box of
    /// the polyhedron.
    pub fn test(&self, aabb: &Aabb) -> GeometryClass {
        if !self.bounds.intersects_aabb(aabb) {
            log::trace!("Box rejected by the polyhedron bounds.");
            return GeometryClass::Outside;
        }

        if aabb.contains_aabb(&self.bounds) {
            log::trace!("Box contains the polyhedron bounds.");
            return GeometryClass::Intersecting;
        }

        let mut inside = true;

        for plane in &self.planes {
            match plane.which_side(aabb) {
                PlaneSide::Back => {
                    log::trace!("Box rejected by a face plane.");
                    return GeometryClass::Outside;
                }
                PlaneSide::On => inside = false,
                PlaneSide::Front => {}
            }
        }

        if inside {
            return GeometryClass::Inside;
        }

        for (k, lines) in self.silhouettes.iter().enumerate() {
            let (u, v) = ((k + 1) % DIM, (k + 2) % DIM);

            if lines.iter().any(|line| line.max_over_aabb(aabb, u, v) < 0.0) {
                log::trace!("Box rejected by a silhouette edge along axis {}.", k);
                return GeometryClass::Outside;
            }
        }

        GeometryClass::Intersecting
    }

    /// Classifies each box of `aabbs` with [`PolyhedronBoxIntersector::test`].
    ///
    /// With the `parallel` feature enabled, the boxes are processed in parallel.
    pub fn test_many(&self, aabbs: &[Aabb]) -> Vec<GeometryClass> {
        #[cfg(feature = "parallel")]
        {
            aabbs.par_iter().map(|aabb| self.test(aabb)).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            aabbs.iter().map(|aabb| self.test(aabb)).collect()
        }
    }

    /// The number of silhouette lines seen along each coordinate axis.
    pub fn num_silhouette_edges(&self) -> [usize; DIM] {
        [
            self.silhouettes[0].len(),
            self.silhouettes[1].len(),
            self.silhouettes[2].len(),
        ]
    }
}
