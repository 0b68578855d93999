//! Oriented bounding box.

use crate::bounding_volume::{Aabb, BoundingSphere, BoxCorner};
use crate::math::{Isometry, Point, Real, Vector};

/// A box with arbitrary orientation.
///
/// The box is described by its center, three orthonormal axes and the half-extents along
/// each of these axes. The eight corners are cached and recomputed every time one of
/// these parameters changes, which is why the fields are private.
///
/// The axes come from the rotational part of an [`Isometry`], so they are orthonormal
/// by construction. Axis `0` is the "right" vector, axis `1` "forward" and axis `2` "up"
/// (the first, second and third basis vectors of the transform).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    center: Point<Real>,
    axes: [Vector<Real>; 3],
    half_extents: Vector<Real>,
    points: [Point<Real>; 8],
}

impl Obb {
    /// Creates the box of full `extents` centered at the origin of `pos` and aligned
    /// with its basis.
    pub fn from_extents(pos: &Isometry<Real>, extents: &Vector<Real>) -> Self {
        Self::from_half_extents(pos, &(extents * 0.5))
    }

    /// Creates the box of `half_extents` centered at the origin of `pos` and aligned
    /// with its basis.
    pub fn from_half_extents(pos: &Isometry<Real>, half_extents: &Vector<Real>) -> Self {
        let mut result = Obb {
            center: Point::origin(),
            axes: [Vector::x(); 3],
            half_extents: Vector::zeros(),
            points: [Point::origin(); 8],
        };
        result.set_from_half_extents(pos, half_extents);
        result
    }

    /// The box obtained by placing the local-space `aabb` with the transform `pos`.
    pub fn from_aabb(pos: &Isometry<Real>, aabb: &Aabb) -> Self {
        let mut result = Self::from_half_extents(pos, &Vector::zeros());
        result.set_from_aabb(pos, aabb);
        result
    }

    /// Re-initializes this box from a transform and full extents.
    pub fn set_from_extents(&mut self, pos: &Isometry<Real>, extents: &Vector<Real>) {
        self.set_from_half_extents(pos, &(extents * 0.5))
    }

    /// Re-initializes this box from a transform and half-extents.
    pub fn set_from_half_extents(&mut self, pos: &Isometry<Real>, half_extents: &Vector<Real>) {
        self.center = pos.translation.vector.into();
        self.axes = basis(pos);
        self.half_extents = half_extents.abs();
        self.update_points();
    }

    /// Re-initializes this box from a transform and a local-space box.
    pub fn set_from_aabb(&mut self, pos: &Isometry<Real>, aabb: &Aabb) {
        self.center = pos * aabb.center();
        self.axes = basis(pos);
        self.half_extents = aabb.half_extents().abs();
        self.update_points();
    }

    fn update_points(&mut self) {
        for corner in BoxCorner::ALL {
            let mut pt = self.center;

            for i in 0..3 {
                let shift = self.axes[i] * self.half_extents[i];

                if corner.is_max(i) {
                    pt += shift;
                } else {
                    pt -= shift;
                }
            }

            self.points[corner.index()] = pt;
        }
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The half-extents of this box along each of its axes.
    #[inline]
    pub fn half_extents(&self) -> &Vector<Real> {
        &self.half_extents
    }

    /// The three orthonormal axes of this box.
    #[inline]
    pub fn axes(&self) -> &[Vector<Real>; 3] {
        &self.axes
    }

    /// One of the axes of this box.
    ///
    /// Panics if `i >= 3`.
    #[inline]
    pub fn axis(&self, i: usize) -> &Vector<Real> {
        assert!(i < 3, "Invalid oriented box axis index: {}", i);
        &self.axes[i]
    }

    /// The position of one of the corners of this box.
    #[inline]
    pub fn point(&self, corner: BoxCorner) -> &Point<Real> {
        &self.points[corner.index()]
    }

    /// The eight corners of this box, in [`BoxCorner`] order.
    #[inline]
    pub fn points(&self) -> &[Point<Real>; 8] {
        &self.points
    }

    /// Does this box contain `point` (boundary included)?
    ///
    /// Projects `point - center` on each axis and compares the result with the matching
    /// half-extent.
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        let dpt = point - self.center;

        (0..3).all(|i| dpt.dot(&self.axes[i]).abs() <= self.half_extents[i])
    }

    /// The radius of the projection of this box on the (unit) direction `dir`.
    #[inline]
    pub fn projected_radius(&self, dir: &Vector<Real>) -> Real {
        (0..3)
            .map(|i| dir.dot(&self.axes[i]).abs() * self.half_extents[i])
            .sum()
    }

    /// The world-space axis-aligned box enclosing this box.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.points)
    }

    /// The smallest sphere enclosing this box.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.half_extents.norm())
    }
}

fn basis(pos: &Isometry<Real>) -> [Vector<Real>; 3] {
    [
        pos.rotation * Vector::x(),
        pos.rotation * Vector::y(),
        pos.rotation * Vector::z(),
    ]
}
