//! Integer Axis Aligned Bounding Box.

use crate::bounding_volume::Aabb;
use crate::math::{IPoint, IVector, Point, Real};

/// An axis-aligned box with integer coordinates.
///
/// Both corners are inclusive: the box `[0, 0, 0] - [0, 0, 0]` contains exactly one
/// lattice point. This is the natural representation for cell ranges of grids and
/// voxel volumes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct IAabb {
    /// The lattice point with minimum coordinates.
    pub mins: IPoint,
    /// The lattice point with maximum coordinates.
    pub maxs: IPoint,
}

impl IAabb {
    /// Creates the box spanned by two arbitrary lattice points.
    #[inline]
    pub fn new(a: IPoint, b: IPoint) -> Self {
        Self {
            mins: a.coords.inf(&b.coords).into(),
            maxs: a.coords.sup(&b.coords).into(),
        }
    }

    /// Creates a box from its corners without reordering them.
    #[inline]
    pub fn new_unchecked(mins: IPoint, maxs: IPoint) -> Self {
        Self { mins, maxs }
    }

    /// The smallest integer box enclosing `aabb`.
    #[inline]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::new_unchecked(
            aabb.mins.map(|e| e.floor() as i32),
            aabb.maxs.map(|e| e.ceil() as i32),
        )
    }

    /// This box expressed with real coordinates.
    #[inline]
    pub fn to_aabb(&self) -> Aabb {
        Aabb::new_unchecked(
            self.mins.map(|e| e as Real),
            self.maxs.map(|e| e as Real),
        )
    }

    /// Is `mins <= maxs` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.mins.x <= self.maxs.x && self.mins.y <= self.maxs.y && self.mins.z <= self.maxs.z
    }

    /// The difference between the two corners.
    #[inline]
    pub fn extents(&self) -> IVector {
        self.maxs - self.mins
    }

    /// The number of lattice points inside of this box.
    ///
    /// Returns zero for an invalid box.
    #[inline]
    pub fn volume(&self) -> i64 {
        if !self.is_valid() {
            return 0;
        }

        let extents = self.extents();
        (extents.x as i64 + 1) * (extents.y as i64 + 1) * (extents.z as i64 + 1)
    }

    /// Does this box contain the lattice point `pt`?
    #[inline]
    pub fn contains_point(&self, pt: &IPoint) -> bool {
        (0..3).all(|i| pt[i] >= self.mins[i] && pt[i] <= self.maxs[i])
    }

    /// Does this box contain the real point `pt`?
    #[inline]
    pub fn contains_real_point(&self, pt: &Point<Real>) -> bool {
        (0..3).all(|i| pt[i] >= self.mins[i] as Real && pt[i] <= self.maxs[i] as Real)
    }

    /// Is `other` entirely inside of this box?
    #[inline]
    pub fn contains(&self, other: &IAabb) -> bool {
        (0..3).all(|i| self.mins[i] <= other.mins[i] && self.maxs[i] >= other.maxs[i])
    }

    /// Do these two boxes share at least one lattice point?
    #[inline]
    pub fn intersects(&self, other: &IAabb) -> bool {
        (0..3).all(|i| other.mins[i] <= self.maxs[i] && other.maxs[i] >= self.mins[i])
    }

    /// The lattice points shared by both boxes, if any.
    #[inline]
    pub fn intersection(&self, other: &IAabb) -> Option<IAabb> {
        let result = IAabb::new_unchecked(
            self.mins.coords.sup(&other.mins.coords).into(),
            self.maxs.coords.inf(&other.maxs.coords).into(),
        );

        if result.is_valid() {
            Some(result)
        } else {
            None
        }
    }

    /// Enlarges this box so it also contains `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: IPoint) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Enlarges this box so it also contains `other`.
    #[inline]
    pub fn merge(&mut self, other: &IAabb) {
        self.mins = self.mins.coords.inf(&other.mins.coords).into();
        self.maxs = self.maxs.coords.sup(&other.maxs.coords).into();
    }
}
