use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real};

/// Common interface of the mergeable bounding volumes ([`Aabb`] and [`BoundingSphere`]).
///
/// Culling hierarchies grow these volumes as objects are inserted and test them against
/// each other in constant time. Oriented boxes do not implement this trait: the union of
/// two oriented boxes is not an oriented box with the same axes.
pub trait BoundingVolume: Sized {
    /// A point inside of this volume, ideally its center.
    fn center(&self) -> Point<Real>;

    /// Do `self` and `other` share at least one point?
    ///
    /// Volumes that only touch are considered intersecting.
    fn intersects(&self, other: &Self) -> bool;

    /// Is `other` entirely inside of `self`?
    fn contains(&self, other: &Self) -> bool;

    /// Grows `self` in-place so that it also encloses `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume of this kind enclosing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// Grows `self` in-place by `amount` in every direction.
    ///
    /// Panics if `amount` is negative.
    fn loosen(&mut self, amount: Real);

    /// A copy of `self` grown by `amount` in every direction.
    fn loosened(&self, amount: Real) -> Self;

    /// Shrinks `self` in-place by `amount` in every direction.
    ///
    /// Panics if `amount` is negative or larger than the volume.
    fn tighten(&mut self, amount: Real);

    /// A copy of `self` shrunk by `amount` in every direction.
    fn tightened(&self, amount: Real) -> Self;

    /// The axis-aligned box enclosing this volume.
    fn aabb(&self) -> Aabb;

    /// A sphere enclosing this volume.
    fn bounding_sphere(&self) -> BoundingSphere;
}
