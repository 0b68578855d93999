//! Bounding sphere.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Point, Real, Vector};
use num::Zero;

/// A sphere given by its center and radius.
///
/// The radius is never negative: [`BoundingSphere::new`] clamps it to zero.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The sphere center.
    pub center: Point<Real>,
    /// The sphere radius.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new sphere, clamping negative radii to zero.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere {
            center,
            radius: radius.max(0.0),
        }
    }

    /// The sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Is `point` inside of this sphere (boundary included)?
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        na::distance_squared(&self.center, point) <= self.radius * self.radius
    }

    /// Is `other` entirely inside of this sphere?
    ///
    /// This is not symmetric: a sphere never contains a strictly larger one, whatever
    /// the positions of their centers.
    #[inline]
    pub fn contains_sphere(&self, other: &BoundingSphere) -> bool {
        if self.radius < other.radius {
            return false;
        }

        na::distance(&self.center, &other.center) + other.radius <= self.radius
    }

    /// Do these two spheres share at least one point?
    #[inline]
    pub fn intersects_sphere(&self, other: &BoundingSphere) -> bool {
        let sum_radius = self.radius + other.radius;
        na::distance_squared(&self.center, &other.center) <= sum_radius * sum_radius
    }

    /// Does this sphere overlap the given box?
    #[inline]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        aabb.intersects_sphere(self)
    }

    /// Signed distance from the sphere surface to `point`, negative inside.
    #[inline]
    pub fn distance_to_point(&self, point: &Point<Real>) -> Real {
        na::distance(&self.center, point) - self.radius
    }

    /// The axis-aligned box enclosing this sphere.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.radius))
    }

    /// Transforms this sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        self.intersects_sphere(other)
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        self.contains_sphere(other)
    }

    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        let mut dir = other.center - self.center;
        let norm = dir.normalize_mut();

        if norm.is_zero() {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius + amount)
    }

    #[inline]
    fn tighten(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        assert!(amount <= self.radius, "The tightening margin is to large.");
        self.radius -= amount
    }

    #[inline]
    fn tightened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        assert!(amount <= self.radius, "The tightening margin is to large.");
        BoundingSphere::new(self.center, self.radius - amount)
    }

    #[inline]
    fn aabb(&self) -> Aabb {
        self.aabb()
    }

    #[inline]
    fn bounding_sphere(&self) -> BoundingSphere {
        *self
    }
}
