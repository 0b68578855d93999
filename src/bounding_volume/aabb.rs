//! Axis Aligned Bounding Box.

use crate::bounding_volume::{BoundingSphere, BoundingVolume, BoxCorner, BoxEdge, BoxFace};
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::shape::Plane;

/// An Axis-Aligned Bounding Box (AABB).
///
/// The box is described by its two extreme corners. A box is *valid* when `mins <= maxs`
/// component-wise, and *empty* when at least one of its extents is not strictly positive.
///
/// Three sentinel boxes are provided:
/// - [`Aabb::new_invalid`]: `mins = +∞`, `maxs = -∞`. This is the seed to use before
///   growing a box with [`Aabb::take_point`] or [`BoundingVolume::merge`].
/// - [`Aabb::new_infinite`]: covers the whole space.
/// - [`Aabb::zero`]: the degenerate box at the origin.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use isect3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// // Corners are reordered automatically.
/// let aabb = Aabb::new(Point3::new(1.0, 1.0, 1.0), Point3::new(-1.0, -1.0, -1.0));
/// assert_eq!(aabb.mins, Point3::new(-1.0, -1.0, -1.0));
///
/// let other = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
/// assert_eq!(aabb.overlap(&other), other);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates the box spanned by two arbitrary points.
    ///
    /// The components are sorted so the result is always valid.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Aabb {
        Aabb {
            mins: a.coords.inf(&b.coords).into(),
            maxs: a.coords.sup(&b.coords).into(),
        }
    }

    /// Creates a box from its minimum and maximum corners without reordering them.
    ///
    /// The caller is responsible for `mins <= maxs`; use [`Aabb::is_valid`] to check.
    #[inline]
    pub fn new_unchecked(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a box from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The inverted box used as a seed for accumulating points or boxes.
    ///
    /// Merging anything into it yields that thing's bounds.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new_unchecked(
            Point::from(Vector::repeat(Real::INFINITY)),
            Point::from(Vector::repeat(-Real::INFINITY)),
        )
    }

    /// The largest representable box.
    #[inline]
    pub fn new_infinite() -> Self {
        Self::new_unchecked(
            Point::from(Vector::repeat(-Real::MAX)),
            Point::from(Vector::repeat(Real::MAX)),
        )
    }

    /// The degenerate box located at the origin.
    #[inline]
    pub fn zero() -> Self {
        Self::new_unchecked(Point::origin(), Point::origin())
    }

    /// The tightest box enclosing every point of `pts`.
    ///
    /// Returns [`Aabb::new_invalid`] if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(pt);
        }

        result
    }

    /// The tightest box enclosing every referenced point.
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        Self::from_points(pts.into_iter().copied())
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this box.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents (width, depth, height) of this box.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this box.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// The total area of the six faces of this box.
    #[inline]
    pub fn surface_area(&self) -> Real {
        let extents = self.extents();
        2.0 * (extents.x * (extents.y + extents.z) + extents.y * extents.z)
    }

    /// Is `mins <= maxs` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..DIM).all(|i| self.mins[i] <= self.maxs[i])
    }

    /// Is at least one extent of this box not strictly positive?
    ///
    /// Invalid boxes are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..DIM).any(|i| self.maxs[i] - self.mins[i] <= 0.0)
    }

    /// Enlarges this box so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Does this box contain `point`?
    ///
    /// The test is half-open: points on the `mins` faces are inside, points on the `maxs`
    /// faces are not. This way, boxes tiling the space never claim the same point twice.
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        (0..DIM).all(|i| point[i] >= self.mins[i] && point[i] < self.maxs[i])
    }

    /// Is `other` entirely inside of this box? Shared faces count as inside.
    #[inline]
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        (0..DIM).all(|i| self.mins[i] <= other.mins[i] && self.maxs[i] >= other.maxs[i])
    }

    /// Do these two boxes overlap?
    ///
    /// This is a separating-axis test on the three coordinate axes. Touching boxes overlap.
    #[inline]
    pub fn intersects_aabb(&self, other: &Aabb) -> bool {
        (0..DIM).all(|i| other.mins[i] <= self.maxs[i] && other.maxs[i] >= self.mins[i])
    }

    /// Does this box overlap the given sphere?
    ///
    /// Compares the squared distance between the sphere center and the box with the
    /// squared radius, so there is no false positive near the box corners.
    #[inline]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        self.sqr_distance_to_point(&sphere.center) <= sphere.radius * sphere.radius
    }

    /// The region shared by `self` and `other`.
    ///
    /// The result [`is_empty`](Self::is_empty) if the boxes do not overlap (or only touch).
    #[inline]
    pub fn overlap(&self, other: &Aabb) -> Aabb {
        Aabb::new_unchecked(
            self.mins.coords.sup(&other.mins.coords).into(),
            self.maxs.coords.inf(&other.maxs.coords).into(),
        )
    }

    /// The point of this box closest to `point`.
    ///
    /// This is `point` itself if it is inside of the box.
    #[inline]
    pub fn closest_point(&self, point: &Point<Real>) -> Point<Real> {
        point
            .coords
            .sup(&self.mins.coords)
            .inf(&self.maxs.coords)
            .into()
    }

    /// The squared distance between `point` and this box (zero inside).
    #[inline]
    pub fn sqr_distance_to_point(&self, point: &Point<Real>) -> Real {
        let mut sqr_dist = 0.0;

        for i in 0..DIM {
            if point[i] < self.mins[i] {
                let d = self.mins[i] - point[i];
                sqr_dist += d * d;
            } else if point[i] > self.maxs[i] {
                let d = point[i] - self.maxs[i];
                sqr_dist += d * d;
            }
        }

        sqr_dist
    }

    /// The distance between `point` and this box (zero inside).
    #[inline]
    pub fn distance_to_point(&self, point: &Point<Real>) -> Real {
        self.sqr_distance_to_point(point).sqrt()
    }

    /// The corner of this box furthest from `point`.
    #[inline]
    pub fn furthest_point(&self, point: &Point<Real>) -> Point<Real> {
        let center = self.center();
        Point::new(
            if point.x > center.x { self.mins.x } else { self.maxs.x },
            if point.y > center.y { self.mins.y } else { self.maxs.y },
            if point.z > center.z { self.mins.z } else { self.maxs.z },
        )
    }

    /// The corner of this box furthest along `dir` (the "p-vertex").
    #[inline]
    pub fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        Point::new(
            if dir.x > 0.0 { self.maxs.x } else { self.mins.x },
            if dir.y > 0.0 { self.maxs.y } else { self.mins.y },
            if dir.z > 0.0 { self.maxs.z } else { self.mins.z },
        )
    }

    /// The corner of this box furthest along `-dir` (the "n-vertex").
    #[inline]
    pub fn anti_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        Point::new(
            if dir.x > 0.0 { self.mins.x } else { self.maxs.x },
            if dir.y > 0.0 { self.mins.y } else { self.maxs.y },
            if dir.z > 0.0 { self.mins.z } else { self.maxs.z },
        )
    }

    /// The position of one of the corners of this box.
    #[inline]
    pub fn corner(&self, corner: BoxCorner) -> Point<Real> {
        Point::new(
            if corner.is_max(0) { self.maxs.x } else { self.mins.x },
            if corner.is_max(1) { self.maxs.y } else { self.mins.y },
            if corner.is_max(2) { self.maxs.z } else { self.mins.z },
        )
    }

    /// The eight corners of this box, in [`BoxCorner`] order.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        BoxCorner::ALL.map(|corner| self.corner(corner))
    }

    /// The two endpoints of one of the edges of this box.
    #[inline]
    pub fn edge(&self, edge: BoxEdge) -> [Point<Real>; 2] {
        edge.corners().map(|corner| self.corner(corner))
    }

    /// The plane supporting one of the faces of this box.
    ///
    /// The plane normal points outward, so the box lies on its back side.
    #[inline]
    pub fn face_plane(&self, face: BoxFace) -> Plane {
        let point = if face.is_positive() {
            self.maxs
        } else {
            self.mins
        };

        Plane::from_point_normal(&point, &face.outward_normal())
    }

    /// The smallest bounding sphere containing this box.
    ///
    /// The radius is half the longest of the four space diagonals, which stays
    /// meaningful for degenerate boxes.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let diagonals = [
            (BoxCorner::ALL[0], BoxCorner::ALL[7]),
            (BoxCorner::ALL[1], BoxCorner::ALL[6]),
            (BoxCorner::ALL[2], BoxCorner::ALL[5]),
            (BoxCorner::ALL[3], BoxCorner::ALL[4]),
        ];

        let longest = diagonals
            .iter()
            .map(|(a, b)| na::distance_squared(&self.corner(*a), &self.corner(*b)))
            .fold(0.0, Real::max);

        BoundingSphere::new(self.center(), longest.sqrt() * 0.5)
    }

    /// Computes the box bounding `self` transformed by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let center = m * self.center();
        let rot = m.rotation.to_rotation_matrix();
        let ws_half_extents = rot.matrix().abs() * self.half_extents();

        Aabb::new_unchecked(center - ws_half_extents, center + ws_half_extents)
    }

    /// Computes the box bounding `self` translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Scales both corners of this box, component-wise, by `scale`.
    ///
    /// Negative scale components are supported: the corners are reordered.
    #[inline]
    #[must_use]
    pub fn scaled(self, scale: &Vector<Real>) -> Self {
        let a = self.mins.coords.component_mul(scale);
        let b = self.maxs.coords.component_mul(scale);
        Self::new(a.into(), b.into())
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        self.intersects_aabb(other)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        self.contains_aabb(other)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.coords.inf(&other.mins.coords).into();
        self.maxs = self.maxs.coords.sup(&other.maxs.coords).into();
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        let mut result = *self;
        result.merge(other);
        result
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        let mut result = *self;
        result.loosen(amount);
        result
    }

    #[inline]
    fn tighten(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        self.mins += Vector::repeat(amount);
        self.maxs += Vector::repeat(-amount);
        assert!(
            self.is_valid(),
            "The tightening margin is to large: the box became invalid."
        );
    }

    #[inline]
    fn tightened(&self, amount: Real) -> Aabb {
        let mut result = *self;
        result.tighten(amount);
        result
    }

    #[inline]
    fn aabb(&self) -> Aabb {
        *self
    }

    #[inline]
    fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere()
    }
}
