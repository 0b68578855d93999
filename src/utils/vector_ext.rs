use crate::math::{Point, Real, Vector};

/// Helpers on top of nalgebra's vector algebra.
pub trait VectorExt {
    /// Is the length of this vector smaller than `eps`?
    fn is_zero_eps(&self, eps: Real) -> bool;
}

impl VectorExt for Vector<Real> {
    #[inline]
    fn is_zero_eps(&self, eps: Real) -> bool {
        self.norm_squared() < eps * eps
    }
}

/// Linear interpolation between `a` and `b`: returns `a` for `t == 0` and `b`
/// for `t == 1`.
#[inline]
pub fn interpolate(a: &Point<Real>, b: &Point<Real>, t: Real) -> Point<Real> {
    a + (b - a) * t
}

/// The average of a set of points, or `None` if `pts` is empty.
#[inline]
pub fn centroid(pts: &[Point<Real>]) -> Option<Point<Real>> {
    if pts.is_empty() {
        return None;
    }

    let denom = 1.0 / pts.len() as Real;
    let sum = pts
        .iter()
        .fold(Vector::zeros(), |acc, pt| acc + pt.coords);

    Some((sum * denom).into())
}
