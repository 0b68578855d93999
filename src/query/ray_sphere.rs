use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};

impl BoundingSphere {
    /// Does the ray starting at `start` and passing through `end` hit this sphere?
    ///
    /// The ray extends beyond `end`. Only hits at a non-negative parameter count, so a ray
    /// pointing away from a sphere it starts outside of misses it. A degenerate ray
    /// (`start == end`) hits the sphere only if `start` is inside.
    pub fn intersects_ray(&self, start: &Point<Real>, end: &Point<Real>) -> bool {
        let local_start = start - self.center;
        let dir = end - start;

        let a = dir.norm_squared();
        let b = 2.0 * local_start.dot(&dir);
        let c = local_start.norm_squared() - self.radius * self.radius;

        if a == 0.0 {
            return c <= 0.0;
        }

        let discr = b * b - 4.0 * a * c;

        if discr < 0.0 {
            return false;
        }

        // The largest root is enough: the ray hits iff it is not behind the start.
        let t_far = (-b + discr.sqrt()) / (2.0 * a);
        t_far >= 0.0
    }
}
