use crate::bounding_volume::{Aabb, BoxFace};
use crate::math::{Point, Real, Vector, DIM};

/// The first point where a segment enters an [`Aabb`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineHit {
    /// The parameter of the entry point, in `[0, 1]`, along the segment.
    pub toi: Real,
    /// The face crossed by the segment, or `None` if the segment starts inside of the box.
    pub face: Option<BoxFace>,
    /// The outward normal of `face`, or zero if the segment starts inside of the box.
    pub normal: Vector<Real>,
}

impl Aabb {
    /// Computes where the segment `[start, end]` enters this box.
    ///
    /// The segment is clipped against the three slabs of the box, in the order `x`, `y`,
    /// `z`. The reported face is the one of the slab that clamped the entry parameter last;
    /// when several slabs clamp it to the same value, the first one in that order wins.
    /// The sign of the normal depends on the direction the segment crosses that slab.
    ///
    /// Returns `None` if the segment misses the box.
    pub fn collide_line(&self, start: &Point<Real>, end: &Point<Real>) -> Option<LineHit> {
        let mut first_start: Real = 0.0;
        let mut first_end: Real = 1.0;
        let mut entry_face = None;

        for i in 0..DIM {
            let (si, ei) = (start[i], end[i]);
            let (bmin, bmax) = (self.mins[i], self.maxs[i]);
            let di = ei - si;

            let (st, et, face) = if si < ei {
                if si > bmax || ei < bmin {
                    return None;
                }

                let st = if si < bmin { (bmin - si) / di } else { 0.0 };
                let et = if ei > bmax { (bmax - si) / di } else { 1.0 };
                (st, et, BoxFace::new(i, false))
            } else {
                if ei > bmax || si < bmin {
                    return None;
                }

                // With `si == ei`, the early-out above rules out both divisions.
                let st = if si > bmax { (bmax - si) / di } else { 0.0 };
                let et = if ei < bmin { (bmin - si) / di } else { 1.0 };
                (st, et, BoxFace::new(i, true))
            };

            if st > first_start {
                first_start = st;
                entry_face = Some(face);
            }

            if et < first_end {
                first_end = et;
            }

            if first_end < first_start {
                return None;
            }
        }

        Some(LineHit {
            toi: first_start,
            face: entry_face,
            normal: entry_face.map_or_else(Vector::zeros, BoxFace::outward_normal),
        })
    }

    /// Does the segment `[start, end]` intersect this box?
    #[inline]
    pub fn collide_line_test(&self, start: &Point<Real>, end: &Point<Real>) -> bool {
        self.collide_line(start, end).is_some()
    }
}
