use crate::math::{Point, Real, Vector, DIM};
use crate::utils::consts::{COLLINEAR_TRIANGLE_EPSILON, TRIANGLE_EPSILON};

/// The intersection between a ray (or a segment) and a triangle.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleHit {
    /// The parameter of the hit along the ray (or the segment).
    pub t: Real,
    /// The barycentric coordinate of the hit associated to the second vertex.
    pub u: Real,
    /// The barycentric coordinate of the hit associated to the third vertex.
    pub v: Real,
}

impl TriangleHit {
    /// The hit point, given the triangle it was computed with.
    #[inline]
    pub fn point_on_triangle(&self, a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Point<Real> {
        a + (b - a) * self.u + (c - a) * self.v
    }
}

/// Does the triangle `vertices` overlap the box centered at `center` with half-extents
/// `half_size`?
///
/// This is Akenine-Möller's separating-axis test: the 9 cross-products between the edges
/// of the triangle and the coordinate axes are tested first, then the 3 coordinate axes,
/// and finally the normal of the triangle. Zero-area triangles are supported: the normal
/// is skipped when the vertices are collinear (up to [`COLLINEAR_TRIANGLE_EPSILON`]).
pub fn tri_box_overlap(
    center: &Point<Real>,
    half_size: &Vector<Real>,
    vertices: &[Point<Real>; 3],
) -> bool {
    let v = vertices.map(|pt| pt - center);
    let edges = [v[1] - v[0], v[2] - v[1], v[0] - v[2]];

    for edge in &edges {
        for i in 0..DIM {
            let axis = Vector::ith(i, 1.0).cross(edge);

            if is_separating_axis(&axis, &v, half_size) {
                return false;
            }
        }
    }

    for i in 0..DIM {
        let min = v[0][i].min(v[1][i]).min(v[2][i]);
        let max = v[0][i].max(v[1][i]).max(v[2][i]);

        if min > half_size[i] || max < -half_size[i] {
            return false;
        }
    }

    let normal = edges[0].cross(&edges[1]);

    // For collinear vertices the cross product is rounding noise, and the axes above
    // already separate the segment from the box.
    if normal.norm_squared()
        <= COLLINEAR_TRIANGLE_EPSILON * edges[0].norm_squared() * edges[1].norm_squared()
    {
        return true;
    }

    plane_box_overlap(&normal, &v[0], half_size)
}

fn is_separating_axis(axis: &Vector<Real>, v: &[Vector<Real>; 3], half_size: &Vector<Real>) -> bool {
    let p = [axis.dot(&v[0]), axis.dot(&v[1]), axis.dot(&v[2])];
    let min = p[0].min(p[1]).min(p[2]);
    let max = p[0].max(p[1]).max(p[2]);
    let rad = half_size.dot(&axis.abs());

    min > rad || max < -rad
}

/// Does the plane with the given normal and passing through `vertex` overlap the box
/// centered at the origin with half-extents `half_size`?
fn plane_box_overlap(normal: &Vector<Real>, vertex: &Vector<Real>, half_size: &Vector<Real>) -> bool {
    let mut vmin = Vector::zeros();
    let mut vmax = Vector::zeros();

    for q in 0..DIM {
        if normal[q] > 0.0 {
            vmin[q] = -half_size[q] - vertex[q];
            vmax[q] = half_size[q] - vertex[q];
        } else {
            vmin[q] = half_size[q] - vertex[q];
            vmax[q] = -half_size[q] - vertex[q];
        }
    }

    if normal.dot(&vmin) > 0.0 {
        return false;
    }

    normal.dot(&vmax) >= 0.0
}

/// Intersects the ray `origin + t * dir` with the triangle `(a, b, c)`.
///
/// Uses the Möller-Trumbore algorithm. Returns `None` if the ray misses the triangle, hits
/// it at `t < 0`, or is parallel to its plane (up to [`TRIANGLE_EPSILON`]). Both faces of
/// the triangle can be hit.
pub fn intersect_triangle(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<TriangleHit> {
    let hit = cast_line_triangle(origin, dir, a, b, c)?;
    (hit.t >= 0.0).then_some(hit)
}

/// Intersects the segment `[start, end]` with the triangle `(a, b, c)`.
///
/// Same as [`intersect_triangle`] with `dir = end - start`, but the hit must also satisfy
/// `t <= 1`.
pub fn cast_segment_triangle(
    start: &Point<Real>,
    end: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<TriangleHit> {
    let hit = cast_line_triangle(start, &(end - start), a, b, c)?;
    (0.0..=1.0).contains(&hit.t).then_some(hit)
}

/// Does the segment `[start, end]` intersect the triangle `(a, b, c)`?
#[inline]
pub fn segment_intersects_triangle(
    start: &Point<Real>,
    end: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> bool {
    cast_segment_triangle(start, end, a, b, c).is_some()
}

/// Möller-Trumbore, without any restriction on `t`.
fn cast_line_triangle(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<TriangleHit> {
    let edge1 = b - a;
    let edge2 = c - a;
    let pvec = dir.cross(&edge2);
    let det = edge1.dot(&pvec);

    if det.abs() < TRIANGLE_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = origin - a;
    let u = tvec.dot(&pvec) * inv_det;

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(&edge1);
    let v = dir.dot(&qvec) * inv_det;

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    Some(TriangleHit {
        t: edge2.dot(&qvec) * inv_det,
        u,
        v,
    })
}
