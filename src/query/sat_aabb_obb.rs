use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real, Vector};

impl Aabb {
    /// Does this box intersect an oriented box?
    ///
    /// The oriented box is given by its half-extents `b_radii` and the transform `to_a`
    /// mapping its local space (where it is centered at the origin and axis-aligned) into
    /// the space this box is expressed in.
    ///
    /// This is an exact separating-axis test over the 15 candidate axes: the 3 face normals
    /// of each box and the 9 cross-products of their edge directions. It stops at the first
    /// separating axis found.
    pub fn collide_oriented_box(&self, b_radii: &Vector<Real>, to_a: &Isometry<Real>) -> bool {
        let a = self.half_extents();
        let b = b_radii;
        let rot = to_a.rotation.to_rotation_matrix();
        // Column `j` of `r` is the `j`-th axis of the oriented box.
        let r = rot.matrix();
        let abs_r = r.abs();
        let t = to_a.translation.vector - self.center().coords;

        // Face normals of this box.
        for i in 0..3 {
            let rb = b.dot(&abs_r.row(i).transpose());

            if t[i].abs() > a[i] + rb {
                return false;
            }
        }

        // Face normals of the oriented box.
        for j in 0..3 {
            let ra = a.dot(&abs_r.column(j));

            if t.dot(&r.column(j)).abs() > ra + b[j] {
                return false;
            }
        }

        // Cross-products of the edge directions.
        for i in 0..3 {
            let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);

            for j in 0..3 {
                let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);

                let ra = a[i1] * abs_r[(i2, j)] + a[i2] * abs_r[(i1, j)];
                let rb = b[j1] * abs_r[(i, j2)] + b[j2] * abs_r[(i, j1)];
                let dist = (t[i2] * r[(i1, j)] - t[i1] * r[(i2, j)]).abs();

                if dist > ra + rb {
                    return false;
                }
            }
        }

        true
    }
}
