/*!
isect3d
========

**isect3d** is a 3-dimensional library of bounding volumes and exact
intersection predicates, written with the rust programming language.

It provides the geometric classification layer used by scene culling,
collision and trigger-volume code: axis-aligned and oriented boxes, spheres,
planes, plane sets (frusta), an exact convex-polyhedron/box intersector and
triangle/box and ray/triangle tests.

The same sources build the single-precision crate (`isect3d`) and the
double-precision crate (`isect3d-f64`). Every tolerance used by the
predicates lives in [`utils::consts`].
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The rigid transformation type.
    pub use Isometry3 as Isometry;

    /// The integer point type, used by integer boxes.
    pub type IPoint = Point3<i32>;

    /// The integer vector type, used by integer boxes.
    pub type IVector = Vector3<i32>;
}
