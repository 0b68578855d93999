//! Named tolerances and small vector helpers shared by the predicates.

pub use self::vector_ext::{centroid, interpolate, VectorExt};

pub mod consts;
mod vector_ext;
