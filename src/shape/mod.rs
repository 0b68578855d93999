//! Planes and convex polyhedra.

pub use self::plane::{Plane, PlaneClassify, PlaneSide};
pub use self::polyhedron::{Polyhedron, PolyhedronEdge};

mod plane;
mod polyhedron;
