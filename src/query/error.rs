/// Error returned when a clipped polygon does not fit in its output buffer.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClipError {
    /// The clipped polygon would have more vertices than the output can hold.
    #[error("the clipped polygon does not fit in {capacity} vertices.")]
    VertexOverflow {
        /// The maximum number of vertices the output could hold.
        capacity: usize,
    },
}

/// Inconsistencies detected while validating a [`Polyhedron`](crate::shape::Polyhedron).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolyhedronError {
    /// The polyhedron has no vertex or no face.
    #[error("a polyhedron must have at least one vertex and one face.")]
    EmptyPolyhedron,
    /// An edge references a vertex that does not exist.
    #[error("the edge {edge} references the vertex {vertex} which does not exist.")]
    VertexIndexOutOfBounds {
        /// Index of the faulty edge.
        edge: usize,
        /// The out-of-bounds vertex index.
        vertex: u32,
    },
    /// An edge references a face that does not exist.
    #[error("the edge {edge} references the face {face} which does not exist.")]
    FaceIndexOutOfBounds {
        /// Index of the faulty edge.
        edge: usize,
        /// The out-of-bounds face index.
        face: u32,
    },
    /// A face plane points outward: the polyhedron centroid lies behind it.
    #[error("the plane {plane} faces outward.")]
    OutwardFacingPlane {
        /// Index of the faulty plane.
        plane: usize,
    },
}
