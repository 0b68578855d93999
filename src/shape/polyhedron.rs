use crate::bounding_volume::{Aabb, BoxCorner, BoxEdge, BoxFace, Obb};
use crate::math::{Point, Real};
use crate::query::PolyhedronError;
use crate::shape::{Plane, PlaneSide};
use crate::utils::centroid;

/// An edge of a [`Polyhedron`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PolyhedronEdge {
    /// Indices of the two endpoints of this edge in [`Polyhedron::points`].
    pub vertices: [u32; 2],
    /// Indices of the two faces sharing this edge in [`Polyhedron::planes`].
    pub faces: [u32; 2],
}

impl PolyhedronEdge {
    /// Creates a new edge from its endpoints and adjacent faces.
    #[inline]
    pub fn new(vertices: [u32; 2], faces: [u32; 2]) -> Self {
        Self { vertices, faces }
    }
}

/// A convex polyhedron described by its vertices, face planes and edges.
///
/// The face planes must face *inward*: every point inside of the polyhedron lies in
/// front of all of them. This is what [`Polyhedron::validate`] checks, along with the
/// consistency of the edge indices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polyhedron {
    /// The vertices.
    pub points: Vec<Point<Real>>,
    /// The face planes, facing inward.
    pub planes: Vec<Plane>,
    /// The edges, each referencing two vertices and two faces.
    pub edges: Vec<PolyhedronEdge>,
}

impl Polyhedron {
    /// Creates a polyhedron from its raw parts, without any validation.
    pub fn new(points: Vec<Point<Real>>, planes: Vec<Plane>, edges: Vec<PolyhedronEdge>) -> Self {
        Self {
            points,
            planes,
            edges,
        }
    }

    /// The polyhedron with the same shape as `aabb`.
    ///
    /// Vertices, planes and edges are ordered like [`BoxCorner`], [`BoxFace`] and
    /// [`BoxEdge`].
    pub fn from_aabb(aabb: &Aabb) -> Self {
        let planes = BoxFace::ALL
            .iter()
            .map(|face| aabb.face_plane(*face).flipped())
            .collect();
        Self::with_box_topology(aabb.vertices().to_vec(), planes)
    }

    /// The polyhedron with the same shape as `obb`.
    ///
    /// Vertices, planes and edges are ordered like [`BoxCorner`], [`BoxFace`] and
    /// [`BoxEdge`].
    pub fn from_obb(obb: &Obb) -> Self {
        let planes = BoxFace::ALL
            .iter()
            .map(|face| {
                let outward = obb.axis(face.axis()) * face.sign() as Real;
                let point = obb.center() + outward * obb.half_extents()[face.axis()];
                Plane::from_point_normal(&point, &-outward)
            })
            .collect();
        Self::with_box_topology(obb.points().to_vec(), planes)
    }

    fn with_box_topology(points: Vec<Point<Real>>, planes: Vec<Plane>) -> Self {
        let edges = BoxEdge::ALL
            .iter()
            .map(|edge| {
                let [a, b] = edge.corners();
                let [f1, f2] = edge.faces();
                PolyhedronEdge::new(
                    [a.index() as u32, b.index() as u32],
                    [f1.index() as u32, f2.index() as u32],
                )
            })
            .collect();

        Self {
            points,
            planes,
            edges,
        }
    }

    /// Checks that this polyhedron is not empty and that its edges only reference
    /// existing vertices and faces.
    pub fn validate_indices(&self) -> Result<(), PolyhedronError> {
        if self.points.is_empty() || self.planes.is_empty() {
            return Err(PolyhedronError::EmptyPolyhedron);
        }

        for (edge_id, edge) in self.edges.iter().enumerate() {
            if let Some(vertex) = edge
                .vertices
                .iter()
                .find(|v| **v as usize >= self.points.len())
            {
                return Err(PolyhedronError::VertexIndexOutOfBounds {
                    edge: edge_id,
                    vertex: *vertex,
                });
            }

            if let Some(face) = edge.faces.iter().find(|f| **f as usize >= self.planes.len()) {
                return Err(PolyhedronError::FaceIndexOutOfBounds {
                    edge: edge_id,
                    face: *face,
                });
            }
        }

        Ok(())
    }

    /// Checks that every plane faces inward.
    ///
    /// The centroid of the vertices is used as a witness interior point: it must not lie
    /// behind any of the planes.
    pub fn validate_orientation(&self) -> Result<(), PolyhedronError> {
        let witness = centroid(&self.points).ok_or(PolyhedronError::EmptyPolyhedron)?;

        match self
            .planes
            .iter()
            .position(|plane| plane.which_side(&witness) == PlaneSide::Back)
        {
            Some(plane) => Err(PolyhedronError::OutwardFacingPlane { plane }),
            None => Ok(()),
        }
    }

    /// Runs both [`Polyhedron::validate_indices`] and [`Polyhedron::validate_orientation`].
    pub fn validate(&self) -> Result<(), PolyhedronError> {
        self.validate_indices()?;
        self.validate_orientation()
    }

    /// Is `point` inside of this polyhedron (within [`PLANE_SIDE_EPSILON`](crate::utils::consts::PLANE_SIDE_EPSILON))?
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.which_side(point) != PlaneSide::Back)
    }

    /// The axis-aligned box enclosing all the vertices.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.points)
    }

    /// The vertex associated to the given box corner, for polyhedra built with
    /// [`Polyhedron::from_aabb`] or [`Polyhedron::from_obb`].
    #[inline]
    pub fn box_corner(&self, corner: BoxCorner) -> Option<&Point<Real>> {
        self.points.get(corner.index())
    }
}
