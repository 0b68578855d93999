//! Static corner/face/edge tables shared by every box-shaped volume.
//!
//! Corners are indexed by their octant: bit 0 selects the maximum along X,
//! bit 1 the maximum along Y and bit 2 the maximum along Z.
//!
//! ```text
//!    z
//!    |    6 ------ 7
//!    |   /|       /|
//!       4 ------ 5 |
//!       | 2 ----|- 3    y
//!       |/      |/    /
//!       0 ------ 1  ___ x
//! ```

use crate::math::{Real, Vector};

/// One of the eight corners of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxCorner(u8);

impl BoxCorner {
    /// All the corners, sorted by index.
    pub const ALL: [BoxCorner; 8] = [
        BoxCorner(0),
        BoxCorner(1),
        BoxCorner(2),
        BoxCorner(3),
        BoxCorner(4),
        BoxCorner(5),
        BoxCorner(6),
        BoxCorner(7),
    ];

    /// The corner with minimal coordinates on every axis.
    pub const MIN: BoxCorner = BoxCorner(0);
    /// The corner with maximal coordinates on every axis.
    pub const MAX: BoxCorner = BoxCorner(7);

    /// The corner with the given index, if it is smaller than 8.
    #[inline]
    pub fn new(index: usize) -> Option<BoxCorner> {
        if index < 8 {
            Some(BoxCorner(index as u8))
        } else {
            None
        }
    }

    /// The corner lying in the given octant.
    ///
    /// Each flag is `true` if the corner sits on the maximum side of the
    /// corresponding axis.
    #[inline]
    pub fn from_octant(max_x: bool, max_y: bool, max_z: bool) -> BoxCorner {
        BoxCorner(max_x as u8 | ((max_y as u8) << 1) | ((max_z as u8) << 2))
    }

    /// The index of this corner, in `0..8`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Does this corner sit on the maximum side of `axis`?
    #[inline]
    pub fn is_max(self, axis: usize) -> bool {
        assert!(axis < 3, "Invalid box axis index: {}", axis);
        (self.0 >> axis) & 1 == 1
    }

    /// The corner diagonally opposite to this one.
    #[inline]
    pub fn opposite(self) -> BoxCorner {
        BoxCorner(!self.0 & 0b111)
    }
}

/// One of the six faces of a box, named after its outward normal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoxFace {
    /// The face with outward normal `-X`.
    NegX = 0,
    /// The face with outward normal `+X`.
    PosX = 1,
    /// The face with outward normal `-Y`.
    NegY = 2,
    /// The face with outward normal `+Y`.
    PosY = 3,
    /// The face with outward normal `-Z`.
    NegZ = 4,
    /// The face with outward normal `+Z`.
    PosZ = 5,
}

const FACE_CORNERS: [[u8; 4]; 6] = [
    [0, 4, 6, 2],
    [1, 3, 7, 5],
    [0, 1, 5, 4],
    [2, 6, 7, 3],
    [0, 2, 3, 1],
    [4, 5, 7, 6],
];

impl BoxFace {
    /// All the faces, sorted by index.
    pub const ALL: [BoxFace; 6] = [
        BoxFace::NegX,
        BoxFace::PosX,
        BoxFace::NegY,
        BoxFace::PosY,
        BoxFace::NegZ,
        BoxFace::PosZ,
    ];

    /// The face on the given side of `axis`.
    #[inline]
    pub fn new(axis: usize, positive: bool) -> BoxFace {
        assert!(axis < 3, "Invalid box axis index: {}", axis);
        Self::ALL[axis * 2 + positive as usize]
    }

    /// The index of this face, in `0..6`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The axis this face is orthogonal to.
    #[inline]
    pub fn axis(self) -> usize {
        self as usize / 2
    }

    /// Is the outward normal of this face pointing toward the positive axis?
    #[inline]
    pub fn is_positive(self) -> bool {
        self as usize % 2 == 1
    }

    /// The sign (`1` or `-1`) of the outward normal of this face.
    #[inline]
    pub fn sign(self) -> i8 {
        if self.is_positive() {
            1
        } else {
            -1
        }
    }

    /// The unit outward normal of this face.
    #[inline]
    pub fn outward_normal(self) -> Vector<Real> {
        let mut normal = Vector::zeros();
        normal[self.axis()] = self.sign() as Real;
        normal
    }

    /// The face on the other side of the box.
    #[inline]
    pub fn opposite(self) -> BoxFace {
        Self::ALL[self as usize ^ 1]
    }

    /// The four corners of this face, counterclockwise when seen from
    /// outside of the box.
    #[inline]
    pub fn corners(self) -> [BoxCorner; 4] {
        FACE_CORNERS[self as usize].map(BoxCorner)
    }
}

/// One of the twelve edges of a box.
///
/// Edges `0..4` are parallel to X, `4..8` to Y and `8..12` to Z.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoxEdge(u8);

const EDGE_CORNERS: [[u8; 2]; 12] = [
    [0, 1],
    [2, 3],
    [4, 5],
    [6, 7],
    [0, 2],
    [1, 3],
    [4, 6],
    [5, 7],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

const EDGE_FACES: [[BoxFace; 2]; 12] = [
    [BoxFace::NegY, BoxFace::NegZ],
    [BoxFace::PosY, BoxFace::NegZ],
    [BoxFace::NegY, BoxFace::PosZ],
    [BoxFace::PosY, BoxFace::PosZ],
    [BoxFace::NegX, BoxFace::NegZ],
    [BoxFace::PosX, BoxFace::NegZ],
    [BoxFace::NegX, BoxFace::PosZ],
    [BoxFace::PosX, BoxFace::PosZ],
    [BoxFace::NegX, BoxFace::NegY],
    [BoxFace::PosX, BoxFace::NegY],
    [BoxFace::NegX, BoxFace::PosY],
    [BoxFace::PosX, BoxFace::PosY],
];

impl BoxEdge {
    /// All the edges, sorted by index.
    pub const ALL: [BoxEdge; 12] = [
        BoxEdge(0),
        BoxEdge(1),
        BoxEdge(2),
        BoxEdge(3),
        BoxEdge(4),
        BoxEdge(5),
        BoxEdge(6),
        BoxEdge(7),
        BoxEdge(8),
        BoxEdge(9),
        BoxEdge(10),
        BoxEdge(11),
    ];

    /// The edge with the given index, if it is smaller than 12.
    #[inline]
    pub fn new(index: usize) -> Option<BoxEdge> {
        if index < 12 {
            Some(BoxEdge(index as u8))
        } else {
            None
        }
    }

    /// The index of this edge, in `0..12`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The axis this edge is parallel to.
    #[inline]
    pub fn axis(self) -> usize {
        self.0 as usize / 4
    }

    /// The two endpoints of this edge, the one with the smallest coordinate first.
    #[inline]
    pub fn corners(self) -> [BoxCorner; 2] {
        EDGE_CORNERS[self.0 as usize].map(BoxCorner)
    }

    /// The two faces sharing this edge.
    #[inline]
    pub fn faces(self) -> [BoxFace; 2] {
        EDGE_FACES[self.0 as usize]
    }
}
