//! Fixed face topology of the cube.
//!
//! Six faces, each with a palette color and five neighbor relations (the four
//! faces around it plus its opposite). The relation is a `const` table indexed
//! by [`FaceId`], so faces never hold references to each other.

use crate::constants::face_constants::{FACE_COLORS, FACE_COUNT};

/// Identifier of a face, numbered in palette order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceId {
    East = 0,
    West = 1,
    North = 2,
    South = 3,
    Forward = 4,
    Reverse = 5,
}

impl FaceId {
    pub const ALL: [FaceId; FACE_COUNT] = [
        FaceId::East,
        FaceId::West,
        FaceId::North,
        FaceId::South,
        FaceId::Forward,
        FaceId::Reverse,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<FaceId> {
        Self::ALL.get(index).copied()
    }

    /// Outward unit normal in cube space.
    pub const fn normal(self) -> [f32; 3] {
        match self {
            FaceId::East => [1.0, 0.0, 0.0],
            FaceId::West => [-1.0, 0.0, 0.0],
            FaceId::North => [0.0, 1.0, 0.0],
            FaceId::South => [0.0, -1.0, 0.0],
            FaceId::Forward => [0.0, 0.0, 1.0],
            FaceId::Reverse => [0.0, 0.0, -1.0],
        }
    }
}

/// One of the five neighbor relations of a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
    Reverse,
}

impl Direction {
    /// The four relations that step onto an adjacent face.
    pub const AROUND: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];
}

/// Face color as 0xRRGGBB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceColor(pub u32);

impl FaceColor {
    pub const fn rgb_u8(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors {
    pub north: FaceId,
    pub south: FaceId,
    pub west: FaceId,
    pub east: FaceId,
    pub reverse: FaceId,
}

impl Neighbors {
    pub const fn get(&self, direction: Direction) -> FaceId {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::West => self.west,
            Direction::East => self.east,
            Direction::Reverse => self.reverse,
        }
    }

    /// The four adjacent faces, in north/south/west/east order.
    pub const fn around(&self) -> [FaceId; 4] {
        [self.north, self.south, self.west, self.east]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub id: FaceId,
    pub color: FaceColor,
    pub neighbors: Neighbors,
}

const fn joins(
    north: FaceId,
    south: FaceId,
    west: FaceId,
    east: FaceId,
    reverse: FaceId,
) -> Neighbors {
    Neighbors {
        north,
        south,
        west,
        east,
        reverse,
    }
}

// Row i holds the neighbors of face i.
const NEIGHBOR_TABLE: [Neighbors; FACE_COUNT] = {
    use FaceId::*;
    [
        joins(North, South, Forward, Reverse, West),
        joins(North, South, Reverse, Forward, East),
        joins(Reverse, Forward, West, East, South),
        joins(Reverse, Forward, East, West, North),
        joins(North, South, West, East, Reverse),
        joins(North, South, East, West, Forward),
    ]
};

/// The six faces of a cube and their adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceGraph {
    faces: [Face; FACE_COUNT],
}

impl FaceGraph {
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    pub fn neighbor(&self, id: FaceId, direction: Direction) -> FaceId {
        self.face(id).neighbors.get(direction)
    }

    pub fn opposite(&self, id: FaceId) -> FaceId {
        self.neighbor(id, Direction::Reverse)
    }

    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }
}

/// Builds the face graph: colors assigned by position, neighbors from the fixed table.
pub fn build_cube() -> FaceGraph {
    let faces = FaceId::ALL.map(|id| Face {
        id,
        color: FaceColor(FACE_COLORS[id.index()]),
        neighbors: NEIGHBOR_TABLE[id.index()],
    });
    FaceGraph { faces }
}

/// Face graph plus the two reference directions of the cube.
///
/// `forward_face` and `up_direction` are the faces pointing at the viewer and
/// upwards when the cube is first shown. Turns do not update them: the visible
/// orientation is carried by the engine transform alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cube {
    graph: FaceGraph,
    forward_face: FaceId,
    up_direction: FaceId,
}

impl Cube {
    pub fn new() -> Self {
        Self {
            graph: build_cube(),
            forward_face: FaceId::Forward,
            up_direction: FaceId::North,
        }
    }

    pub fn graph(&self) -> &FaceGraph {
        &self.graph
    }

    pub fn forward_face(&self) -> FaceId {
        self.forward_face
    }

    pub fn up_direction(&self) -> FaceId {
        self.up_direction
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
