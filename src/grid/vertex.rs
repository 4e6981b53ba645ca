//! Vertex and its arena handle.

use std::fmt;

use super::geometry::{Direction, Point};

/// Stable index of a vertex in its [`Grid`](super::Grid) arena.
///
/// Ids are never reused: vertices are only ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A grid point with one neighbor slot per [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub point: Point,
    pub(crate) neighbors: [Option<VertexId>; 4],
}

impl Vertex {
    pub(crate) fn new(point: Point) -> Self {
        Self {
            point,
            neighbors: [None; 4],
        }
    }

    pub fn x(&self) -> i64 {
        self.point.x
    }

    pub fn y(&self) -> i64 {
        self.point.y
    }

    pub fn neighbor(&self, direction: Direction) -> Option<VertexId> {
        self.neighbors[direction.index()]
    }

    /// Neighbor slots in `Direction::ALL` order.
    pub fn neighbors(&self) -> [Option<VertexId>; 4] {
        self.neighbors
    }

    /// Occupied slots as `(direction, neighbor)` pairs, in `Direction::ALL` order.
    pub fn edges(&self) -> impl Iterator<Item = (Direction, VertexId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(d).map(|n| (d, n)))
    }

    pub fn degree(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_some()).count()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |d: Direction| match self.neighbor(d) {
            Some(id) => id.to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "{} [U {:>5}, L {:>5}, D {:>5}, R {:>5}]",
            self.point,
            slot(Direction::Up),
            slot(Direction::Left),
            slot(Direction::Down),
            slot(Direction::Right),
        )
    }
}
