//! `Grid` — the vertex arena and the connect primitive.
//!
//! Vertices reference each other through [`VertexId`] slots, so the cyclic
//! adjacency never turns into an ownership cycle. The arena only grows.

use super::geometry::{Direction, Point};
use super::vertex::{Vertex, VertexId};

#[derive(Debug, Clone, Default)]
pub struct Grid {
    vertices: Vec<Vertex>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an unconnected vertex at `(x, y)`.
    pub fn new_vertex(&mut self, x: i64, y: i64) -> VertexId {
        self.add_vertex(Point::new(x, y))
    }

    pub fn add_vertex(&mut self, point: Point) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(point));
        id
    }

    /// Number of vertices ever allocated, reachable or not.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// Panics if `id` was not allocated by this grid.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    pub fn point(&self, id: VertexId) -> Point {
        self.vertex(id).point
    }

    pub fn neighbor(&self, id: VertexId, direction: Direction) -> Option<VertexId> {
        self.vertex(id).neighbor(direction)
    }

    /// All allocated ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    fn set_neighbor(&mut self, id: VertexId, direction: Direction, other: VertexId) {
        self.vertices[id.0].neighbors[direction.index()] = Some(other);
    }

    /// Point `node`'s slot at `direction` to `other`, then make sure `other`
    /// points back through the inverse slot.
    ///
    /// Only the `direction` / `direction.invert()` slot pair is touched.
    pub fn connect(&mut self, direction: Direction, node: VertexId, other: VertexId) {
        self.set_neighbor(node, direction, other);
        let inverse = direction.invert();
        if self.neighbor(other, inverse) != Some(node) {
            self.connect(inverse, other, node);
        }
    }

    /// Both halves of the `a --direction--> b` adjacency are present.
    pub fn connection_exists(&self, direction: Direction, a: VertexId, b: VertexId) -> bool {
        self.neighbor(a, direction) == Some(b) && self.neighbor(b, direction.invert()) == Some(a)
    }

    /// Any slot of `a` references `b`.
    pub fn is_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.vertex(a).neighbors().contains(&Some(b))
    }
}
