//! Axis-aligned bounding box of the reachable grid.

use super::geometry::Point;
use super::graph::Grid;
use super::vertex::VertexId;

/// Inclusive extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn new(min_x: i64, max_x: i64, min_y: i64, max_y: i64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Degenerate box holding a single point.
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.x, point.y, point.y)
    }

    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// Number of columns covered, endpoints included.
    pub fn width(&self) -> i64 {
        self.max_x.saturating_sub(self.min_x).saturating_add(1)
    }

    /// Number of rows covered, endpoints included.
    pub fn height(&self) -> i64 {
        self.max_y.saturating_sub(self.min_y).saturating_add(1)
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// Where the running min/max starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsSeed {
    /// Start at (0, 0): the origin is always part of the result, even for a
    /// grid that sits entirely away from it.
    #[default]
    Origin,
    /// Start at the root vertex, giving the tight box.
    Root,
}

impl Grid {
    /// Bounding box of everything reachable from `root`, seeded at the origin.
    pub fn compute_bounds(&self, root: impl Into<Option<VertexId>>) -> Bounds {
        self.compute_bounds_seeded(root, BoundsSeed::Origin)
    }

    /// Bounding box of everything reachable from `root`, breadth-first.
    ///
    /// An absent root gives all-zero bounds for either seed.
    pub fn compute_bounds_seeded(&self, root: impl Into<Option<VertexId>>, seed: BoundsSeed) -> Bounds {
        let root = root.into().filter(|&id| self.contains(id));
        let mut bounds = match (seed, root) {
            (BoundsSeed::Root, Some(id)) => Bounds::at(self.point(id)),
            _ => Bounds::default(),
        };
        self.for_each_breadth_first(root, |id| bounds.include(self.point(id)));
        bounds
    }
}
