//! Visited-set-guarded walks over the grid.
//!
//! The graph is cyclic (every closed room outline is a cycle), so every walk
//! keys a visited set on [`VertexId`]. Neighbors are always explored in
//! `Direction::ALL` order; first-match searches rely on that order.
//!
//! An absent root, either `None` or an id this grid never allocated, yields
//! an empty walk.

use std::collections::{HashSet, VecDeque};

use super::geometry::{Axis, Direction, Point};
use super::graph::Grid;
use super::vertex::VertexId;

// ─── Depth-first event stream ─────────────────────────────────────────────────

/// One step of a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// First arrival at a vertex (pre-order).
    Enter(VertexId),
    /// Every neighbor of the vertex has been explored (post-order).
    Exit(VertexId),
}

/// Iterative depth-first walk yielding [`Visit`] events.
///
/// Event order is the same as a recursive walk that marks a vertex visited
/// on entry and then recurses into its slots in `Direction::ALL` order.
pub struct DepthFirst<'g> {
    grid: &'g Grid,
    visited: HashSet<VertexId>,
    stack: Vec<(VertexId, usize)>,
    pending: Option<VertexId>,
}

impl<'g> DepthFirst<'g> {
    fn new(grid: &'g Grid, root: Option<VertexId>) -> Self {
        let root = root.filter(|&id| grid.contains(id));
        Self {
            grid,
            visited: HashSet::new(),
            stack: Vec::new(),
            pending: root,
        }
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        if let Some(root) = self.pending.take() {
            self.visited.insert(root);
            self.stack.push((root, 0));
            return Some(Visit::Enter(root));
        }

        loop {
            let (id, slot) = self.stack.last_mut()?;
            let id = *id;
            if *slot == Direction::ALL.len() {
                self.stack.pop();
                return Some(Visit::Exit(id));
            }
            let direction = Direction::from_index(*slot);
            *slot += 1;

            if let Some(next) = self.grid.neighbor(id, direction)
                && self.visited.insert(next)
            {
                self.stack.push((next, 0));
                return Some(Visit::Enter(next));
            }
        }
    }
}

// ─── Walk API ─────────────────────────────────────────────────────────────────

impl Grid {
    /// Depth-first event stream from `root`.
    pub fn walk(&self, root: impl Into<Option<VertexId>>) -> DepthFirst<'_> {
        DepthFirst::new(self, root.into())
    }

    /// Reachable vertices in depth-first pre-order.
    pub fn preorder(&self, root: impl Into<Option<VertexId>>) -> impl Iterator<Item = VertexId> + '_ {
        self.walk(root).filter_map(|visit| match visit {
            Visit::Enter(id) => Some(id),
            Visit::Exit(_) => None,
        })
    }

    /// Reachable vertices in depth-first post-order.
    pub fn postorder(&self, root: impl Into<Option<VertexId>>) -> impl Iterator<Item = VertexId> + '_ {
        self.walk(root).filter_map(|visit| match visit {
            Visit::Exit(id) => Some(id),
            Visit::Enter(_) => None,
        })
    }

    /// Reachable vertices in breadth-first order, each exactly once.
    pub fn breadth_first(&self, root: impl Into<Option<VertexId>>) -> Vec<VertexId> {
        let mut order = Vec::new();
        let Some(root) = root.into().filter(|&id| self.contains(id)) else {
            return order;
        };

        let mut visited = HashSet::from([root]);
        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            order.push(id);
            for (_, next) in self.vertex(id).edges() {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        order
    }

    /// Visit each reachable vertex once, breadth order, pre-order.
    pub fn for_each_breadth_first<F>(&self, root: impl Into<Option<VertexId>>, mut visit: F)
    where
        F: FnMut(VertexId),
    {
        for id in self.breadth_first(root) {
            visit(id);
        }
    }

    /// Visit each reachable vertex once, depth order, post-order: a vertex is
    /// visited only after everything reached through it.
    pub fn for_each_depth_first<F>(&self, root: impl Into<Option<VertexId>>, mut visit: F)
    where
        F: FnMut(VertexId),
    {
        for id in self.postorder(root) {
            visit(id);
        }
    }

    /// First vertex in depth-first pre-order matching `predicate`.
    pub fn find_first<P>(&self, root: impl Into<Option<VertexId>>, mut predicate: P) -> Option<VertexId>
    where
        P: FnMut(VertexId) -> bool,
    {
        self.preorder(root).find(|&id| predicate(id))
    }

    /// Every reachable vertex matching `predicate`, in depth-first pre-order.
    pub fn collect<P>(&self, root: impl Into<Option<VertexId>>, mut predicate: P) -> Vec<VertexId>
    where
        P: FnMut(VertexId) -> bool,
    {
        self.preorder(root).filter(|&id| predicate(id)).collect()
    }

    /// The reachable vertex sitting at `point`, if any.
    pub fn vertex_at(&self, root: impl Into<Option<VertexId>>, point: Point) -> Option<VertexId> {
        self.find_first(root, |id| self.point(id) == point)
    }

    /// Reachable vertices whose `axis` coordinate equals `value`, sorted along
    /// the line.
    pub fn vertices_on_line(
        &self,
        root: impl Into<Option<VertexId>>,
        axis: Axis,
        value: i64,
    ) -> Vec<VertexId> {
        let mut line = self.collect(root, |id| self.point(id).along(axis) == value);
        line.sort_by_key(|&id| self.point(id).along(axis.perpendicular()));
        line
    }

    /// Number of vertices reachable from `root`.
    pub fn reachable_count(&self, root: impl Into<Option<VertexId>>) -> usize {
        self.preorder(root).count()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
