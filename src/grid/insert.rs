//! Insertion engine: attach a vertex to the grid relative to an existing one,
//! splicing it into runs, merging it onto lines it lands on, and
//! synthesizing vertices wherever the new edge crosses an existing one.
//!
//! Every rule here preserves the grid invariants:
//!
//! - adjacency is bidirectional;
//! - coordinates along a run of same-direction edges are strictly monotonic;
//! - no two reachable vertices share a point;
//! - edges meet only at shared vertices: no vertex sits strictly inside an
//!   edge and no two edges cross without a vertex at the crossing.
//!
//! Degenerate input (coincident points, self insertion, a vertex that is not
//! ahead of the root on its line, rectangles thinner than two cells) is a
//! silent no-op.

use tracing::{debug, debug_span, trace};

use super::geometry::{Axis, Direction, Point, is_ahead, lies_between, line_length, within_open_range};
use super::graph::Grid;
use super::vertex::VertexId;

/// Where a vertex should be spliced: insert it from `from` toward `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InsertionPoint {
    from: VertexId,
    direction: Direction,
}

/// Something the new edge passes through strictly between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Station {
    /// An existing vertex on the new edge's line.
    Vertex(VertexId),
    /// The perpendicular edge leaving `from` toward `direction` is crossed
    /// at `point`.
    Crossing {
        from: VertexId,
        direction: Direction,
        point: Point,
    },
}

fn point_on(axis: Axis, along: i64, across: i64) -> Point {
    match axis {
        Axis::X => Point::new(along, across),
        Axis::Y => Point::new(across, along),
    }
}

impl Grid {
    /// Make `vertex` reachable from `root` by walking `direction`.
    ///
    /// `vertex` must lie strictly ahead of `root` on root's line; anything
    /// else is ignored. The edge is laid as a chain:
    ///
    /// - a fresh `vertex` landing inside an existing edge is first spliced
    ///   onto it (this covers both the perpendicular merge and the splice
    ///   behind an existing neighbor);
    /// - every vertex already on the segment becomes a link of the chain
    ///   (walking past an existing neighbor, or through a corner);
    /// - every perpendicular edge the segment crosses gets a new vertex
    ///   spliced in at the crossing.
    ///
    /// A `vertex` already held by root's slot, or whose point is taken by
    /// another reachable vertex, leaves the grid unchanged.
    pub fn insert(&mut self, direction: Direction, root: VertexId, vertex: VertexId) {
        if root == vertex || self.neighbor(root, direction) == Some(vertex) {
            return;
        }
        let from = self.point(root);
        let to = self.point(vertex);
        let across = direction.axis().perpendicular();
        if from.along(across) != to.along(across) || !is_ahead(direction, to, from) {
            trace!(%direction, from = %from, to = %to, "target not ahead on the line, ignored");
            return;
        }
        if self.vertex(vertex).degree() == 0
            && self.vertex_at(root, to).is_some_and(|holder| holder != vertex)
        {
            trace!(%direction, at = %to, "coincident insertion ignored");
            return;
        }

        self.merge_onto_line(root, vertex);

        let mut chain = vec![root];
        for station in self.find_stations(direction, root, vertex) {
            match station {
                Station::Vertex(id) => {
                    trace!(%direction, through = %self.point(id), "walk past existing vertex");
                    chain.push(id);
                }
                Station::Crossing { from: edge_start, direction: crossed, point } => {
                    trace!(at = %point, "splice crossing");
                    let joint = self.add_vertex(point);
                    self.splice(crossed, edge_start, joint);
                    chain.push(joint);
                }
            }
        }
        chain.push(vertex);

        for link in chain.windows(2) {
            self.connect(direction, link[0], link[1]);
        }
    }

    /// Put `vertex` between `from` and its current neighbor at `direction`.
    fn splice(&mut self, direction: Direction, from: VertexId, vertex: VertexId) {
        let next = self.neighbor(from, direction);
        self.connect(direction, from, vertex);
        if let Some(next) = next {
            self.connect(direction, vertex, next);
        }
    }

    /// If a fresh `vertex` lands strictly inside an existing edge, splice it
    /// onto that edge.
    fn merge_onto_line(&mut self, root: VertexId, vertex: VertexId) {
        if self.vertex(vertex).degree() != 0 {
            return;
        }
        let Some(at) = self.find_insertion_point(root, vertex) else {
            return;
        };
        trace!(
            at = %self.point(vertex),
            line_from = %self.point(at.from),
            direction = %at.direction,
            "merge onto existing line"
        );
        self.splice(at.direction, at.from, vertex);
    }

    /// The edge `vertex` lies strictly inside, named from its upper or left
    /// end. Edges only meet at vertices, so at most one edge qualifies.
    fn find_insertion_point(&self, root: VertexId, vertex: VertexId) -> Option<InsertionPoint> {
        let target = self.point(vertex);
        self.preorder(root).find_map(|from| {
            let origin = self.point(from);
            self.vertex(from).edges().find_map(|(d, next)| {
                (matches!(d, Direction::Down | Direction::Right)
                    && lies_between(target, origin, self.point(next)))
                .then_some(InsertionPoint { from, direction: d })
            })
        })
    }

    /// Vertices and crossings strictly between `root` and `vertex`, nearest
    /// to `root` first.
    fn find_stations(&self, direction: Direction, root: VertexId, vertex: VertexId) -> Vec<Station> {
        let start = self.point(root);
        let end = self.point(vertex);
        let axis = direction.axis();
        let across = axis.perpendicular();
        let line = start.along(across);
        let inside = |value: i64| within_open_range(value, start.along(axis), end.along(axis));

        let mut stations: Vec<(Point, Station)> = Vec::new();
        for from in self.preorder(root) {
            let origin = self.point(from);
            if origin.along(across) == line && inside(origin.along(axis)) {
                stations.push((origin, Station::Vertex(from)));
            }
            // Each perpendicular edge once, from its upper or left end.
            for (d, next) in self.vertex(from).edges() {
                if d.axis() == axis || !matches!(d, Direction::Down | Direction::Right) {
                    continue;
                }
                let at = origin.along(axis);
                if inside(at) && within_open_range(line, origin.along(across), self.point(next).along(across)) {
                    let point = point_on(axis, at, line);
                    stations.push((point, Station::Crossing { from, direction: d, point }));
                }
            }
        }
        stations.sort_by_key(|&(point, _)| line_length(start, direction, point));
        stations.into_iter().map(|(_, station)| station).collect()
    }

    /// Attach a `width` × `height` outline whose top-left corner is `root`.
    ///
    /// Inserts the corners Right, Down, Left and finally Up back to `root`.
    /// A corner whose point is already held by a reachable vertex reuses
    /// that vertex, so at most three vertices are created (plus one per
    /// crossing). Outlines whose far corner is not representable are skipped.
    pub fn add_rectangle(&mut self, root: VertexId, width: i64, height: i64) {
        let _span = debug_span!("add_rectangle", width, height).entered();
        if width < 2 || height < 2 {
            debug!(width, height, "degenerate rectangle skipped");
            return;
        }

        let origin = self.point(root);
        let (Some(right), Some(bottom)) = (origin.x.checked_add(width - 1), origin.y.checked_add(height - 1))
        else {
            debug!(at = %origin, width, height, "rectangle out of coordinate range skipped");
            return;
        };

        let top_right = self.locate_or_add(root, Point::new(right, origin.y));
        self.insert(Direction::Right, root, top_right);

        let bottom_right = self.locate_or_add(root, Point::new(right, bottom));
        self.insert(Direction::Down, top_right, bottom_right);

        let bottom_left = self.locate_or_add(root, Point::new(origin.x, bottom));
        self.insert(Direction::Left, bottom_right, bottom_left);

        self.insert(Direction::Up, bottom_left, root);

        debug!(at = %origin, vertices = self.len(), "rectangle added");
    }

    fn locate_or_add(&mut self, root: VertexId, point: Point) -> VertexId {
        match self.vertex_at(root, point) {
            Some(id) => id,
            None => self.add_vertex(point),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
