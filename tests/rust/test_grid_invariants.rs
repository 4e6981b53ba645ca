//! Property-based invariant tests for the insertion engine.
//!
//! Rooms are attached either to a shared top-left corner (the way a generator
//! grows nested rooms) or to any vertex reachable at that moment, and the
//! resulting grid must satisfy, for any sizes:
//!
//! 1. Adjacency is bidirectional.
//! 2. No two reachable vertices share a point.
//! 3. Every neighbor lies on the vertex's line, strictly ahead in its direction.
//! 4. Every allocated vertex is reachable from the root, in one component.
//! 5. Each room's outline closes: Right, Down, Left, Up lands back on its anchor.
//! 6. Connect is idempotent.
//! 7. Edges meet only at vertices: no vertex sits strictly inside an edge.

use std::collections::HashSet;

use proptest::prelude::*;
use room_grid::grid::{Direction, Grid, Point, VertexId, is_ahead, lies_between};

// ── Helpers ─────────────────────────────────────────────────────────────

fn room_strategy() -> impl Strategy<Value = (i64, i64)> {
    (2i64..=14, 2i64..=14)
}

fn rooms_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec(room_strategy(), 1..=6)
}

fn build(origin: Point, rooms: &[(i64, i64)]) -> (Grid, VertexId) {
    let mut grid = Grid::new();
    let root = grid.add_vertex(origin);
    for &(w, h) in rooms {
        grid.add_rectangle(root, w, h);
    }
    (grid, root)
}

/// A room size plus a pick among the vertices reachable when it is placed.
fn anchored_rooms_strategy() -> impl Strategy<Value = Vec<(prop::sample::Index, i64, i64)>> {
    prop::collection::vec((any::<prop::sample::Index>(), 2i64..=14, 2i64..=14), 1..=6)
}

/// Place each room at a vertex picked from the current pre-order walk.
/// Returns the grid, its root and each room's anchor point.
fn build_anchored(rooms: &[(prop::sample::Index, i64, i64)]) -> (Grid, VertexId, Vec<(Point, i64, i64)>) {
    let mut grid = Grid::new();
    let root = grid.new_vertex(0, 0);
    let mut placed = Vec::new();
    for (pick, w, h) in rooms {
        let ids: Vec<VertexId> = grid.preorder(root).collect();
        let anchor = ids[pick.index(ids.len())];
        placed.push((grid.point(anchor), *w, *h));
        grid.add_rectangle(anchor, *w, *h);
    }
    (grid, root, placed)
}

/// Every structural invariant at once, as a message naming the first
/// violation.
fn check_structure(grid: &Grid, root: VertexId) -> Result<(), String> {
    let ids: Vec<VertexId> = grid.preorder(root).collect();
    let mut seen = HashSet::new();
    for &id in &ids {
        let here = grid.point(id);
        if !seen.insert(here) {
            return Err(format!("duplicate point {here}"));
        }
        for (d, next) in grid.vertex(id).edges() {
            let there = grid.point(next);
            if grid.neighbor(next, d.invert()) != Some(id) {
                return Err(format!("{here} -> {there} via {d} is one-way"));
            }
            if !is_ahead(d, there, here) || there.along(d.axis().perpendicular()) != here.along(d.axis().perpendicular()) {
                return Err(format!("{there} is not ahead of {here} going {d}"));
            }
            if let Some(&inside) = ids.iter().find(|&&other| lies_between(grid.point(other), here, there)) {
                return Err(format!("{} sits inside edge {here} -> {there}", grid.point(inside)));
            }
        }
    }
    if ids.len() != grid.len() {
        return Err(format!("{} of {} vertices reachable", ids.len(), grid.len()));
    }
    Ok(())
}

/// Follow `direction` from `start` until reaching `target` along the line.
fn walk_to(grid: &Grid, start: VertexId, direction: Direction, target: Point) -> Option<VertexId> {
    let mut at = start;
    while grid.point(at) != target {
        at = grid.neighbor(at, direction)?;
    }
    Some(at)
}

// ═════════════════════════════════════════════════════════════════════════
// 1–4. Structural invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn adjacency_is_bidirectional(rooms in rooms_strategy()) {
        let (grid, root) = build(Point::new(0, 0), &rooms);
        for id in grid.preorder(root) {
            for (d, next) in grid.vertex(id).edges() {
                prop_assert_eq!(
                    grid.neighbor(next, d.invert()),
                    Some(id),
                    "{} -> {} via {} is one-way",
                    grid.point(id),
                    grid.point(next),
                    d
                );
            }
        }
    }

    #[test]
    fn points_are_unique(rooms in rooms_strategy()) {
        let (grid, root) = build(Point::new(0, 0), &rooms);
        let mut seen = HashSet::new();
        for id in grid.preorder(root) {
            prop_assert!(seen.insert(grid.point(id)), "duplicate point {}", grid.point(id));
        }
    }

    #[test]
    fn neighbors_are_ordered_on_their_line(rooms in rooms_strategy()) {
        let (grid, root) = build(Point::new(0, 0), &rooms);
        for id in grid.preorder(root) {
            let here = grid.point(id);
            for (d, next) in grid.vertex(id).edges() {
                let there = grid.point(next);
                prop_assert!(is_ahead(d, there, here), "{} not ahead of {} going {}", there, here, d);
                let cross_axis = d.axis().perpendicular();
                prop_assert_eq!(there.along(cross_axis), here.along(cross_axis));
            }
        }
    }

    #[test]
    fn every_vertex_is_attached(rooms in rooms_strategy()) {
        let (grid, root) = build(Point::new(0, 0), &rooms);
        prop_assert_eq!(grid.reachable_count(root), grid.len());
        prop_assert_eq!(grid.component_count(), 1);
    }

    #[test]
    fn invariants_hold_away_from_origin(x in -20i64..20, y in -20i64..20, rooms in rooms_strategy()) {
        let (grid, root) = build(Point::new(x, y), &rooms);
        for id in grid.preorder(root) {
            for (d, next) in grid.vertex(id).edges() {
                prop_assert_eq!(grid.neighbor(next, d.invert()), Some(id));
                prop_assert!(is_ahead(d, grid.point(next), grid.point(id)));
            }
        }
        let tight = grid.compute_bounds_seeded(root, room_grid::grid::BoundsSeed::Root);
        let widest = rooms.iter().map(|&(w, _)| w).max().unwrap_or(1);
        let tallest = rooms.iter().map(|&(_, h)| h).max().unwrap_or(1);
        prop_assert_eq!(tight.width(), widest);
        prop_assert_eq!(tight.height(), tallest);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1–4, 7. Rooms anchored anywhere
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn anchored_rooms_keep_structure(rooms in anchored_rooms_strategy()) {
        let (grid, root, _) = build_anchored(&rooms);
        if let Err(violation) = check_structure(&grid, root) {
            prop_assert!(false, "{}", violation);
        }
        prop_assert_eq!(grid.component_count(), 1);
    }

    #[test]
    fn anchored_room_outlines_close(rooms in anchored_rooms_strategy()) {
        let (grid, root, placed) = build_anchored(&rooms);
        for (origin, w, h) in placed {
            let start = grid.vertex_at(root, origin).unwrap();
            let corners = [
                (Direction::Right, Point::new(origin.x + w - 1, origin.y)),
                (Direction::Down, Point::new(origin.x + w - 1, origin.y + h - 1)),
                (Direction::Left, Point::new(origin.x, origin.y + h - 1)),
                (Direction::Up, origin),
            ];
            let mut at = start;
            for (d, corner) in corners {
                let reached = walk_to(&grid, at, d, corner);
                prop_assert!(reached.is_some(), "room {}x{} at {} broken before {}", w, h, origin, corner);
                at = reached.unwrap();
            }
            prop_assert_eq!(at, start);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Every room outline closes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_room_outline_closes(rooms in rooms_strategy()) {
        let (grid, root) = build(Point::new(0, 0), &rooms);
        for &(w, h) in &rooms {
            let corners = [
                (Direction::Right, Point::new(w - 1, 0)),
                (Direction::Down, Point::new(w - 1, h - 1)),
                (Direction::Left, Point::new(0, h - 1)),
                (Direction::Up, Point::new(0, 0)),
            ];
            let mut at = root;
            for (d, corner) in corners {
                let reached = walk_to(&grid, at, d, corner);
                prop_assert!(reached.is_some(), "room {}x{} broken before {}", w, h, corner);
                at = reached.unwrap();
            }
            prop_assert_eq!(at, root);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Connect idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn connect_twice_equals_once(dx in 1i64..50, slot in 0usize..4) {
        let direction = Direction::from_index(slot);
        let mut grid = Grid::new();
        let a = grid.new_vertex(0, 0);
        let b = match direction {
            Direction::Up => grid.new_vertex(0, -dx),
            Direction::Left => grid.new_vertex(-dx, 0),
            Direction::Down => grid.new_vertex(0, dx),
            Direction::Right => grid.new_vertex(dx, 0),
        };
        grid.connect(direction, a, b);
        let once = (grid.vertex(a).clone(), grid.vertex(b).clone());
        grid.connect(direction, a, b);
        prop_assert_eq!(grid.vertex(a), &once.0);
        prop_assert_eq!(grid.vertex(b), &once.1);
        prop_assert!(grid.connection_exists(direction, a, b));
    }
}

// ── Fixed scenarios ─────────────────────────────────────────────────────

#[test]
fn test_crossing_vertex_has_four_neighbors() {
    let (grid, root) = build(Point::new(0, 0), &[(8, 4), (4, 8)]);
    let cross = grid.vertex_at(root, Point::new(3, 3)).unwrap();
    assert_eq!(grid.vertex(cross).degree(), 4);
}

#[test]
fn test_room_sharing_part_of_a_wall() {
    let mut grid = Grid::new();
    let root = grid.new_vertex(0, 0);
    grid.add_rectangle(root, 3, 3);
    grid.add_rectangle(root, 7, 5);
    let anchor = grid.vertex_at(root, Point::new(2, 0)).unwrap();
    grid.add_rectangle(anchor, 8, 5);
    assert_eq!(check_structure(&grid, root), Ok(()));

    let joint = grid.vertex_at(root, Point::new(2, 4)).unwrap();
    let right = grid.neighbor(joint, Direction::Right).unwrap();
    assert_eq!(grid.point(right), Point::new(6, 4));
    let far = grid.vertex_at(root, Point::new(9, 4)).unwrap();
    assert_eq!(grid.point(grid.neighbor(far, Direction::Left).unwrap()), Point::new(6, 4));
}

#[test]
fn test_edges_running_through_corners() {
    // Walls that pass straight through an existing corner, downward along
    // x = 10 and upward along x = 7.
    let mut grid = Grid::new();
    let root = grid.new_vertex(0, 0);
    grid.add_rectangle(root, 11, 6);
    grid.add_rectangle(root, 8, 3);
    let anchor = grid.vertex_at(root, Point::new(7, 0)).unwrap();
    grid.add_rectangle(anchor, 4, 9);
    let corner = grid.vertex_at(root, Point::new(10, 5)).unwrap();
    grid.add_rectangle(corner, 3, 6);
    let low = grid.vertex_at(root, Point::new(10, 8)).unwrap();
    grid.add_rectangle(low, 2, 2);
    assert_eq!(check_structure(&grid, root), Ok(()));

    let bottom = grid.vertex_at(root, Point::new(10, 10)).unwrap();
    let mut up = vec![grid.point(bottom)];
    let mut at = bottom;
    while let Some(next) = grid.neighbor(at, Direction::Up) {
        up.push(grid.point(next));
        at = next;
    }
    assert_eq!(
        up,
        vec![Point::new(10, 10), Point::new(10, 9), Point::new(10, 8), Point::new(10, 5), Point::new(10, 0)]
    );
}

#[test]
fn test_growing_rooms_never_shrink_the_grid() {
    let mut grid = Grid::new();
    let root = grid.new_vertex(0, 0);
    let mut last = grid.len();
    for (w, h) in [(5, 5), (9, 3), (3, 9), (12, 12), (7, 7)] {
        grid.add_rectangle(root, w, h);
        assert!(grid.len() >= last);
        last = grid.len();
    }
    assert_eq!(grid.reachable_count(root), grid.len());
}
