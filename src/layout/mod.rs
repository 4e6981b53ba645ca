//! Layout descriptors and plan replay.
//!
//! `build` is the generator side of the pipeline: it issues one
//! `add_rectangle` per plan step against a fresh grid and pairs the root with
//! the canvas size the renderer should paint.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::grid::{BoundsSeed, Grid, VertexId};
use crate::parsers::Plan;

/// A root vertex plus the declared canvas size, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDescriptor {
    pub root: VertexId,
    pub width: usize,
    pub height: usize,
}

impl LayoutDescriptor {
    pub fn new(root: VertexId, width: usize, height: usize) -> Self {
        Self { root, width, height }
    }
}

/// A built grid together with how to render it.
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: Grid,
    pub descriptor: LayoutDescriptor,
}

/// Replay `plan` against a new grid.
///
/// Without a declared canvas the size is taken from the grid bounds under
/// `seed`: `max + 1` along each axis, so every non-negative vertex fits.
pub fn build(plan: &Plan, seed: BoundsSeed) -> Result<Layout> {
    let mut grid = Grid::new();
    let root = grid.add_vertex(plan.root);

    for step in &plan.rects {
        let anchor = match step.anchor {
            None => root,
            Some(point) => grid
                .vertex_at(root, point)
                .ok_or(Error::UnknownAnchor { x: point.x, y: point.y })?,
        };
        debug!(line = step.line, width = step.width, height = step.height, "plan step");
        grid.add_rectangle(anchor, step.width, step.height);
    }

    let (width, height) = match plan.canvas {
        Some(size) => size,
        None => {
            let bounds = grid.compute_bounds_seeded(root, seed);
            let extent = |max: i64| usize::try_from(max.saturating_add(1)).unwrap_or(0);
            (extent(bounds.max_x), extent(bounds.max_y))
        }
    };

    info!(
        rects = plan.rects.len(),
        vertices = grid.reachable_count(root),
        width,
        height,
        "layout built"
    );

    Ok(Layout {
        grid,
        descriptor: LayoutDescriptor::new(root, width, height),
    })
}
