//! Box-drawing renderer for room-outline grids.
//!
//! Vertex `x` maps to canvas column `2x` and `y` to row `y`; the odd
//! columns between carry horizontal edges. Painting is two walks, each with
//! its own visited set: first every edge, then every vertex glyph on top.

use tracing::debug;

use super::Renderer;
use super::canvas::Canvas;
use super::charset::{Arms, BoxChars};
use crate::config::RenderConfig;
use crate::grid::{Grid, VertexId};
use crate::layout::LayoutDescriptor;

/// Canvas column of grid column `x`.
fn column(x: i64) -> i64 {
    x.saturating_mul(2)
}

/// Renders a grid to text using box-drawing characters.
pub struct LayoutPrinter {
    pub config: RenderConfig,
}

impl LayoutPrinter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Paint `layout` onto a fresh `height` × `2 * width - 1` canvas.
    pub fn paint(&self, grid: &Grid, layout: &LayoutDescriptor) -> Canvas {
        let columns = layout.width.saturating_mul(2).saturating_sub(1);
        let mut canvas = Canvas::new(columns, layout.height);
        let chars = BoxChars::for_charset(self.config.charset);

        self.draw_edges(&mut canvas, &chars, grid, layout.root);
        self.draw_junctions(&mut canvas, &chars, grid, layout.root);

        debug!(
            columns,
            rows = layout.height,
            vertices = grid.reachable_count(layout.root),
            "layout painted"
        );
        canvas
    }

    fn draw_edges(&self, canvas: &mut Canvas, chars: &BoxChars, grid: &Grid, root: VertexId) {
        for id in grid.preorder(root) {
            let from = grid.point(id);
            for (direction, next) in grid.vertex(id).edges() {
                let to = grid.point(next);
                if direction.is_vertical() {
                    canvas.vline_between(column(from.x), from.y, to.y, chars.vertical);
                } else {
                    canvas.hline_between(from.y, column(from.x), column(to.x), chars.horizontal);
                }
            }
        }
    }

    fn draw_junctions(&self, canvas: &mut Canvas, chars: &BoxChars, grid: &Grid, root: VertexId) {
        for id in grid.preorder(root) {
            let vertex = grid.vertex(id);
            let glyph = match Arms::of(vertex).junction() {
                Some(junction) => chars.glyph(junction),
                None => self.config.placeholder,
            };
            canvas.set(column(vertex.x()), vertex.y(), glyph);
        }
    }
}

impl Default for LayoutPrinter {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Renderer for LayoutPrinter {
    fn render(&self, grid: &Grid, layout: &LayoutDescriptor) -> String {
        self.paint(grid, layout)
            .render_to_string(self.config.trim_trailing)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
