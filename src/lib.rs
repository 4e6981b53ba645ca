//! room-grid — planar room-outline grid graphs rendered with box-drawing text.
//!
//! Rooms are axis-aligned rectangles stitched into one planar grid graph.
//! Each insertion keeps the graph consistent: adjacency stays bidirectional,
//! runs stay ordered, and crossings get their own vertices.
//!
//! Public API: `render_plan()` for the one-shot pipeline, plus the modules:
//!   grid       — Grid arena, insertion engine, traversal, bounds, petgraph view
//!   renderers  — Canvas, CharSet, LayoutPrinter
//!   parsers    — layout plan text format
//!   layout     — LayoutDescriptor and plan replay
//!   config     — RenderConfig

pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod parsers;
pub mod renderers;

pub use config::RenderConfig;
pub use error::{Error, Result};
pub use grid::{Direction, Grid, Point, VertexId};
pub use layout::{Layout, LayoutDescriptor};
pub use renderers::{LayoutPrinter, Renderer};

/// Parse a layout plan, build its grid, and render it to text.
pub fn render_plan(src: &str, config: &RenderConfig) -> Result<String> {
    let plan = parsers::parse(src)?;
    let layout = layout::build(&plan, config.bounds_seed)?;
    let printer = LayoutPrinter::new(config.clone());
    Ok(printer.render(&layout.grid, &layout.descriptor))
}
