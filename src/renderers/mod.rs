//! Renderer trait and the box-drawing layout printer.

pub mod canvas;
pub mod charset;
pub mod printer;

pub use canvas::Canvas;
pub use charset::CharSet;
pub use printer::LayoutPrinter;

use crate::grid::Grid;
use crate::layout::LayoutDescriptor;

/// Trait for layout renderers.
pub trait Renderer {
    /// Render the grid reachable from the layout's root to a string.
    fn render(&self, grid: &Grid, layout: &LayoutDescriptor) -> String;
}
