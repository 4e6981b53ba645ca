//! Configuration for building and rendering a layout.

use crate::grid::BoundsSeed;
use crate::renderers::charset::CharSet;

/// Glyph painted for vertices whose neighbor pattern has no junction shape.
pub const DEFAULT_PLACEHOLDER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Unicode box-drawing characters or plain ASCII.
    pub charset: CharSet,
    /// Glyph for isolated vertices and dead ends.
    pub placeholder: char,
    /// Strip trailing spaces from each output row.
    pub trim_trailing: bool,
    /// Seed for the bounds used to size canvases that declare no size.
    pub bounds_seed: BoundsSeed,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            charset: CharSet::Unicode,
            placeholder: DEFAULT_PLACEHOLDER,
            trim_trailing: false,
            bounds_seed: BoundsSeed::Origin,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_charset(mut self, charset: CharSet) -> Self {
        self.charset = charset;
        self
    }

    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_trim_trailing(mut self, trim: bool) -> Self {
        self.trim_trailing = trim;
        self
    }

    pub fn with_bounds_seed(mut self, seed: BoundsSeed) -> Self {
        self.bounds_seed = seed;
        self
    }
}
