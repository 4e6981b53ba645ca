//! Planar grid graph of merged room outlines.
//!
//! - `geometry`: Direction/Axis algebra and ordering predicates
//! - `vertex`:   Vertex and VertexId
//! - `graph`:    Grid arena and the connect primitive
//! - `insert`:   insertion engine and `add_rectangle`
//! - `traverse`: visited-set-guarded walks and searches
//! - `bounds`:   bounding box
//! - `export`:   petgraph view

pub mod bounds;
pub mod export;
pub mod geometry;
pub mod graph;
pub mod insert;
pub mod traverse;
pub mod vertex;

pub use bounds::{Bounds, BoundsSeed};
pub use export::GridGraph;
pub use geometry::{Axis, Direction, Point, is_ahead, is_behind, lies_between, within_open_range};
pub use graph::Grid;
pub use traverse::{DepthFirst, Visit};
pub use vertex::{Vertex, VertexId};
