//! Text front ends that describe layouts.

pub mod plan;

pub use plan::{Plan, RectStep, parse};
