//! Per-traversal vertex state.
//!
//! Traversal state is never stored on the graph; each walk owns its own map.

pub mod color;

pub use color::{Color, ColorMap};
