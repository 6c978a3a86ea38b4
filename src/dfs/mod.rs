//! Depth-first algorithms over the [`Graph`](crate::graph::Graph) surface.
//!
//! Everything here is layered on one three-color walk:
//! - `walker`: the engine and [`traverse`]
//! - `visitor`: the callback protocol driven by the walk
//! - `search`: path reconstruction between two vertices
//! - `toposort`: finish-order topological sort with cycle detection
//! - `sources`: zero in-degree discovery
//!
//! Colors and stacks are allocated per call. The only way to stop a walk early
//! is a visitor callback returning `ControlFlow::Break`.

pub mod search;
pub mod sources;
pub mod toposort;
pub mod visitor;
pub mod walker;

pub use search::search;
#[cfg(feature = "parallel")]
pub use sources::par_find_sources;
pub use sources::find_sources;
pub use toposort::toposort;
pub use visitor::{Callbacks, Visitor};
pub use walker::{traverse, Roots};
