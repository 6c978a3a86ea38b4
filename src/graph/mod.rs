//! Graph surface and adjacency-list storage.
//!
//! Organized into:
//! - `traits`: the enumeration contract consumed by the algorithms
//! - `edge`: edges and the closed set of payload kinds
//! - `access`: per-traversal color state
//! - `basic`: adjacency-list representation, conversion and incidence helpers

pub mod access;
pub mod basic;
pub mod edge;
pub mod traits;

pub use access::{Color, ColorMap};
pub use basic::{AdjacencyListGraph, AdjacencyMap};
pub use edge::{BaseEdge, DataEdge, Edge, EdgePayload, LabeledEdge, PayloadData, PayloadKind, WeightedEdge};
pub use traits::{Directed, DirectedGraph, EdgeType, Graph, GraphSource, Step, Undirected, Vertex};
