//! # `tricolor` - Adjacency-List Graphs and Depth-First Algorithms
//!
//! An in-memory graph toolkit built around a three-color depth-first walk:
//! path search, visitor-driven traversal, topological sort and source
//! discovery, running uniformly over adjacency-list graphs that carry one of
//! four edge payload kinds.
//!
//! ## Architecture
//!
//! The crate is stratified the same way from the leaves up:
//!
//! 1. **Working storage** (`collections`):
//!    - `VertexStack` / `VertexQueue`: singly linked LIFO/FIFO containers
//!    - popping an empty container yields `None`, never a panic
//!
//! 2. **Graph surface** (`graph`):
//!    - `GraphSource`, `Graph`, `DirectedGraph`: the enumeration contract the
//!      algorithms consume
//!    - `Edge<V, P>` with the closed payload set `()`, `f64`, `String`,
//!      `serde_json::Value`
//!    - `AdjacencyListGraph`: the concrete directed/undirected storage,
//!      plus conversion from any `GraphSource`
//!
//! 3. **Algorithms** (`dfs`):
//!    - `traverse`: three-color walk driving a `Visitor`
//!    - `search`, `toposort`, `find_sources` layered on the same walk
//!
//! ### Invariants
//!
//! **Call-scoped color state**: every walk allocates its own `ColorMap`;
//! nothing is stored on the graph, so independent walks over distinct graphs
//! never interfere.
//!
//! **Closed payload set**: the destination of a conversion is one of exactly
//! four encodings, selected by type. An unrecognized encoding cannot be named.
//!
//! ## Example
//!
//! ```rust
//! use tricolor::{toposort, Edge, DirectedAdjacencyGraph};
//!
//! let mut g = DirectedAdjacencyGraph::new();
//! g.add_edges([
//!     Edge::plain("foo", "bar"),
//!     Edge::plain("bar", "baz"),
//!     Edge::plain("baz", "qux"),
//! ]);
//!
//! let order = toposort(&g, &["foo"]).unwrap();
//! assert_eq!(order, vec!["qux", "baz", "bar", "foo"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing` event when the `tracing` feature is enabled; expands to
/// nothing otherwise.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!($($arg)+);
        }
    };
}

pub mod collections;
pub mod dfs;
pub mod error;
pub mod graph;

pub use collections::{VertexQueue, VertexStack};
pub use dfs::{find_sources, search, toposort, traverse, Callbacks, Roots, Visitor};
#[cfg(feature = "parallel")]
pub use dfs::par_find_sources;
pub use error::TraversalError;
pub use graph::basic::{
    functor_to_adjacency_list, AdjacencyListGraph, AdjacencyMap, DataDigraph,
    DirectedAdjacencyGraph, LabeledDigraph, UndirectedAdjacencyGraph, UndirectedDataGraph,
    UndirectedLabeledGraph, UndirectedWeightedGraph, WeightedDigraph,
};
pub use graph::{
    BaseEdge, Color, ColorMap, DataEdge, Directed, DirectedGraph, Edge, EdgePayload, EdgeType,
    Graph, GraphSource, LabeledEdge, PayloadData, PayloadKind, Step, Undirected, Vertex,
    WeightedEdge,
};

// The stack is one owning link plus a length.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<VertexStack<u64>>() == mem::size_of::<usize>() * 2);
    assert!(mem::size_of::<Color>() == 1);
};
