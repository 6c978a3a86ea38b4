//! The enumeration surface every algorithm in this crate runs through.
//!
//! Enumeration is callback-driven: each visiting function returns a
//! [`Step`], and `ControlFlow::Break` stops the enumeration immediately.
//! Neighbor and edge order is unspecified.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::ControlFlow;

use crate::graph::edge::{Edge, EdgePayload};

/// Result of a visiting callback: `Continue(())` to keep going, `Break(())` to stop.
pub type Step = ControlFlow<()>;

/// An opaque, equality-comparable vertex identifier.
///
/// Implemented for every `Clone + Eq + Hash + Debug` type.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// Anything that can enumerate its vertices and edges.
///
/// This is the minimal surface required to convert a graph into an
/// adjacency list.
pub trait GraphSource<V: Vertex> {
    /// Payload carried by every edge of this graph.
    type Payload: EdgePayload;

    /// Calls `f` once per vertex until it returns `Break`.
    fn each_vertex<F>(&self, f: F)
    where
        F: FnMut(&V) -> Step;

    /// Calls `f` once per edge until it returns `Break`.
    ///
    /// Undirected graphs report each edge once, in an unspecified orientation.
    fn each_edge<F>(&self, f: F)
    where
        F: FnMut(Edge<V, Self::Payload>) -> Step;

    /// Number of vertices.
    fn order(&self) -> usize;
}

/// A graph the depth-first algorithms can walk.
pub trait Graph<V: Vertex>: GraphSource<V> {
    /// Returns `true` if `vertex` is part of the graph.
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns `true` for directed graphs.
    fn is_directed(&self) -> bool;

    /// Calls `f` once per vertex reachable over a single outgoing edge.
    fn each_adjacent_to<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(&V) -> Step;

    /// Calls `f` once per outgoing edge of `vertex`, oriented `vertex -> other`.
    ///
    /// For undirected graphs every incident edge is outgoing.
    fn each_edge_from<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(Edge<V, Self::Payload>) -> Step;

    /// Calls `f` once per edge touching `vertex`, in either direction.
    fn each_edge_incident_to<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(Edge<V, Self::Payload>) -> Step;

    /// Number of edges.
    fn size(&self) -> usize {
        let mut size = 0;
        self.each_edge(|_| {
            size += 1;
            ControlFlow::Continue(())
        });
        size
    }
}

/// A graph whose edges have a direction (arcs).
pub trait DirectedGraph<V: Vertex>: Graph<V> {
    /// Calls `f` once per arc leaving `vertex`.
    fn each_arc_from<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(Edge<V, Self::Payload>) -> Step;

    /// Calls `f` once per arc entering `vertex`.
    fn each_arc_to<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(Edge<V, Self::Payload>) -> Step;

    /// Number of arcs entering `vertex`, or `None` if it is not in the graph.
    fn in_degree_of(&self, vertex: &V) -> Option<usize>;

    /// Number of arcs leaving `vertex`, or `None` if it is not in the graph.
    fn out_degree_of(&self, vertex: &V) -> Option<usize>;
}
