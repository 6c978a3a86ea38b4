//! Zero in-degree vertex discovery.

use core::ops::ControlFlow;
use std::collections::HashSet;

use crate::graph::traits::{DirectedGraph, Graph, Vertex};

/// Returns every vertex with in-degree zero.
///
/// Only directed graphs have sources; the bound makes calling this on an
/// undirected graph a compile error. An empty graph has no sources.
pub fn find_sources<V, G>(graph: &G) -> HashSet<V>
where
    V: Vertex,
    G: DirectedGraph<V>,
{
    let mut sources = HashSet::new();
    graph.each_vertex(|v| {
        if graph.in_degree_of(v) == Some(0) {
            sources.insert(v.clone());
        }
        ControlFlow::Continue(())
    });
    trace_event!(trace, count = sources.len(), "sources found");
    sources
}

/// Parallel version of [`find_sources`].
///
/// Vertices are collected first; in-degrees are then queried concurrently.
#[cfg(feature = "parallel")]
pub fn par_find_sources<V, G>(graph: &G) -> HashSet<V>
where
    V: Vertex + Send + Sync,
    G: DirectedGraph<V> + Sync,
{
    use rayon::prelude::*;

    let mut vertices = Vec::with_capacity(graph.order());
    graph.each_vertex(|v| {
        vertices.push(v.clone());
        ControlFlow::Continue(())
    });

    vertices
        .into_par_iter()
        .filter(|v| graph.in_degree_of(v) == Some(0))
        .collect()
}

/// Zero in-degree vertices in enumeration order, computed in one edge pass.
///
/// Used for unseeded toposort, where only the graph surface is available.
pub(crate) fn collect_sources<V, G>(graph: &G) -> Vec<V>
where
    V: Vertex,
    G: Graph<V>,
{
    let mut entered: HashSet<V> = HashSet::with_capacity(graph.order());
    graph.each_edge(|edge| {
        entered.insert(edge.target);
        ControlFlow::Continue(())
    });

    let mut sources = Vec::new();
    graph.each_vertex(|v| {
        if !entered.contains(v) {
            sources.push(v.clone());
        }
        ControlFlow::Continue(())
    });
    sources
}
