//! Incidence and degree helpers built purely on the enumeration surface.

use core::ops::ControlFlow;

use crate::graph::edge::Edge;
use crate::graph::traits::{DirectedGraph, Graph, Step, Vertex};

/// Calls `f` once per arc leaving or entering `vertex`.
///
/// Outgoing arcs are reported first, then incoming ones. Both enumerations
/// go through a single interposing callback that latches termination: once
/// `f` returns `Break`, nothing more is reported. A self loop shows up in
/// both enumerations and is reported once.
pub fn each_edge_incident_to_directed<V, G, F>(graph: &G, vertex: &V, mut f: F)
where
    V: Vertex,
    G: DirectedGraph<V> + ?Sized,
    F: FnMut(Edge<V, G::Payload>) -> Step,
{
    if !graph.has_vertex(vertex) {
        return;
    }

    let mut terminate = false;
    let mut interloper = |edge: Edge<V, G::Payload>| {
        terminate = terminate || f(edge).is_break();
        if terminate {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    };

    graph.each_arc_from(vertex, &mut interloper);
    graph.each_arc_to(vertex, |edge| {
        if edge.is_loop() {
            return ControlFlow::Continue(());
        }
        interloper(edge)
    });
}

/// In-degree of `vertex` by a full edge scan.
///
/// Returns `None` when the vertex is absent, which distinguishes it from an
/// in-degree of zero. Only meaningful for directed graphs.
pub fn in_degree_of<V, G>(graph: &G, vertex: &V) -> Option<usize>
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    if !graph.has_vertex(vertex) {
        return None;
    }

    let mut degree = 0;
    graph.each_edge(|edge| {
        if edge.target() == vertex {
            degree += 1;
        }
        ControlFlow::Continue(())
    });
    Some(degree)
}
