//! Topological sort from depth-first finish order.
//!
//! A vertex is appended to the ordering exactly when it turns black, so every
//! vertex appears after all of its descendants. The result lists sinks first;
//! reverse it for a sources-first schedule.

use core::ops::ControlFlow;

use crate::dfs::sources::collect_sources;
use crate::dfs::visitor::Visitor;
use crate::dfs::walker::Walker;
use crate::error::TraversalError;
use crate::graph::traits::{Graph, Step, Vertex};

struct TopoVisitor<V> {
    /// Back edges only signal cycles on directed graphs; on undirected graphs
    /// the edge back to the parent is an artifact of the walk.
    directed: bool,
    order: Vec<V>,
    cycle: bool,
}

impl<V: Vertex, P> Visitor<V, P> for TopoVisitor<V> {
    fn on_back_edge(&mut self, _vertex: &V) -> Step {
        if self.directed {
            self.cycle = true;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn on_finish_vertex(&mut self, vertex: &V) -> Step {
        self.order.push(vertex.clone());
        ControlFlow::Continue(())
    }
}

/// Topologically sorts the vertices reachable from `sources`.
///
/// With no `sources`, a directed graph is walked from all of its zero
/// in-degree vertices first and then from every vertex still undiscovered,
/// so the ordering covers the whole graph and a cycle anywhere is reported.
/// The ordering is the walk's finish order.
///
/// # Errors
/// - [`TraversalError::CycleDetected`] if the graph is directed and a back
///   edge is observed
/// - [`TraversalError::NoSources`] if the graph is undirected and `sources` is empty
/// - [`TraversalError::StartVertexNotFound`] if a given source is not in the graph
pub fn toposort<V, G>(graph: &G, sources: &[V]) -> Result<Vec<V>, TraversalError>
where
    V: Vertex,
    G: Graph<V>,
{
    let directed = graph.is_directed();

    let roots = if sources.is_empty() {
        if !directed {
            return Err(TraversalError::NoSources);
        }
        let mut roots = collect_sources(graph);
        trace_event!(trace, sources = roots.len(), "unseeded toposort");
        roots.reserve(graph.order());
        graph.each_vertex(|v| {
            roots.push(v.clone());
            ControlFlow::Continue(())
        });
        roots
    } else {
        if let Some(missing) = sources.iter().find(|v| !graph.has_vertex(v)) {
            return Err(TraversalError::start_vertex(missing));
        }
        sources.to_vec()
    };

    let mut visitor = TopoVisitor {
        directed,
        order: Vec::with_capacity(graph.order()),
        cycle: false,
    };
    let stopped = Walker::new(graph, &mut visitor).walk(&roots).is_break();
    debug_assert_eq!(stopped, visitor.cycle, "only a directed back edge stops the sort");

    if visitor.cycle {
        trace_event!(debug, finished = visitor.order.len(), "cycle detected");
        return Err(TraversalError::CycleDetected);
    }
    Ok(visitor.order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::basic::{DirectedAdjacencyGraph, UndirectedAdjacencyGraph};
    use crate::graph::edge::Edge;

    const NONE: &[&str] = &[];

    fn chain() -> [Edge<&'static str>; 3] {
        [
            Edge::plain("foo", "bar"),
            Edge::plain("bar", "baz"),
            Edge::plain("baz", "qux"),
        ]
    }

    #[test]
    fn directed_chain_in_finish_order() {
        let mut g: DirectedAdjacencyGraph<_> = chain().into_iter().collect();
        assert_eq!(toposort(&g, &["foo"]).unwrap(), vec!["qux", "baz", "bar", "foo"]);
        assert_eq!(toposort(&g, NONE).unwrap(), vec!["qux", "baz", "bar", "foo"]);

        g.add_edge(Edge::plain("bar", "foo"));
        assert_eq!(toposort(&g, &["foo"]), Err(TraversalError::CycleDetected));
    }

    #[test]
    fn fully_cyclic_graph_has_no_sources() {
        let g: DirectedAdjacencyGraph<u8> = [Edge::plain(1, 2), Edge::plain(2, 1)].into_iter().collect();
        assert_eq!(toposort(&g, &[] as &[u8]), Err(TraversalError::CycleDetected));

        let empty = DirectedAdjacencyGraph::<u8>::new();
        assert_eq!(toposort(&empty, &[] as &[u8]), Ok(vec![]));
    }

    #[test]
    fn unrelated_sources_do_not_hide_a_cycle() {
        let mut g: DirectedAdjacencyGraph<u8> = [Edge::plain(1, 2), Edge::plain(2, 1)].into_iter().collect();
        g.ensure_vertex(3);
        assert_eq!(toposort(&g, &[] as &[u8]), Err(TraversalError::CycleDetected));

        g.add_edge(Edge::plain(4, 5));
        assert_eq!(toposort(&g, &[] as &[u8]), Err(TraversalError::CycleDetected));

        // Seeded runs only cover what the seeds reach.
        let mut order = toposort(&g, &[3, 4]).unwrap();
        order.sort_unstable();
        assert_eq!(order, vec![3, 4, 5]);

        g.remove_edge(&2, &1);
        let order = toposort(&g, &[] as &[u8]).unwrap();
        assert_eq!(order.len(), 5);
    }

    #[test]
    fn undirected_needs_sources_and_never_cycles() {
        let mut ug: UndirectedAdjacencyGraph<_> = chain().into_iter().collect();
        assert_eq!(toposort(&ug, NONE), Err(TraversalError::NoSources));
        assert_eq!(toposort(&ug, &["foo"]).unwrap(), vec!["qux", "baz", "bar", "foo"]);

        // Closing a real undirected cycle is still not reported.
        ug.add_edge(Edge::plain("qux", "foo"));
        assert_eq!(toposort(&ug, &["foo"]).unwrap().len(), 4);
    }

    #[test]
    fn every_edge_points_backwards_in_the_ordering() {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3 ; 4 -> 2
        let g: DirectedAdjacencyGraph<u32> = [
            Edge::plain(0, 1),
            Edge::plain(0, 2),
            Edge::plain(1, 3),
            Edge::plain(2, 3),
            Edge::plain(4, 2),
        ]
        .into_iter()
        .collect();

        let order = toposort(&g, &[] as &[u32]).unwrap();
        assert_eq!(order.len(), 5);
        let pos = |v: u32| order.iter().position(|&x| x == v).unwrap();
        for (u, v) in [(0, 1), (0, 2), (1, 3), (2, 3), (4, 2)] {
            assert!(pos(v) < pos(u), "{u}->{v} out of order in {order:?}");
        }
    }

    #[test]
    fn missing_source_is_a_precondition_error() {
        let g: DirectedAdjacencyGraph<_> = chain().into_iter().collect();
        let err = toposort(&g, &["nope"]).unwrap_err();
        assert!(err.is_precondition());
    }
}
