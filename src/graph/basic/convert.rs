//! Conversion from any [`GraphSource`] into an adjacency-list graph.
//!
//! The destination's payload kind is fixed by its type parameter, one of the
//! four sealed [`EdgePayload`] kinds. Every source payload is lifted into
//! [`PayloadData`](crate::graph::edge::PayloadData) and lowered into the
//! destination kind: same kind copies verbatim, any other kind yields the
//! destination's default (`0.0`, `""`, `Value::Null`).

use core::ops::ControlFlow;

use crate::graph::basic::adjacency_graph::AdjacencyListGraph;
use crate::graph::edge::EdgePayload;
use crate::graph::traits::{EdgeType, GraphSource, Vertex};

/// Copies every edge and vertex of `from` into `to` and returns it.
///
/// Vertices with no incident edge are copied too: if the edge pass leaves
/// `to` with a different order than `from`, every source vertex is ensured.
/// Copying into an undirected destination stores both orientations.
pub fn functor_to_adjacency_list<V, S, P, D>(
    from: &S,
    mut to: AdjacencyListGraph<V, P, D>,
) -> AdjacencyListGraph<V, P, D>
where
    V: Vertex,
    S: GraphSource<V>,
    P: EdgePayload,
    D: EdgeType,
{
    from.each_edge(|edge| {
        to.add_edge(edge.map_payload(|payload| P::from_data(payload.into_data())));
        ControlFlow::Continue(())
    });

    if to.order() != from.order() {
        from.each_vertex(|vertex| {
            to.ensure_vertex(vertex.clone());
            ControlFlow::Continue(())
        });
    }

    trace_event!(
        debug,
        kind = ?P::KIND,
        directed = D::is_directed(),
        order = to.order(),
        size = to.edge_count(),
        "copied graph source into adjacency list"
    );
    to
}
