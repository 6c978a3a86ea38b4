//! Directed and undirected graphs backed by an [`AdjacencyMap`].
//!
//! `AdjacencyListGraph<V, P, D>` is parameterized by the vertex type, the
//! edge payload kind and the direction marker:
//! - directed graphs store each arc once under its source
//! - undirected graphs store each edge under both endpoints (a self loop once)
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(1)\) expected | Two inserts when undirected |
//! | `remove_vertex` | \(O(n)\) | Scans every neighbor map |
//! | `each_arc_from` | \(O(\text{out-degree})\) | |
//! | `each_arc_to` | \(O(n \cdot \text{deg})\) | Predecessor scan |
//! | `in_degree_of` | \(O(m)\) | Full edge scan |
//! | `out_degree_of` | \(O(1)\) | `HashMap::len` |

use core::marker::PhantomData;
use core::ops::ControlFlow;
use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::graph::basic::adj_list::AdjacencyMap;
use crate::graph::basic::incidence::{each_edge_incident_to_directed, in_degree_of};
use crate::graph::edge::{Edge, EdgePayload};
use crate::graph::traits::{Directed, DirectedGraph, EdgeType, Graph, GraphSource, Step, Undirected, Vertex};

/// An adjacency-list graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize + Eq + Hash, P: Serialize",
    deserialize = "V: Deserialize<'de> + Eq + Hash + Clone, P: Deserialize<'de>"
))]
pub struct AdjacencyListGraph<V, P = (), D = Directed> {
    adjacency: AdjacencyMap<V, P>,
    #[serde(skip)]
    direction: PhantomData<D>,
}

/// Directed graph with plain edges.
pub type DirectedAdjacencyGraph<V> = AdjacencyListGraph<V, (), Directed>;
/// Undirected graph with plain edges.
pub type UndirectedAdjacencyGraph<V> = AdjacencyListGraph<V, (), Undirected>;
/// Directed graph with `f64` weights.
pub type WeightedDigraph<V> = AdjacencyListGraph<V, f64, Directed>;
/// Directed graph with `String` labels.
pub type LabeledDigraph<V> = AdjacencyListGraph<V, String, Directed>;
/// Directed graph with `serde_json::Value` data.
pub type DataDigraph<V> = AdjacencyListGraph<V, Value, Directed>;
/// Undirected graph with `f64` weights.
pub type UndirectedWeightedGraph<V> = AdjacencyListGraph<V, f64, Undirected>;
/// Undirected graph with `String` labels.
pub type UndirectedLabeledGraph<V> = AdjacencyListGraph<V, String, Undirected>;
/// Undirected graph with `serde_json::Value` data.
pub type UndirectedDataGraph<V> = AdjacencyListGraph<V, Value, Undirected>;

impl<V: Vertex, P: EdgePayload, D: EdgeType> AdjacencyListGraph<V, P, D> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: AdjacencyMap::new(),
            direction: PhantomData,
        }
    }

    /// Creates an empty graph sized for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: AdjacencyMap::with_capacity(vertices),
            direction: PhantomData,
        }
    }

    /// Builds a graph by copying every vertex and edge of `source`.
    ///
    /// Payloads of another kind are replaced by this graph's default payload.
    pub fn from_source<S: GraphSource<V>>(source: &S) -> Self {
        super::convert::functor_to_adjacency_list(source, Self::new())
    }

    /// Adds `vertex` if absent. Returns `true` if it was inserted.
    pub fn ensure_vertex(&mut self, vertex: V) -> bool {
        self.adjacency.ensure_vertex(vertex)
    }

    /// Adds an edge, ensuring both endpoints.
    ///
    /// Re-adding an existing edge overwrites its payload.
    pub fn add_edge(&mut self, edge: Edge<V, P>) {
        let Edge {
            source,
            target,
            payload,
        } = edge;
        if !D::is_directed() && source != target {
            self.adjacency.insert_arc(target.clone(), source.clone(), payload.clone());
        }
        self.adjacency.insert_arc(source, target, payload);
    }

    /// Adds every edge of `edges`.
    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = Edge<V, P>>,
    {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Removes the edge `source -> target` (either orientation when undirected).
    ///
    /// Returns `true` if an edge was removed.
    pub fn remove_edge(&mut self, source: &V, target: &V) -> bool {
        let removed = self.adjacency.remove_arc(source, target).is_some();
        if !D::is_directed() && source != target {
            self.adjacency.remove_arc(target, source);
        }
        removed
    }

    /// Removes `vertex` and every edge touching it.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        self.adjacency.remove_vertex(vertex)
    }

    /// Returns `true` if the edge `source -> target` exists.
    pub fn has_edge(&self, source: &V, target: &V) -> bool {
        self.adjacency.payload(source, target).is_some()
    }

    /// Payload of the edge `source -> target`.
    pub fn payload(&self, source: &V, target: &V) -> Option<&P> {
        self.adjacency.payload(source, target)
    }

    /// Edge density: `size / max_size`, where `max_size` is `n(n-1)` for
    /// directed and `n(n-1)/2` for undirected graphs.
    ///
    /// Returns `0.0` for graphs with fewer than two vertices.
    #[allow(clippy::cast_precision_loss)]
    pub fn density(&self) -> f64 {
        let n = self.order();
        if n < 2 {
            return 0.0;
        }
        let mut max = (n * (n - 1)) as f64;
        if !D::is_directed() {
            max /= 2.0;
        }
        self.edge_count() as f64 / max
    }

    /// Number of edges, counting each undirected edge once.
    pub fn edge_count(&self) -> usize {
        let arcs = self.adjacency.arc_count();
        if D::is_directed() {
            return arcs;
        }
        let loops = self
            .adjacency
            .iter()
            .filter(|(v, adjacent)| adjacent.contains_key(*v))
            .count();
        (arcs + loops) / 2
    }

    /// The underlying adjacency map.
    pub fn adjacency(&self) -> &AdjacencyMap<V, P> {
        &self.adjacency
    }

    fn each_stored_arc<F>(&self, vertex: &V, mut f: F)
    where
        F: FnMut(Edge<V, P>) -> Step,
    {
        let Some(adjacent) = self.adjacency.neighbors(vertex) else {
            return;
        };
        for (target, payload) in adjacent {
            if f(Edge::new(vertex.clone(), target.clone(), payload.clone())).is_break() {
                return;
            }
        }
    }
}

impl<V: Vertex, P: EdgePayload> AdjacencyListGraph<V, P, Directed> {
    /// Returns a graph with every arc reversed. Isolated vertices are kept.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::with_capacity(self.order());
        for (source, adjacent) in self.adjacency.iter() {
            transposed.ensure_vertex(source.clone());
            for (target, payload) in adjacent {
                transposed
                    .adjacency
                    .insert_arc(target.clone(), source.clone(), payload.clone());
            }
        }
        transposed
    }
}

impl<V: Vertex, P: EdgePayload, D: EdgeType> Default for AdjacencyListGraph<V, P, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, P: EdgePayload, D: EdgeType> Extend<Edge<V, P>> for AdjacencyListGraph<V, P, D> {
    fn extend<I: IntoIterator<Item = Edge<V, P>>>(&mut self, iter: I) {
        self.add_edges(iter);
    }
}

impl<V: Vertex, P: EdgePayload, D: EdgeType> FromIterator<Edge<V, P>> for AdjacencyListGraph<V, P, D> {
    fn from_iter<I: IntoIterator<Item = Edge<V, P>>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.add_edges(iter);
        graph
    }
}

impl<V: Vertex, P: EdgePayload + PartialEq, D> PartialEq for AdjacencyListGraph<V, P, D> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<V: Vertex, P: EdgePayload, D: EdgeType> GraphSource<V> for AdjacencyListGraph<V, P, D> {
    type Payload = P;

    fn each_vertex<F>(&self, mut f: F)
    where
        F: FnMut(&V) -> Step,
    {
        for vertex in self.adjacency.vertices() {
            if f(vertex).is_break() {
                return;
            }
        }
    }

    fn each_edge<F>(&self, mut f: F)
    where
        F: FnMut(Edge<V, P>) -> Step,
    {
        if D::is_directed() {
            for (source, adjacent) in self.adjacency.iter() {
                for (target, payload) in adjacent {
                    if f(Edge::new(source.clone(), target.clone(), payload.clone())).is_break() {
                        return;
                    }
                }
            }
            return;
        }

        // Both orientations are stored; report whichever is met first.
        let mut reported: HashSet<(&V, &V)> = HashSet::new();
        for (source, adjacent) in self.adjacency.iter() {
            for (target, payload) in adjacent {
                if reported.contains(&(target, source)) {
                    continue;
                }
                reported.insert((source, target));
                if f(Edge::new(source.clone(), target.clone(), payload.clone())).is_break() {
                    return;
                }
            }
        }
    }

    fn order(&self) -> usize {
        self.adjacency.order()
    }
}

impl<V: Vertex, P: EdgePayload> Graph<V> for AdjacencyListGraph<V, P, Directed> {
    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.has_vertex(vertex)
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn each_adjacent_to<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(&V) -> Step,
    {
        self.adjacency.each_vertex_in_adjacency_list(vertex, f);
    }

    fn each_edge_from<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(Edge<V, P>) -> Step,
    {
        self.each_stored_arc(vertex, f);
    }

    fn each_edge_incident_to<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(Edge<V, P>) -> Step,
    {
        each_edge_incident_to_directed(self, vertex, f);
    }

    fn size(&self) -> usize {
        self.edge_count()
    }
}

impl<V: Vertex, P: EdgePayload> DirectedGraph<V> for AdjacencyListGraph<V, P, Directed> {
    fn each_arc_from<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(Edge<V, P>) -> Step,
    {
        self.each_stored_arc(vertex, f);
    }

    fn each_arc_to<F>(&self, vertex: &V, mut f: F)
    where
        F: FnMut(Edge<V, P>) -> Step,
    {
        self.adjacency.each_predecessor_of(vertex, |source| {
            match self.adjacency.payload(source, vertex) {
                Some(payload) => f(Edge::new(source.clone(), vertex.clone(), payload.clone())),
                None => ControlFlow::Continue(()),
            }
        });
    }

    fn in_degree_of(&self, vertex: &V) -> Option<usize> {
        in_degree_of(self, vertex)
    }

    fn out_degree_of(&self, vertex: &V) -> Option<usize> {
        self.adjacency.neighbors(vertex).map(|adjacent| adjacent.len())
    }
}

impl<V: Vertex, P: EdgePayload> Graph<V> for AdjacencyListGraph<V, P, Undirected> {
    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.has_vertex(vertex)
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn each_adjacent_to<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(&V) -> Step,
    {
        self.adjacency.each_vertex_in_adjacency_list(vertex, f);
    }

    fn each_edge_from<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(Edge<V, P>) -> Step,
    {
        self.each_stored_arc(vertex, f);
    }

    fn each_edge_incident_to<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(Edge<V, P>) -> Step,
    {
        self.each_stored_arc(vertex, f);
    }

    fn size(&self) -> usize {
        self.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect_edges<G: GraphSource<&'static str>>(g: &G) -> Vec<(&'static str, &'static str)> {
        let mut edges = Vec::new();
        g.each_edge(|e| {
            edges.push((e.source, e.target));
            ControlFlow::Continue(())
        });
        edges.sort_unstable();
        edges
    }

    #[test]
    fn directed_graph_basics() {
        let mut g = DirectedAdjacencyGraph::new();
        g.add_edges([Edge::plain("foo", "bar"), Edge::plain("bar", "baz")]);
        g.ensure_vertex("lonely");

        assert_eq!(g.order(), 4);
        assert_eq!(g.size(), 2);
        assert!(g.has_edge(&"foo", &"bar"));
        assert!(!g.has_edge(&"bar", &"foo"));
        assert_eq!(g.in_degree_of(&"bar"), Some(1));
        assert_eq!(g.out_degree_of(&"bar"), Some(1));
        assert_eq!(g.in_degree_of(&"lonely"), Some(0));
        assert_eq!(g.in_degree_of(&"ghost"), None);
        assert_eq!(collect_edges(&g), vec![("bar", "baz"), ("foo", "bar")]);

        assert!(g.remove_edge(&"foo", &"bar"));
        assert!(!g.remove_edge(&"foo", &"bar"));
        assert!(g.remove_vertex(&"baz"));
        assert_eq!(g.size(), 0);
        assert_eq!(g.order(), 3);
    }

    #[test]
    fn arcs_to_carry_payloads() {
        let mut g = WeightedDigraph::new();
        g.add_edges([Edge::weighted(1, 3, 0.5), Edge::weighted(2, 3, 1.5), Edge::weighted(3, 4, 9.0)]);

        let mut incoming = Vec::new();
        g.each_arc_to(&3, |e| {
            incoming.push((e.source, e.payload));
            ControlFlow::Continue(())
        });
        incoming.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(incoming, vec![(1, 0.5), (2, 1.5)]);

        let mut outgoing = Vec::new();
        g.each_arc_from(&3, |e| {
            outgoing.push(e);
            ControlFlow::Continue(())
        });
        assert_eq!(outgoing, vec![Edge::weighted(3, 4, 9.0)]);
    }

    #[test]
    fn undirected_edges_are_reported_once() {
        let mut g = UndirectedAdjacencyGraph::new();
        g.add_edges([
            Edge::plain("foo", "bar"),
            Edge::plain("bar", "baz"),
            Edge::plain("baz", "baz"),
        ]);

        assert_eq!(g.size(), 3);
        assert_eq!(g.adjacency().arc_count(), 5);
        assert!(g.has_edge(&"bar", &"foo"));

        let mut seen = HashSet::new();
        g.each_edge(|e| {
            let key = if e.source <= e.target { (e.source, e.target) } else { (e.target, e.source) };
            assert!(seen.insert(key), "edge {key:?} reported twice");
            ControlFlow::Continue(())
        });
        assert_eq!(seen.len(), 3);

        let mut from_bar = HashSet::new();
        g.each_edge_from(&"bar", |e| {
            assert_eq!(e.source, "bar");
            from_bar.insert(e.target);
            ControlFlow::Continue(())
        });
        assert_eq!(from_bar, HashSet::from(["foo", "baz"]));

        assert!(g.remove_edge(&"bar", &"foo"));
        assert!(!g.has_edge(&"foo", &"bar"));
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn transpose_reverses_arcs_and_keeps_isolated_vertices() {
        let mut g: LabeledDigraph<u8> = [Edge::labeled(1, 2, "a"), Edge::labeled(2, 3, "b")]
            .into_iter()
            .collect();
        g.ensure_vertex(9);

        let t = g.transpose();
        assert_eq!(t.order(), 4);
        assert_eq!(t.payload(&2, &1).map(String::as_str), Some("a"));
        assert_eq!(t.payload(&3, &2).map(String::as_str), Some("b"));
        assert!(!t.has_edge(&1, &2));
        assert_eq!(t.transpose(), g);
    }

    #[test]
    fn density_matches_edge_count() {
        let mut d = DirectedAdjacencyGraph::new();
        assert_eq!(d.density(), 0.0);
        d.add_edges([Edge::plain(0, 1), Edge::plain(1, 0)]);
        assert!((d.density() - 1.0).abs() < f64::EPSILON);

        let mut u = UndirectedAdjacencyGraph::new();
        u.add_edges([Edge::plain(0, 1), Edge::plain(1, 2)]);
        assert!((u.density() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_round_trip_preserves_structure() {
        let g: DataDigraph<String> = [Edge::data("a".to_string(), "b".to_string(), serde_json::json!({"w": 1}))]
            .into_iter()
            .collect();
        let text = serde_json::to_string(&g).unwrap();
        let back: DataDigraph<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, g);
    }
}
