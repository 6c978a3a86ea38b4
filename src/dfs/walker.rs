//! The three-color depth-first engine.
//!
//! The walk is iterative: each grey vertex owns a frame holding the outgoing
//! edges it has not examined yet, so deep graphs never exhaust the thread
//! stack. Outgoing edges are snapshotted when a vertex turns grey.
//!
//! Guarantees for one walk:
//! - `on_start_vertex` and `on_finish_vertex` fire exactly once per reached vertex
//! - every outgoing edge of every reached vertex is examined exactly once
//! - `on_back_edge` fires only for edges whose target is grey
//! - the first `Break` from the visitor ends the walk; nothing else is examined

use core::ops::ControlFlow;

use crate::dfs::visitor::Visitor;
use crate::error::TraversalError;
use crate::graph::access::{Color, ColorMap};
use crate::graph::edge::Edge;
use crate::graph::traits::{Graph, Step, Vertex};

/// Where a walk starts.
///
/// There is no implicit default: callers choose between a single start,
/// an explicit list, or full coverage of every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roots<V> {
    /// Walk everything reachable from one vertex.
    Vertex(V),
    /// Walk from each vertex in order, skipping those already finished.
    Vertices(Vec<V>),
    /// Walk from every vertex in enumeration order, covering all components.
    AllVertices,
}

impl<V> From<V> for Roots<V> {
    fn from(vertex: V) -> Self {
        Self::Vertex(vertex)
    }
}

/// Drives a depth-first walk over `graph`, reporting to `visitor`.
///
/// # Errors
/// Returns [`TraversalError::StartVertexNotFound`] if a requested root is not
/// in the graph. The check happens before any callback fires.
///
/// Early termination through the visitor is not an error.
pub fn traverse<V, G, Vis>(graph: &G, visitor: &mut Vis, roots: Roots<V>) -> Result<(), TraversalError>
where
    V: Vertex,
    G: Graph<V>,
    Vis: Visitor<V, G::Payload>,
{
    let roots = resolve_roots(graph, roots)?;
    // A visitor stopping the walk is a normal outcome.
    let _ = Walker::new(graph, visitor).walk(&roots);
    Ok(())
}

fn resolve_roots<V: Vertex, G: Graph<V>>(graph: &G, roots: Roots<V>) -> Result<Vec<V>, TraversalError> {
    match roots {
        Roots::Vertex(v) => {
            if !graph.has_vertex(&v) {
                return Err(TraversalError::start_vertex(&v));
            }
            Ok(vec![v])
        }
        Roots::Vertices(vs) => {
            if let Some(missing) = vs.iter().find(|v| !graph.has_vertex(v)) {
                return Err(TraversalError::start_vertex(missing));
            }
            Ok(vs)
        }
        Roots::AllVertices => {
            let mut vs = Vec::with_capacity(graph.order());
            graph.each_vertex(|v| {
                vs.push(v.clone());
                ControlFlow::Continue(())
            });
            Ok(vs)
        }
    }
}

/// A grey vertex and the outgoing edges it has yet to examine.
struct Frame<V, P> {
    vertex: V,
    pending: std::vec::IntoIter<Edge<V, P>>,
}

/// Call-scoped walk state. Roots must already be validated.
pub(crate) struct Walker<'g, 'v, V, G, Vis> {
    graph: &'g G,
    visitor: &'v mut Vis,
    colors: ColorMap<V>,
}

impl<'g, 'v, V, G, Vis> Walker<'g, 'v, V, G, Vis>
where
    V: Vertex,
    G: Graph<V>,
    Vis: Visitor<V, G::Payload>,
{
    pub(crate) fn new(graph: &'g G, visitor: &'v mut Vis) -> Self {
        Self {
            graph,
            visitor,
            colors: ColorMap::with_capacity(graph.order()),
        }
    }

    /// Walks from each root in turn. Returns `Break` if the visitor stopped the walk.
    pub(crate) fn walk(&mut self, roots: &[V]) -> Step {
        for root in roots {
            if self.colors.color_of(root) != Color::White {
                continue;
            }
            trace_event!(trace, root = ?root, "walk from root");
            if self.visit(root.clone()).is_break() {
                trace_event!(debug, root = ?root, "walk terminated by visitor");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn visit(&mut self, root: V) -> Step {
        if self.start(&root).is_break() {
            return ControlFlow::Break(());
        }
        let mut frames = vec![self.frame(root)];

        while let Some(frame) = frames.last_mut() {
            let Some(edge) = frame.pending.next() else {
                if let Some(done) = frames.pop() {
                    if self.finish(done.vertex).is_break() {
                        return ControlFlow::Break(());
                    }
                }
                continue;
            };

            if self.visitor.on_examine_edge(&edge).is_break() {
                return ControlFlow::Break(());
            }

            let target = edge.target;
            match self.colors.color_of(&target) {
                Color::White => {
                    if self.start(&target).is_break() {
                        return ControlFlow::Break(());
                    }
                    frames.push(self.frame(target));
                }
                Color::Grey => {
                    trace_event!(trace, vertex = ?target, "back edge");
                    if self.visitor.on_back_edge(&target).is_break() {
                        return ControlFlow::Break(());
                    }
                }
                Color::Black => {}
            }
        }

        ControlFlow::Continue(())
    }

    fn start(&mut self, vertex: &V) -> Step {
        self.colors.discover(vertex.clone());
        self.visitor.on_start_vertex(vertex)
    }

    fn finish(&mut self, vertex: V) -> Step {
        self.colors.finish(vertex.clone());
        self.visitor.on_finish_vertex(&vertex)
    }

    fn frame(&self, vertex: V) -> Frame<V, G::Payload> {
        let mut pending = Vec::new();
        self.graph.each_edge_from(&vertex, |edge| {
            pending.push(edge);
            ControlFlow::Continue(())
        });
        Frame {
            vertex,
            pending: pending.into_iter(),
        }
    }

    /// Consumes the walker, returning the final colors.
    #[cfg(test)]
    pub(crate) fn into_colors(self) -> ColorMap<V> {
        self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfs::visitor::Callbacks;
    use crate::graph::basic::{DirectedAdjacencyGraph, UndirectedAdjacencyGraph};
    use std::collections::HashSet;

    fn chain(n: u32) -> DirectedAdjacencyGraph<u32> {
        (1..n).map(|i| Edge::plain(i - 1, i)).collect()
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor<&'static str> for Recorder {
        fn on_start_vertex(&mut self, v: &&'static str) -> Step {
            self.events.push(format!("start {v}"));
            ControlFlow::Continue(())
        }
        fn on_examine_edge(&mut self, e: &Edge<&'static str>) -> Step {
            self.events.push(format!("edge {}-{}", e.source, e.target));
            ControlFlow::Continue(())
        }
        fn on_back_edge(&mut self, v: &&'static str) -> Step {
            self.events.push(format!("back {v}"));
            ControlFlow::Continue(())
        }
        fn on_finish_vertex(&mut self, v: &&'static str) -> Step {
            self.events.push(format!("finish {v}"));
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn single_chain_event_order_is_exact() {
        let mut g = DirectedAdjacencyGraph::new();
        g.add_edges([Edge::plain("a", "b"), Edge::plain("b", "a")]);

        let mut rec = Recorder::default();
        traverse(&g, &mut rec, Roots::Vertex("a")).unwrap();
        assert_eq!(
            rec.events,
            vec!["start a", "edge a-b", "start b", "edge b-a", "back a", "finish b", "finish a"]
        );
    }

    #[test]
    fn missing_root_fails_before_any_callback() {
        let g = chain(3);
        let mut fired = false;
        let mut v = Callbacks::new().with_start_vertex(|_: &u32| {
            fired = true;
            ControlFlow::Continue(())
        });
        let err = traverse(&g, &mut v, Roots::Vertices(vec![0, 9])).unwrap_err();
        drop(v);
        assert!(matches!(err, TraversalError::StartVertexNotFound { .. }));
        assert!(!fired);
    }

    #[test]
    fn break_stops_immediately() {
        let g = chain(10);
        let mut started = Vec::new();
        let mut v = Callbacks::new().with_start_vertex(|x: &u32| {
            started.push(*x);
            if *x == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        traverse(&g, &mut v, Roots::Vertex(0)).unwrap();
        drop(v);
        assert_eq!(started, vec![0, 1, 2, 3]);
    }

    #[test]
    fn all_vertices_covers_every_component() {
        let mut g = UndirectedAdjacencyGraph::new();
        g.add_edges([Edge::plain(1, 2), Edge::plain(3, 4)]);
        g.ensure_vertex(5);

        let mut finished = HashSet::new();
        let mut v = Callbacks::new().with_finish_vertex(|x: &i32| {
            assert!(finished.insert(*x));
            ControlFlow::Continue(())
        });
        traverse(&g, &mut v, Roots::AllVertices).unwrap();
        drop(v);
        assert_eq!(finished, HashSet::from([1, 2, 3, 4, 5]));

        let mut reached = 0;
        let mut v = Callbacks::new().with_start_vertex(|_: &i32| {
            reached += 1;
            ControlFlow::Continue(())
        });
        traverse(&g, &mut v, Roots::from(1)).unwrap();
        drop(v);
        assert_eq!(reached, 2);
    }

    /// Counts events and stops on the first examined edge or back edge.
    #[derive(Default)]
    struct Stopper {
        stop_on_examine: bool,
        stop_on_back: bool,
        started: Vec<u32>,
        examined: Vec<(u32, u32)>,
        backs: usize,
        finished: usize,
    }

    impl Visitor<u32> for Stopper {
        fn on_start_vertex(&mut self, v: &u32) -> Step {
            self.started.push(*v);
            ControlFlow::Continue(())
        }
        fn on_examine_edge(&mut self, e: &Edge<u32>) -> Step {
            self.examined.push((e.source, e.target));
            if self.stop_on_examine {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
        fn on_back_edge(&mut self, _v: &u32) -> Step {
            self.backs += 1;
            if self.stop_on_back {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
        fn on_finish_vertex(&mut self, _v: &u32) -> Step {
            self.finished += 1;
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn break_from_examine_edge_skips_siblings() {
        let g: DirectedAdjacencyGraph<u32> = (1..=4).map(|t| Edge::plain(0, t)).collect();

        let mut v = Stopper {
            stop_on_examine: true,
            ..Stopper::default()
        };
        assert_eq!(traverse(&g, &mut v, Roots::Vertex(0)), Ok(()));
        assert_eq!(v.examined.len(), 1);
        assert_eq!(v.started, vec![0]);
        assert_eq!(v.finished, 0);
    }

    #[test]
    fn break_from_back_edge_skips_siblings() {
        // 0 -> 1 -> 2, and every arc out of 2 leads to a grey vertex.
        let g: DirectedAdjacencyGraph<u32> = [
            Edge::plain(0, 1),
            Edge::plain(1, 2),
            Edge::plain(2, 0),
            Edge::plain(2, 1),
            Edge::plain(2, 2),
        ]
        .into_iter()
        .collect();

        let mut v = Stopper {
            stop_on_back: true,
            ..Stopper::default()
        };
        assert_eq!(traverse(&g, &mut v, Roots::Vertex(0)), Ok(()));
        assert_eq!(v.started, vec![0, 1, 2]);
        assert_eq!(v.examined.iter().filter(|(s, _)| *s == 2).count(), 1);
        assert_eq!(v.examined.len(), 3);
        assert_eq!(v.backs, 1);
        assert_eq!(v.finished, 0);
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let g = chain(100_000);
        let mut walker_visitor: Callbacks<'_, u32> = Callbacks::new();
        let mut walker = Walker::new(&g, &mut walker_visitor);
        assert!(walker.walk(&[0]).is_continue());
        let colors = walker.into_colors();
        assert_eq!(colors.count(Color::Black), 100_000);
        assert_eq!(colors.count(Color::Grey), 0);
    }
}
