//! Lazy preorder traversals over any [`Graph`].
//!
//! These iterators yield vertices in discovery order, without visitor
//! callbacks or finish events. For the full three-color protocol use
//! [`traverse`](crate::dfs::traverse).

use core::ops::ControlFlow;
use std::collections::HashSet;

use crate::collections::{VertexQueue, VertexStack};
use crate::graph::traits::{Graph, Vertex};

/// Breadth-first preorder over the vertices reachable from a start vertex.
///
/// Frontier vertices wait in a [`VertexQueue`]; a vertex is marked discovered
/// when it is enqueued, so it is yielded once.
pub struct Bfs<'g, V, G> {
    graph: &'g G,
    discovered: HashSet<V>,
    queue: VertexQueue<V>,
}

impl<'g, V: Vertex, G: Graph<V>> Bfs<'g, V, G> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// The iterator is empty if `start` is not in the graph.
    pub fn new(graph: &'g G, start: V) -> Self {
        let mut discovered = HashSet::new();
        let mut queue = VertexQueue::new();

        if graph.has_vertex(&start) {
            discovered.insert(start.clone());
            queue.push(start);
        }

        Self {
            graph,
            discovered,
            queue,
        }
    }
}

impl<V: Vertex, G: Graph<V>> Iterator for Bfs<'_, V, G> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop()?;

        let Self {
            graph,
            discovered,
            queue,
        } = self;
        graph.each_adjacent_to(&u, |v| {
            if discovered.insert(v.clone()) {
                queue.push(v.clone());
            }
            ControlFlow::Continue(())
        });

        Some(u)
    }
}

/// Depth-first preorder over the vertices reachable from a start vertex.
///
/// Pending vertices wait on a [`VertexStack`]. Unlike [`traverse`](crate::dfs::traverse)
/// this emits no finish events and does not classify edges.
pub struct Dfs<'g, V, G> {
    graph: &'g G,
    discovered: HashSet<V>,
    stack: VertexStack<V>,
}

impl<'g, V: Vertex, G: Graph<V>> Dfs<'g, V, G> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// The iterator is empty if `start` is not in the graph.
    pub fn new(graph: &'g G, start: V) -> Self {
        let mut stack = VertexStack::new();
        if graph.has_vertex(&start) {
            stack.push(start);
        }

        Self {
            graph,
            discovered: HashSet::new(),
            stack,
        }
    }
}

impl<V: Vertex, G: Graph<V>> Iterator for Dfs<'_, V, G> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        // Vertices may be pushed more than once; the first pop wins.
        let u = loop {
            let u = self.stack.pop()?;
            if self.discovered.insert(u.clone()) {
                break u;
            }
        };

        let Self {
            graph,
            discovered,
            stack,
        } = self;
        graph.each_adjacent_to(&u, |v| {
            if !discovered.contains(v) {
                stack.push(v.clone());
            }
            ControlFlow::Continue(())
        });

        Some(u)
    }
}
