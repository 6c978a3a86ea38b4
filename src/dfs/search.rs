//! Depth-first path search.

use core::ops::ControlFlow;

use crate::collections::VertexStack;
use crate::dfs::visitor::Visitor;
use crate::dfs::walker::Walker;
use crate::error::TraversalError;
use crate::graph::traits::{Graph, Step, Vertex};

/// Tracks the current grey path; stops the walk when `target` turns grey.
struct PathFinder<V> {
    target: V,
    path: VertexStack<V>,
    found: bool,
}

impl<V: Vertex, P> Visitor<V, P> for PathFinder<V> {
    fn on_start_vertex(&mut self, vertex: &V) -> Step {
        self.path.push(vertex.clone());
        if *vertex == self.target {
            self.found = true;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn on_finish_vertex(&mut self, vertex: &V) -> Step {
        let popped = self.path.pop();
        debug_assert_eq!(popped.as_ref(), Some(vertex), "finish order must mirror the grey path");
        ControlFlow::Continue(())
    }
}

/// Finds a path from `start` to `target` with a depth-first walk.
///
/// On success the path is returned **from `target` back to `start`**: the
/// first element is `target`, the last is `start`. `Ok(None)` means both
/// vertices exist but `target` is unreachable from `start`.
///
/// The path follows the walk's tree edges, so it is a path but not
/// necessarily a shortest one.
///
/// # Errors
/// - [`TraversalError::StartVertexNotFound`] if `start` is not in the graph
/// - [`TraversalError::TargetVertexNotFound`] if `target` is not in the graph
///
/// Both are checked, in that order, before the walk begins.
pub fn search<V, G>(graph: &G, target: &V, start: &V) -> Result<Option<Vec<V>>, TraversalError>
where
    V: Vertex,
    G: Graph<V>,
{
    if !graph.has_vertex(start) {
        return Err(TraversalError::start_vertex(start));
    }
    if !graph.has_vertex(target) {
        return Err(TraversalError::target_vertex(target));
    }

    let mut finder = PathFinder {
        target: target.clone(),
        path: VertexStack::new(),
        found: false,
    };
    let stopped = Walker::new(graph, &mut finder)
        .walk(core::slice::from_ref(start))
        .is_break();
    debug_assert_eq!(stopped, finder.found, "only reaching the target stops the search");

    if !finder.found {
        trace_event!(debug, to = ?target, from = ?start, "no path");
        return Ok(None);
    }

    trace_event!(debug, to = ?target, from = ?start, length = finder.path.len(), "path found");
    // Popping the grey path yields target first, start last.
    Ok(Some(finder.path.into_iter().collect()))
}
