//! The visitor protocol driven by [`traverse`](crate::dfs::traverse).
//!
//! A visitor receives four lifecycle events. Each is optional: the trait
//! provides no-op defaults, and [`Callbacks`] exposes the same events as
//! independently present or absent closure slots.
//!
//! | Event | Fires |
//! |-------|-------|
//! | `on_start_vertex` | once per vertex, as it turns grey |
//! | `on_examine_edge` | once per outgoing arc of a grey vertex |
//! | `on_back_edge` | when an arc leads to a grey vertex |
//! | `on_finish_vertex` | once per vertex, as it turns black |
//!
//! Returning `ControlFlow::Break(())` from any event ends the walk at once.

use core::fmt;
use core::ops::ControlFlow;

use crate::graph::edge::Edge;
use crate::graph::traits::Step;

/// Receiver of depth-first lifecycle events.
///
/// `P` is the edge payload type of the walked graph.
pub trait Visitor<V, P = ()> {
    /// `vertex` was discovered (white → grey).
    fn on_start_vertex(&mut self, _vertex: &V) -> Step {
        ControlFlow::Continue(())
    }

    /// `edge` is being examined from its (grey) source.
    fn on_examine_edge(&mut self, _edge: &Edge<V, P>) -> Step {
        ControlFlow::Continue(())
    }

    /// An examined edge leads to `vertex`, which is still grey.
    fn on_back_edge(&mut self, _vertex: &V) -> Step {
        ControlFlow::Continue(())
    }

    /// `vertex` and all its descendants are done (grey → black).
    fn on_finish_vertex(&mut self, _vertex: &V) -> Step {
        ControlFlow::Continue(())
    }
}

impl<V, P, T: Visitor<V, P> + ?Sized> Visitor<V, P> for &mut T {
    fn on_start_vertex(&mut self, vertex: &V) -> Step {
        (**self).on_start_vertex(vertex)
    }

    fn on_examine_edge(&mut self, edge: &Edge<V, P>) -> Step {
        (**self).on_examine_edge(edge)
    }

    fn on_back_edge(&mut self, vertex: &V) -> Step {
        (**self).on_back_edge(vertex)
    }

    fn on_finish_vertex(&mut self, vertex: &V) -> Step {
        (**self).on_finish_vertex(vertex)
    }
}

type VertexSlot<'a, V> = Option<Box<dyn FnMut(&V) -> Step + 'a>>;
type EdgeSlot<'a, V, P> = Option<Box<dyn FnMut(&Edge<V, P>) -> Step + 'a>>;

/// A visitor assembled from optional closures.
///
/// An empty slot is a no-op.
///
/// ```rust
/// use core::ops::ControlFlow;
/// use tricolor::{traverse, Callbacks, DirectedAdjacencyGraph, Edge, Roots};
///
/// let mut g = DirectedAdjacencyGraph::new();
/// g.add_edges([Edge::plain(1, 2), Edge::plain(2, 3)]);
///
/// let mut finished = Vec::new();
/// let mut visitor = Callbacks::new().with_finish_vertex(|v: &i32| {
///     finished.push(*v);
///     ControlFlow::Continue(())
/// });
/// traverse(&g, &mut visitor, Roots::Vertex(1)).unwrap();
/// drop(visitor);
/// assert_eq!(finished, vec![3, 2, 1]);
/// ```
pub struct Callbacks<'a, V, P = ()> {
    start_vertex: VertexSlot<'a, V>,
    examine_edge: EdgeSlot<'a, V, P>,
    back_edge: VertexSlot<'a, V>,
    finish_vertex: VertexSlot<'a, V>,
}

impl<'a, V, P> Callbacks<'a, V, P> {
    /// Creates a visitor with every slot empty.
    pub fn new() -> Self {
        Self {
            start_vertex: None,
            examine_edge: None,
            back_edge: None,
            finish_vertex: None,
        }
    }

    /// Sets the `on_start_vertex` slot.
    #[must_use]
    pub fn with_start_vertex(mut self, f: impl FnMut(&V) -> Step + 'a) -> Self {
        self.start_vertex = Some(Box::new(f));
        self
    }

    /// Sets the `on_examine_edge` slot.
    #[must_use]
    pub fn with_examine_edge(mut self, f: impl FnMut(&Edge<V, P>) -> Step + 'a) -> Self {
        self.examine_edge = Some(Box::new(f));
        self
    }

    /// Sets the `on_back_edge` slot.
    #[must_use]
    pub fn with_back_edge(mut self, f: impl FnMut(&V) -> Step + 'a) -> Self {
        self.back_edge = Some(Box::new(f));
        self
    }

    /// Sets the `on_finish_vertex` slot.
    #[must_use]
    pub fn with_finish_vertex(mut self, f: impl FnMut(&V) -> Step + 'a) -> Self {
        self.finish_vertex = Some(Box::new(f));
        self
    }
}

impl<V, P> Default for Callbacks<'_, V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> fmt::Debug for Callbacks<'_, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("start_vertex", &self.start_vertex.is_some())
            .field("examine_edge", &self.examine_edge.is_some())
            .field("back_edge", &self.back_edge.is_some())
            .field("finish_vertex", &self.finish_vertex.is_some())
            .finish()
    }
}

fn fire<T: ?Sized>(slot: &mut Option<Box<dyn FnMut(&T) -> Step + '_>>, arg: &T) -> Step {
    match slot {
        Some(f) => f(arg),
        None => ControlFlow::Continue(()),
    }
}

impl<V, P> Visitor<V, P> for Callbacks<'_, V, P> {
    fn on_start_vertex(&mut self, vertex: &V) -> Step {
        fire(&mut self.start_vertex, vertex)
    }

    fn on_examine_edge(&mut self, edge: &Edge<V, P>) -> Step {
        fire(&mut self.examine_edge, edge)
    }

    fn on_back_edge(&mut self, vertex: &V) -> Step {
        fire(&mut self.back_edge, vertex)
    }

    fn on_finish_vertex(&mut self, vertex: &V) -> Step {
        fire(&mut self.finish_vertex, vertex)
    }
}
