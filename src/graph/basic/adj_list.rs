//! Adjacency-list storage generic over the edge payload.
//!
//! `AdjacencyMap<V, P>` maps every vertex to the map of its adjacent vertices
//! and the payload of the connecting arc. One container covers all four
//! payload kinds (`()`, `f64`, `String`, `serde_json::Value`), so neighbor
//! and predecessor iteration are written once instead of once per kind.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `ensure_vertex` | \(O(1)\) expected | Hash insert |
//! | `insert_arc` | \(O(1)\) expected | Ensures both endpoints |
//! | `remove_vertex` | \(O(n)\) | Scans every neighbor map |
//! | `each_vertex_in_adjacency_list` | \(O(\text{deg})\) | |
//! | `each_predecessor_of` | \(O(n \cdot \text{deg})\) | No reverse index |

use core::ops::ControlFlow;
use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::graph::traits::Step;

/// Vertex → (adjacent vertex → payload).
///
/// Invariant: every vertex appearing as a neighbor is also a key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize + Eq + Hash, P: Serialize",
    deserialize = "V: Deserialize<'de> + Eq + Hash, P: Deserialize<'de>"
))]
#[serde(transparent)]
pub struct AdjacencyMap<V, P> {
    list: HashMap<V, HashMap<V, P>>,
}

impl<V: Eq + Hash + Clone, P> AdjacencyMap<V, P> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            list: HashMap::new(),
        }
    }

    /// Creates an empty map sized for `vertices` keys.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            list: HashMap::with_capacity(vertices),
        }
    }

    /// Adds `vertex` with no neighbors if it is absent.
    ///
    /// Returns `true` if the vertex was inserted.
    pub fn ensure_vertex(&mut self, vertex: V) -> bool {
        match self.list.entry(vertex) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(HashMap::new());
                true
            }
        }
    }

    /// Returns `true` if `vertex` is a key.
    #[inline]
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.list.contains_key(vertex)
    }

    /// Inserts (or overwrites) the arc `source -> target`.
    ///
    /// Both endpoints are ensured. Returns the previous payload, if any.
    pub fn insert_arc(&mut self, source: V, target: V, payload: P) -> Option<P> {
        self.ensure_vertex(target.clone());
        self.list
            .entry(source)
            .or_default()
            .insert(target, payload)
    }

    /// Removes the arc `source -> target`, returning its payload.
    pub fn remove_arc(&mut self, source: &V, target: &V) -> Option<P> {
        self.list.get_mut(source)?.remove(target)
    }

    /// Removes `vertex` and every arc touching it.
    ///
    /// Returns `false` if the vertex was absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.list.remove(vertex).is_none() {
            return false;
        }
        for adjacent in self.list.values_mut() {
            adjacent.remove(vertex);
        }
        true
    }

    /// Payload of the arc `source -> target`.
    pub fn payload(&self, source: &V, target: &V) -> Option<&P> {
        self.list.get(source)?.get(target)
    }

    /// Neighbor map of `vertex`.
    pub fn neighbors(&self, vertex: &V) -> Option<&HashMap<V, P>> {
        self.list.get(vertex)
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.list.len()
    }

    /// Number of stored arcs (undirected edges count once per orientation).
    pub fn arc_count(&self) -> usize {
        self.list.values().map(HashMap::len).sum()
    }

    /// Iterates over all vertices.
    pub fn vertices(&self) -> hash_map::Keys<'_, V, HashMap<V, P>> {
        self.list.keys()
    }

    /// Iterates over `(vertex, neighbor map)` pairs.
    pub fn iter(&self) -> hash_map::Iter<'_, V, HashMap<V, P>> {
        self.list.iter()
    }

    /// Calls `f` with each vertex adjacent to `vertex` until it returns `Break`.
    ///
    /// Does nothing if `vertex` is absent. Order is unspecified.
    pub fn each_vertex_in_adjacency_list<F>(&self, vertex: &V, mut f: F)
    where
        F: FnMut(&V) -> Step,
    {
        let Some(adjacent) = self.list.get(vertex) else {
            return;
        };
        for candidate in adjacent.keys() {
            if f(candidate).is_break() {
                return;
            }
        }
    }

    /// Calls `f` with each vertex that has an arc into `vertex`, until it
    /// returns `Break`.
    ///
    /// There is no reverse index: every candidate source and its full
    /// neighbor map is scanned, O(V·deg) per call. Does nothing if `vertex`
    /// is absent.
    pub fn each_predecessor_of<F>(&self, vertex: &V, mut f: F)
    where
        F: FnMut(&V) -> Step,
    {
        if !self.list.contains_key(vertex) {
            return;
        }
        for (candidate, adjacent) in &self.list {
            for target in adjacent.keys() {
                if target == vertex && f(candidate).is_break() {
                    return;
                }
            }
        }
    }

    /// Returns the first vertex adjacent to `vertex` that satisfies `pred`.
    pub fn find_adjacent(&self, vertex: &V, mut pred: impl FnMut(&V) -> bool) -> Option<V> {
        let mut found = None;
        self.each_vertex_in_adjacency_list(vertex, |candidate| {
            if pred(candidate) {
                found = Some(candidate.clone());
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        found
    }
}

impl<V: Eq + Hash + Clone, P> Default for AdjacencyMap<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash, P: PartialEq> PartialEq for AdjacencyMap<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}
