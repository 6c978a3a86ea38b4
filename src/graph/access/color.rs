//! Three-color vertex state for depth-first walks.
//!
//! - `White`: undiscovered
//! - `Grey`: discovered, still on the current path
//! - `Black`: finished
//!
//! A `ColorMap` is allocated per walk and dropped on return. Vertices without
//! an entry are white, so the map only grows with discovered vertices.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Traversal state of a single vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Not yet discovered.
    #[default]
    White,
    /// Discovered but not finished.
    Grey,
    /// Finished: all descendants are finished too.
    Black,
}

/// Call-scoped color assignment, indexed by vertex.
#[derive(Debug, Clone)]
pub struct ColorMap<V> {
    colors: HashMap<V, Color>,
}

impl<V: Eq + Hash> ColorMap<V> {
    /// Creates a map where every vertex is white.
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Creates an all-white map sized for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the color of `vertex`.
    #[inline]
    pub fn color_of(&self, vertex: &V) -> Color {
        self.colors.get(vertex).copied().unwrap_or_default()
    }

    /// Marks `vertex` grey. Returns `true` iff it was white.
    pub fn discover(&mut self, vertex: V) -> bool {
        let slot = self.colors.entry(vertex).or_default();
        let was_white = *slot == Color::White;
        if was_white {
            *slot = Color::Grey;
        }
        was_white
    }

    /// Marks `vertex` black.
    pub fn finish(&mut self, vertex: V) {
        let previous = self.colors.insert(vertex, Color::Black);
        debug_assert_eq!(previous, Some(Color::Grey), "only grey vertices can finish");
    }

    /// Number of vertices currently colored `color`.
    ///
    /// White vertices have no entry, so `count(Color::White)` is always zero.
    pub fn count(&self, color: Color) -> usize {
        self.colors.values().filter(|&&c| c == color).count()
    }

    /// Iterates over every discovered vertex and its color.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Color)> {
        self.colors.iter().map(|(v, &c)| (v, c))
    }
}

impl<V: Eq + Hash> Default for ColorMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
