//! `VertexStack`: a singly linked LIFO of vertices.
//!
//! # Performance
//! - `push`: O(1), one allocation
//! - `pop`: O(1)
//! - `len`: O(1), tracked eagerly

use core::fmt;

struct Node<V> {
    value: V,
    next: Option<Box<Node<V>>>,
}

/// A last-in, first-out sequence of vertices.
///
/// Popping an empty stack returns `None`; it never panics.
pub struct VertexStack<V> {
    head: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> VertexStack<V> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Pushes `value` on top of the stack.
    pub fn push(&mut self, value: V) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Removes and returns the most recently pushed vertex, or `None` if empty.
    pub fn pop(&mut self) -> Option<V> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Returns the vertex `pop` would return, without removing it.
    pub fn peek(&self) -> Option<&V> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the number of vertices on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<V> Default for VertexStack<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for VertexStack<V> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop overflows on long chains.
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for VertexStack<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V> Extend<V> for VertexStack<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<V> FromIterator<V> for VertexStack<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

/// Borrowing iterator over a `VertexStack`, top first.
pub struct Iter<'a, V> {
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<V> IntoIterator for VertexStack<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Draining iterator over a `VertexStack`, in pop order.
pub struct IntoIter<V>(VertexStack<V>);

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
