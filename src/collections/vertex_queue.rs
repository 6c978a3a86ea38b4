//! `VertexQueue`: a singly linked FIFO of vertices.
//!
//! Nodes live in a slot arena and link to each other by index, so the queue
//! keeps a `tail` link for O(1) enqueue without any raw pointers. Slots freed
//! by `pop` are chained into a free list and reused by later pushes.
//!
//! # Performance
//! - `push`: O(1) amortized, reuses a free slot when one exists
//! - `pop`: O(1)
//! - `len`: O(1), tracked eagerly

use core::fmt;

/// A slot in the node arena.
#[derive(Debug)]
enum Slot<V> {
    Occupied { value: V, next: Option<usize> },
    /// Next free slot index.
    Free(Option<usize>),
}

/// A first-in, first-out sequence of vertices.
///
/// Popping an empty queue returns `None`; it never panics. Not synchronized:
/// a queue belongs to exactly one traversal call.
pub struct VertexQueue<V> {
    slots: Vec<Slot<V>>,
    head: Option<usize>,
    /// Last node of the `head` chain; `None` iff `head` is `None`.
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<V> VertexQueue<V> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value` in a fresh or recycled slot and returns its index.
    fn alloc(&mut self, value: V) -> usize {
        let node = Slot::Occupied { value, next: None };
        let Some(free) = self.free_head else {
            self.slots.push(node);
            return self.slots.len() - 1;
        };
        if let Slot::Free(next_free) = self.slots[free] {
            self.free_head = next_free;
        }
        self.slots[free] = node;
        free
    }

    /// Appends `value` at the back of the queue.
    pub fn push(&mut self, value: V) {
        let idx = self.alloc(value);
        match self.tail {
            Some(tail) => {
                if let Slot::Occupied { next, .. } = &mut self.slots[tail] {
                    *next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Removes and returns the least recently pushed vertex, or `None` if empty.
    pub fn pop(&mut self) -> Option<V> {
        let idx = self.head?;
        let slot = core::mem::replace(&mut self.slots[idx], Slot::Free(self.free_head));
        let Slot::Occupied { value, next } = slot else {
            debug_assert!(false, "queue head points at a free slot");
            return None;
        };

        self.free_head = Some(idx);
        self.head = next;
        if next.is_none() {
            self.tail = None;
            // Nothing is linked anymore; drop the arena's free chain too.
            self.slots.clear();
            self.free_head = None;
        }
        self.len -= 1;
        Some(value)
    }

    /// Returns the vertex `pop` would return, without removing it.
    pub fn peek(&self) -> Option<&V> {
        match &self.slots[self.head?] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free(_) => None,
        }
    }

    /// Returns the number of queued vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: &self.slots,
            current: self.head,
        }
    }
}

impl<V> Default for VertexQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for VertexQueue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V> Extend<V> for VertexQueue<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<V> FromIterator<V> for VertexQueue<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Borrowing iterator over a `VertexQueue`, front first.
pub struct Iter<'a, V> {
    slots: &'a [Slot<V>],
    current: Option<usize>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        match &self.slots[self.current?] {
            Slot::Occupied { value, next } => {
                self.current = *next;
                Some(value)
            }
            Slot::Free(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_order_and_length() {
        let mut queue = VertexQueue::new();
        assert_eq!(queue.len(), 0);

        queue.push("foo");
        assert_eq!(queue.len(), 1);

        queue.push("bar");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some("foo"));
        assert_eq!(queue.pop(), Some("bar"));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn tail_is_reset_after_draining() {
        let mut queue = VertexQueue::new();
        queue.push(1);
        assert_eq!(queue.pop(), Some(1));
        assert!(queue.is_empty());

        // Pushing after a full drain must start a fresh chain.
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.peek(), Some(&2));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(queue.pop(), Some(2));
        queue.push(4);
        assert_eq!(format!("{queue:?}"), "[3, 4]");
    }

    #[test]
    fn push_after_partial_pop_links_to_the_live_tail() {
        let mut queue = VertexQueue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));

        // The next push recycles a freed slot and must still follow 3.
        queue.push(4);
        queue.push(5);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(queue.slots.len(), 3);
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(4));
        assert_eq!(queue.pop(), Some(5));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn interleaved_operations_keep_fifo_order() {
        let mut queue: VertexQueue<u32> = (0..3).collect();
        let mut drained = Vec::new();
        for i in 3..6 {
            drained.extend(queue.pop());
            queue.push(i);
        }
        while let Some(v) = queue.pop() {
            drained.push(v);
        }
        assert_eq!(drained, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn owned_values_are_dropped_with_the_queue() {
        let mut queue: VertexQueue<String> = (0..1_000).map(|i| i.to_string()).collect();
        for _ in 0..500 {
            queue.pop();
        }
        queue.push("tail".to_string());
        assert_eq!(queue.len(), 501);
        assert_eq!(queue.iter().last().map(String::as_str), Some("tail"));
        drop(queue);
    }

    #[test]
    fn long_chain_drops_without_overflow() {
        let queue: VertexQueue<u32> = (0..200_000).collect();
        assert_eq!(queue.len(), 200_000);
        drop(queue);
    }
}
