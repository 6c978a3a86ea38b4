//! Working storage for iterative traversals.
//!
//! Both containers are singly linked and allocated fresh per traversal call:
//! - `vertex_stack`: LIFO, backs depth-first order and search paths
//! - `vertex_queue`: FIFO over an index-linked slot arena, backs breadth-first order

pub mod vertex_queue;
pub mod vertex_stack;

pub use vertex_queue::VertexQueue;
pub use vertex_stack::VertexStack;
