//! Adjacency-list graph representation.
//!
//! This module contains the storage layer and the helpers the depth-first
//! algorithms rely on:
//! - `adj_list`: payload-generic adjacency map and its iteration primitives
//! - `adjacency_graph`: directed/undirected graphs over the map
//! - `convert`: copying any graph source into an adjacency list
//! - `incidence`: incident-edge union and in-degree by edge scan
//! - `algorithms`: lazy preorder iterators (DFS, BFS)

pub mod adj_list;
pub mod adjacency_graph;
pub mod algorithms;
pub mod convert;
pub mod incidence;

pub use adj_list::AdjacencyMap;
pub use adjacency_graph::{
    AdjacencyListGraph, DataDigraph, DirectedAdjacencyGraph, LabeledDigraph, UndirectedAdjacencyGraph,
    UndirectedDataGraph, UndirectedLabeledGraph, UndirectedWeightedGraph, WeightedDigraph,
};
pub use algorithms::{Bfs, Dfs};
pub use convert::functor_to_adjacency_list;
pub use incidence::{each_edge_incident_to_directed, in_degree_of};
