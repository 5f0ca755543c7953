//! Directed weighted graph engine.
//!
//! The crate provides an adjacency-list [`Graph`] that is built once and read
//! by four independent analyses:
//!
//! * [single source shortest paths](algo::shortest_paths) (Dijkstra and
//!   Bellman-Ford),
//! * [topological sorting and DAG verification](algo::toposort),
//! * [bipartiteness testing](algo::bipartite),
//! * [maximum flow](algo::max_flow) (Edmonds-Karp).
//!
//! Graphs can be [loaded from JSON documents](io) and [exported to Graphviz
//! DOT](export) for visualization.
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::shortest_paths::dijkstra, Graph};
//!
//! let mut graph = Graph::new(3);
//!
//! graph.add_edge(0, 1, 1);
//! graph.add_edge(1, 2, 2);
//! graph.add_edge(0, 2, 5);
//!
//! let paths = dijkstra(&graph, 0).unwrap();
//!
//! assert_eq!(paths.distances(), &[0, 1, 3]);
//! ```

pub mod algo;
pub mod core;
pub mod export;
pub mod graph;
pub mod io;

pub use crate::{
    core::{ConstructionError, Weight},
    graph::{Edge, Graph},
};
