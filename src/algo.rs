pub mod bipartite;
pub mod max_flow;
pub mod shortest_paths;
pub mod toposort;

pub use bipartite::is_bipartite;
pub use max_flow::max_flow;
pub use shortest_paths::ShortestPaths;
pub use toposort::{is_dag, toposort};
