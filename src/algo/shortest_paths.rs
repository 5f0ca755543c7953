//! Find [single source shortest paths] and their distances in a graph.
//!
//! Use [`dijkstra`] when all edge weights are non-negative, it is
//! asymptotically faster. [`bellman_ford`] handles negative weights and
//! detects negative cycles reachable from the source, at a higher cost
//! (`O(V·E)` vs `O((V + E) log V)`).
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::shortest_paths::dijkstra, Graph};
//!
//! let mut graph = Graph::new(4);
//!
//! graph.add_edge(0, 1, 3u32);
//! graph.add_edge(0, 2, 2);
//! graph.add_edge(1, 3, 2);
//! graph.add_edge(2, 3, 5);
//!
//! let paths = dijkstra(&graph, 0).unwrap();
//!
//! assert_eq!(paths[3], 5);
//! assert_eq!(paths.reconstruct(3).collect::<Vec<_>>(), vec![1, 0]);
//! ```

use std::ops::Index;

use thiserror::Error;

use crate::core::weight::Weight;

mod bellman_ford;
mod dijkstra;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<W> {
    source: usize,
    dist: Vec<W>,
    pred: Vec<Option<usize>>,
}

impl<W: Weight> ShortestPaths<W> {
    /// Source vertex where the search was started.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if the vertex is not reachable from the source.
    pub fn dist(&self, to: usize) -> Option<&W> {
        let dist = &self.dist[to];
        (*dist != W::inf()).then_some(dist)
    }

    /// The full distance vector indexed by vertex id.
    ///
    /// Unreachable vertices carry the [`Weight::inf`] sentinel.
    pub fn distances(&self) -> &[W] {
        &self.dist
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order.
    ///
    /// The iterator is empty if the vertex is the source itself or is not
    /// reachable from it.
    pub fn reconstruct(&self, to: usize) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }
}

impl<W: Weight> Index<usize> for ShortestPaths<W> {
    type Output = W;

    fn index(&self, index: usize) -> &Self::Output {
        self.dist(index).unwrap()
    }
}

/// The error encountered during a shortest paths run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge with negative weight encountered by Dijkstra's algorithm.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// A negative cycle reachable from the source encountered.
    ///
    /// Shortest path distances are not defined in presence of such a cycle.
    #[error("negative cycle encountered")]
    NegativeCycle,
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: usize,
    pred: &'a [Option<usize>],
}

impl Iterator for PathReconstruction<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred[self.curr]?;
        Some(self.curr)
    }
}
