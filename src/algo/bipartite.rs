//! Test whether a graph is [bipartite].
//!
//! [bipartite]: https://en.wikipedia.org/wiki/Bipartite_graph
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::bipartite::is_bipartite, Graph};
//!
//! // An even cycle is bipartite, a triangle is not.
//! let mut square = Graph::new(4);
//! for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
//!     square.add_edge(u, v, ());
//! }
//!
//! assert!(is_bipartite(&square));
//! ```

use std::collections::VecDeque;

use crate::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    A,
    B,
}

impl Color {
    fn opposite(self) -> Self {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
        }
    }
}

/// Returns `true` if the vertices can be split into two sets such that every
/// edge connects vertices from different sets.
///
/// Edges constrain both of their endpoints regardless of direction, i.e. the
/// graph is treated as undirected for coloring purposes. All connected
/// components are checked; the empty graph is bipartite.
pub fn is_bipartite<W>(graph: &Graph<W>) -> bool {
    let n = graph.vertex_count();

    // The adjacency lists know only outgoing edges, but the coloring
    // constraint is undirected. Build a combined neighbor table first so the
    // traversal can move against edge direction as well.
    let mut neighbors = vec![Vec::new(); n];
    for (from, to, _) in graph.edges() {
        neighbors[from].push(to);
        neighbors[to].push(from);
    }

    let mut colors: Vec<Option<Color>> = vec![None; n];
    let mut queue = VecDeque::new();

    for seed in 0..n {
        if colors[seed].is_some() {
            continue;
        }

        colors[seed] = Some(Color::A);
        queue.push_back(seed);

        while let Some(vertex) = queue.pop_front() {
            let color = colors[vertex].unwrap();

            for &next in &neighbors[vertex] {
                match colors[next] {
                    None => {
                        colors[next] = Some(color.opposite());
                        queue.push_back(next);
                    }
                    Some(next_color) if next_color == color => return false,
                    Some(_) => {}
                }
            }
        }
    }

    true
}
