//! Find a [topologically sorted] collection of vertices on a [directed
//! acyclic graph] (DAG).
//!
//! The exact order in which the vertices are reported is not specified beyond
//! the topological property and should not be relied upon.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::toposort::toposort, Graph};
//!
//! // Edge direction in "must come before" relation.
//! let mut dependencies = Graph::new(3);
//!
//! dependencies.add_edge(2, 0, ());
//! dependencies.add_edge(0, 1, ());
//!
//! assert_eq!(toposort(&dependencies).unwrap(), vec![2, 0, 1]);
//! ```

use thiserror::Error;

use crate::graph::Graph;

/// The error encountered during a [`toposort`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph contains a cycle.
    ///
    /// Graphs with cycles don't have a topological order.
    #[error("graph contains cycle")]
    Cycle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unvisited,
    InProgress,
    Done,
}

/// Returns the vertices in a topological order, or [`Error::Cycle`] if the
/// graph is not a DAG.
///
/// For every edge `(u, v)` of an acyclic graph, `u` comes before `v` in the
/// returned order.
pub fn toposort<W>(graph: &Graph<W>) -> Result<Vec<usize>, Error> {
    let mut order = Vec::with_capacity(graph.vertex_count());
    dfs(graph, Some(&mut order))?;

    // The post-order has every vertex after all its descendants, so the
    // topological order is its reverse.
    order.reverse();
    Ok(order)
}

/// Returns `true` if the graph contains no directed cycle.
pub fn is_dag<W>(graph: &Graph<W>) -> bool {
    dfs(graph, None).is_ok()
}

// Depth-first traversal over all components with an explicit stack of
// (vertex, next edge index) frames instead of recursion, so that deep graphs
// cannot exhaust the call stack. A vertex is appended to the post-order only
// at the moment it transitions to `Done`, i.e. after its entire subtree has
// been verified back-edge free, and the `Done` state guarantees it is never
// appended twice.
fn dfs<W>(graph: &Graph<W>, mut order: Option<&mut Vec<usize>>) -> Result<(), Error> {
    let mut state = vec![State::Unvisited; graph.vertex_count()];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..graph.vertex_count() {
        if state[root] != State::Unvisited {
            continue;
        }

        state[root] = State::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (vertex, edge) = *frame;

            match graph.neighbors(vertex).get(edge).map(|e| e.to) {
                Some(next) => {
                    frame.1 += 1;

                    match state[next] {
                        State::Unvisited => {
                            state[next] = State::InProgress;
                            stack.push((next, 0));
                        }
                        // The target is on the current exploration path, so
                        // this is a back edge closing a cycle.
                        State::InProgress => return Err(Error::Cycle),
                        State::Done => {}
                    }
                }
                None => {
                    state[vertex] = State::Done;
                    stack.pop();

                    if let Some(order) = order.as_deref_mut() {
                        order.push(vertex);
                    }
                }
            }
        }
    }

    Ok(())
}
