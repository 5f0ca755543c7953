//! Compute the [maximum flow] between two vertices.
//!
//! The implementation is
//! [Edmonds-Karp](https://en.wikipedia.org/wiki/Edmonds%E2%80%93Karp_algorithm),
//! i.e. Ford-Fulkerson with breadth-first augmenting-path selection, which
//! guarantees `O(V·E²)` termination. Edge weights act as capacities. For
//! integer capacities the computed flow is an integer and equals the capacity
//! of the minimum cut separating the two vertices.
//!
//! [maximum flow]: https://en.wikipedia.org/wiki/Maximum_flow_problem
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::max_flow::max_flow, Graph};
//!
//! let mut graph = Graph::new(4);
//!
//! graph.add_edge(0, 1, 2);
//! graph.add_edge(0, 2, 3);
//! graph.add_edge(1, 3, 4);
//! graph.add_edge(2, 3, 1);
//!
//! assert_eq!(max_flow(&graph, 0, 3), 3);
//! ```

use std::{collections::VecDeque, ops::Sub};

use fixedbitset::FixedBitSet;
use log::trace;

use crate::{core::weight::Weight, graph::Graph};

/// Computes the maximum flow from `source` to `sink`, taking edge weights as
/// capacities.
///
/// Degenerate queries are answered with zero instead of an error: when
/// `source == sink` or either vertex id is out of range, there is no flow to
/// speak of.
///
/// The algorithm works on a private dense residual matrix derived from the
/// adjacency list; the graph itself is never mutated. Capacities of parallel
/// edges between the same ordered pair are summed, since the residual matrix
/// tracks a single capacity per pair.
pub fn max_flow<W>(graph: &Graph<W>, source: usize, sink: usize) -> W
where
    W: Weight + Sub<Output = W>,
{
    let n = graph.vertex_count();

    if source == sink || source >= n || sink >= n {
        return W::zero();
    }

    let mut residual = vec![vec![W::zero(); n]; n];
    for (from, to, weight) in graph.edges() {
        residual[from][to] = residual[from][to].clone() + weight.clone();
    }

    let mut flow = W::zero();

    // Augment along breadth-first paths until the sink becomes unreachable in
    // the residual graph.
    while let Some(parent) = augmenting_path(&residual, source, sink) {
        // The bottleneck is the minimum residual capacity along the path,
        // i.e. the flow increment the path can carry.
        let mut bottleneck: Option<W> = None;
        let mut arcs = 0;

        let mut v = sink;
        while v != source {
            let u = parent[v];
            let capacity = residual[u][v].clone();

            bottleneck = Some(match bottleneck {
                Some(b) if b < capacity => b,
                _ => capacity,
            });
            arcs += 1;
            v = u;
        }

        let bottleneck = bottleneck.expect("source != sink, so the path has at least one arc");
        trace!("augmenting along a path of {arcs} arcs");

        // Subtract the bottleneck from the forward arcs and add it to the
        // reverse arcs, so that later paths can cancel flow sent here.
        let mut v = sink;
        while v != source {
            let u = parent[v];
            residual[u][v] = residual[u][v].clone() - bottleneck.clone();
            residual[v][u] = residual[v][u].clone() + bottleneck.clone();
            v = u;
        }

        flow = flow + bottleneck;
    }

    flow
}

// Breadth-first search over arcs with positive residual capacity. Returns the
// parent pointers of the discovered tree if the sink was reached.
fn augmenting_path<W>(residual: &[Vec<W>], source: usize, sink: usize) -> Option<Vec<usize>>
where
    W: Weight,
{
    let n = residual.len();

    let mut visited = FixedBitSet::with_capacity(n);
    let mut parent = vec![0; n];
    let mut queue = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for v in 0..n {
            if !visited.contains(v) && W::zero() < residual[u][v] {
                visited.insert(v);
                parent[v] = u;
                queue.push_back(v);
            }
        }
    }

    visited.contains(sink).then_some(parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The classic six-vertex network from CLRS (26.1) with maximum flow 23.
    fn clrs_network() -> Graph<i32> {
        let mut graph = Graph::new(6);

        graph.add_edge(0, 1, 16);
        graph.add_edge(0, 2, 13);
        graph.add_edge(1, 2, 10);
        graph.add_edge(1, 3, 12);
        graph.add_edge(2, 1, 4);
        graph.add_edge(2, 4, 14);
        graph.add_edge(3, 2, 9);
        graph.add_edge(3, 5, 20);
        graph.add_edge(4, 3, 7);
        graph.add_edge(4, 5, 4);

        graph
    }

    #[test]
    fn clrs_network_flow() {
        assert_eq!(max_flow(&clrs_network(), 0, 5), 23);
    }

    #[test]
    fn source_equals_sink() {
        assert_eq!(max_flow(&clrs_network(), 0, 0), 0);
    }

    #[test]
    fn out_of_range_vertices() {
        let graph = clrs_network();

        assert_eq!(max_flow(&graph, 0, 6), 0);
        assert_eq!(max_flow(&graph, 6, 5), 0);
    }

    #[test]
    fn disconnected_sink() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 10);

        assert_eq!(max_flow(&graph, 0, 2), 0);
    }

    #[test]
    fn single_path_bottleneck() {
        let mut graph = Graph::new(4);

        graph.add_edge(0, 1, 8);
        graph.add_edge(1, 2, 3);
        graph.add_edge(2, 3, 5);

        assert_eq!(max_flow(&graph, 0, 3), 3);
    }

    #[test]
    fn parallel_edges_sum_capacity() {
        let mut graph = Graph::new(2);

        graph.add_edge(0, 1, 2);
        graph.add_edge(0, 1, 3);

        assert_eq!(max_flow(&graph, 0, 1), 5);
    }

    #[test]
    fn cross_edge_does_not_limit_flow() {
        // The optimum saturates both two-arc paths; the cross edge (1, 2)
        // carries nothing.
        let mut graph = Graph::new(4);

        graph.add_edge(0, 1, 10);
        graph.add_edge(0, 2, 10);
        graph.add_edge(1, 2, 10);
        graph.add_edge(1, 3, 10);
        graph.add_edge(2, 3, 10);

        assert_eq!(max_flow(&graph, 0, 3), 20);
    }

    #[test]
    fn flow_against_direction_is_zero() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 5);

        assert_eq!(max_flow(&graph, 1, 0), 0);
    }

    #[test]
    fn float_capacities() {
        let mut graph = Graph::new(3);

        graph.add_edge(0, 1, 2.5);
        graph.add_edge(1, 2, 1.5);

        assert_eq!(max_flow(&graph, 0, 2), 1.5);
    }

    #[test]
    fn min_cut_equals_flow() {
        // Cut {0, 1} / {2, 3}: crossing capacities 3 + 2 + 4 = 9.
        let mut graph = Graph::new(4);

        graph.add_edge(0, 1, 100);
        graph.add_edge(0, 2, 3);
        graph.add_edge(1, 2, 2);
        graph.add_edge(1, 3, 4);
        graph.add_edge(2, 3, 100);

        assert_eq!(max_flow(&graph, 0, 3), 9);
    }
}
