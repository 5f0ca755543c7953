//! Adjacency-list representation of a directed weighted graph.

/// Directed edge to a target vertex, carrying a weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<W> {
    /// Target vertex id.
    pub to: usize,
    /// Weight (or capacity) of the edge.
    pub weight: W,
}

/// Directed weighted graph backed by per-vertex adjacency lists.
///
/// The vertex count is fixed at construction and edges are append-only.
/// After the graph is built, all algorithms read it through [`neighbors`]
/// and [`edges`] without ever mutating it, so a single graph can serve any
/// number of queries.
///
/// Vertex ids are plain `usize` indices in `[0, vertex_count)`. Parallel
/// edges and self-loops are permitted and carry no special meaning.
///
/// [`neighbors`]: Graph::neighbors
/// [`edges`]: Graph::edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<W> {
    adj: Vec<Vec<Edge<W>>>,
}

impl<W> Graph<W> {
    /// Creates a graph with the given number of vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: (0..vertex_count).map(|_| Vec::new()).collect(),
        }
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Appends the directed edge `from → to` with the given weight.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not a valid vertex id. An invalid id here
    /// is a bug in the caller, not a recoverable condition. Input coming from
    /// untrusted sources is validated by the [loader](crate::io) before it
    /// reaches this method.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) {
        assert!(
            to < self.adj.len(),
            "vertex id {to} out of range (vertex count: {})",
            self.adj.len()
        );
        self.adj[from].push(Edge { to, weight });
    }

    /// Outgoing edges of the given vertex, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex id.
    pub fn neighbors(&self, vertex: usize) -> &[Edge<W>] {
        &self.adj[vertex]
    }

    /// Iterates over all edges as `(from, to, weight)` triples, grouped by
    /// source vertex in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &W)> {
        self.adj.iter().enumerate().flat_map(|(from, edges)| {
            edges.iter().map(move |edge| (from, edge.to, &edge.weight))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let graph = Graph::<i32>::new(0);

        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn add_edge_appends_in_order() {
        let mut graph = Graph::new(3);

        graph.add_edge(0, 1, 1);
        graph.add_edge(0, 2, 5);
        graph.add_edge(1, 2, 2);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.neighbors(0),
            &[Edge { to: 1, weight: 1 }, Edge { to: 2, weight: 5 }]
        );
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn parallel_edges_and_self_loops() {
        let mut graph = Graph::new(2);

        graph.add_edge(0, 1, 1);
        graph.add_edge(0, 1, 2);
        graph.add_edge(1, 1, 3);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(0).len(), 2);
        assert_eq!(graph.neighbors(1), &[Edge { to: 1, weight: 3 }]);
    }

    #[test]
    fn edges_grouped_by_source() {
        let mut graph = Graph::new(3);

        graph.add_edge(1, 2, 20);
        graph.add_edge(0, 1, 10);
        graph.add_edge(1, 0, 30);

        let edges = graph.edges().map(|(u, v, w)| (u, v, *w)).collect::<Vec<_>>();
        assert_eq!(edges, vec![(0, 1, 10), (1, 2, 20), (1, 0, 30)]);
    }

    #[test]
    #[should_panic]
    fn add_edge_source_out_of_range() {
        let mut graph = Graph::new(2);
        graph.add_edge(2, 0, 1);
    }

    #[test]
    #[should_panic]
    fn add_edge_target_out_of_range() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 2, 1);
    }
}
