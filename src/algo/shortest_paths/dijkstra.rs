use std::{cmp::Reverse, collections::BinaryHeap};

use fixedbitset::FixedBitSet;

use crate::{
    core::weight::{Weight, Weighted},
    graph::Graph,
};

use super::{Error, ShortestPaths};

/// Runs [Dijkstra's
/// algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) from the
/// given source vertex.
///
/// All edge weights must be non-negative. An encountered negative weight is
/// reported as [`Error::NegativeWeight`]; use
/// [`bellman_ford`](super::bellman_ford) for graphs with negative weights.
///
/// Ties among equal tentative distances are broken arbitrarily.
///
/// # Panics
///
/// Panics if `source` is not a valid vertex id.
pub fn dijkstra<W>(graph: &Graph<W>, source: usize) -> Result<ShortestPaths<W>, Error>
where
    W: Weight,
{
    let n = graph.vertex_count();

    let mut visited = FixedBitSet::with_capacity(n);
    let mut dist = vec![W::inf(); n];
    let mut pred = vec![None; n];
    let mut queue = BinaryHeap::new();

    dist[source] = W::zero();
    queue.push(Reverse(Weighted(source, W::Ord::from(W::zero()))));

    while let Some(Reverse(Weighted(vertex, vertex_dist))) = queue.pop() {
        // This can happen due to duplication of vertices when doing relaxation
        // in our implementation.
        if visited.contains(vertex) {
            continue;
        }

        let vertex_dist: W = vertex_dist.into();

        for edge in graph.neighbors(vertex) {
            let next = edge.to;

            if visited.contains(next) {
                continue;
            }

            // The check for unsignedness should eliminate the negativity
            // check, because the implementation of `is_unsigned` method is
            // always a constant boolean in practice.
            if !W::is_unsigned() && edge.weight < W::zero() {
                return Err(Error::NegativeWeight);
            }

            let next_dist = vertex_dist.clone() + edge.weight.clone();

            // Relaxation operation. If the distance is better than what we
            // had so far, update it. A textbook version of the algorithm
            // would update the priority of `next` in place. Pushing a new
            // item instead causes duplicities in the queue, which is
            // unfortunate for dense graphs, but fine in practice.
            if next_dist < dist[next] {
                dist[next] = next_dist.clone();
                pred[next] = Some(vertex);
                queue.push(Reverse(Weighted(next, next_dist.into())));
            }
        }

        // The vertex is finished.
        visited.insert(vertex);
    }

    Ok(ShortestPaths { source, dist, pred })
}
