use crate::{core::weight::Weight, graph::Graph};

use super::{Error, ShortestPaths};

/// Runs the [Bellman–Ford
/// algorithm](https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm)
/// from the given source vertex.
///
/// Unlike [`dijkstra`](super::dijkstra), negative edge weights are allowed.
/// If a negative cycle reachable from the source exists, the distances are
/// not defined and [`Error::NegativeCycle`] is returned.
///
/// # Panics
///
/// Panics if `source` is not a valid vertex id.
pub fn bellman_ford<W>(graph: &Graph<W>, source: usize) -> Result<ShortestPaths<W>, Error>
where
    W: Weight,
{
    let mut dist = vec![W::inf(); graph.vertex_count()];
    let mut pred = vec![None; graph.vertex_count()];

    dist[source] = W::zero();

    let mut terminated_early = false;

    // Try to relax edges |V| - 1 times.
    for _ in 1..graph.vertex_count() {
        let mut relaxed = false;

        for (u, v, weight) in graph.edges() {
            // A vertex still at the sentinel cannot improve anything. The
            // guard also avoids `inf + weight`, which overflows for integer
            // weights.
            if dist[u] == W::inf() {
                continue;
            }

            let next_dist = dist[u].clone() + weight.clone();

            // Relax if better.
            if next_dist < dist[v] {
                dist[v] = next_dist;
                pred[v] = Some(u);
                relaxed = true;
            }
        }

        // If no distance was improved, then subsequent iterations would not
        // improve as well. So we can terminate early.
        if !relaxed {
            terminated_early = true;
            break;
        }
    }

    // Check for negative cycles. If the main loop was terminated early, then
    // the absence of cycle is guaranteed.
    if !terminated_early {
        for (u, v, weight) in graph.edges() {
            if dist[u] == W::inf() {
                continue;
            }

            if dist[u].clone() + weight.clone() < dist[v] {
                return Err(Error::NegativeCycle);
            }
        }
    }

    Ok(ShortestPaths { source, dist, pred })
}
