//! Positive-weighted single-source shortest paths (Dijkstra).
//!
//! Correct only for non-negative weights. Negative weights are not detected:
//! a finalised vertex is never revisited, so its distance may end up too
//! large.

use tracing::{debug, trace};

use crate::{
    adjacency::Adjacency,
    frontier::{FrontierStrategy, Settled, settle},
};

use super::ShortestPathTree;

/// Builds the weighted shortest-path tree from `source`, which must already
/// be validated.
pub(crate) fn dijkstra<A>(graph: &A, source: usize, strategy: FrontierStrategy) -> ShortestPathTree
where
    A: Adjacency + ?Sized,
{
    let mut reached = 1_usize;
    let labels = settle(
        graph,
        source,
        strategy,
        |distance, weight| distance.saturating_add(weight),
        |settled: Settled| {
            reached += 1;
            trace!(
                vertex = settled.vertex,
                parent = settled.parent,
                distance = settled.key,
                "vertex finalised"
            );
        },
    );

    debug!(reached, "dijkstra completed");
    ShortestPathTree::new(source, labels.keys, labels.parents)
}
