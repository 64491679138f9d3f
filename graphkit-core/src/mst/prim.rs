//! Prim's algorithm.

use tracing::{debug, trace};

use crate::{
    adjacency::Adjacency,
    frontier::{FrontierStrategy, Settled, settle},
};

use super::SpanningTree;

/// Grows a minimum spanning tree from `root`, which must already be
/// validated. Each vertex's key is the weight of the lightest edge joining it
/// to the tree so far.
pub(crate) fn prim<A>(graph: &A, root: usize, strategy: FrontierStrategy) -> SpanningTree
where
    A: Adjacency + ?Sized,
{
    let mut tree = SpanningTree::with_capacity(graph.vertex_count());
    settle(
        graph,
        root,
        strategy,
        |_, weight| weight,
        |settled: Settled| {
            trace!(
                from = settled.parent,
                to = settled.vertex,
                weight = settled.key,
                "edge accepted"
            );
            tree.accept(settled.edge());
        },
    );

    debug!(
        accepted = tree.edges().len(),
        total_weight = tree.total_weight(),
        "prim completed"
    );
    tree
}
