//! Kruskal's algorithm.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, trace};

use crate::{adjacency::Adjacency, disjoint_set::DisjointSet};

use super::SpanningTree;

/// Builds a minimum spanning forest.
///
/// Every undirected edge is taken once, in its `from < to` orientation, and
/// fed through a min-heap ordered by `(weight, from, to)`. The loop stops once
/// `N - 1` edges are accepted or the heap runs dry.
pub(crate) fn kruskal<A>(graph: &A) -> SpanningTree
where
    A: Adjacency + ?Sized,
{
    let vertex_count = graph.vertex_count();
    let mut heap: BinaryHeap<_> = (1..=vertex_count)
        .flat_map(move |vertex| graph.outgoing(vertex))
        .filter(|edge| edge.from() < edge.to())
        .map(|edge| Reverse(*edge))
        .collect();
    let candidates = heap.len();

    let mut sets = DisjointSet::new(vertex_count + 1);
    let mut tree = SpanningTree::with_capacity(vertex_count);
    let wanted = vertex_count.saturating_sub(1);
    let mut rejected = 0_usize;

    while tree.edges().len() < wanted {
        let Some(Reverse(edge)) = heap.pop() else {
            break;
        };
        let from_root = sets.find(edge.from());
        let to_root = sets.find(edge.to());
        if from_root == to_root {
            rejected += 1;
            trace!(
                from = edge.from(),
                to = edge.to(),
                weight = edge.weight(),
                "edge would close a cycle"
            );
            continue;
        }
        sets.union(from_root, to_root);
        trace!(
            from = edge.from(),
            to = edge.to(),
            weight = edge.weight(),
            "edge accepted"
        );
        tree.accept(edge);
    }

    debug!(
        candidates,
        accepted = tree.edges().len(),
        rejected,
        total_weight = tree.total_weight(),
        "kruskal completed"
    );
    tree
}
