//! Unweighted single-source shortest paths (breadth-first search).

use std::collections::VecDeque;

use tracing::debug;

use crate::{adjacency::Adjacency, edge::Weight};

use super::ShortestPathTree;

/// Builds the hop-count shortest-path tree from `source`, which must already
/// be validated. Edge weights are ignored.
pub(crate) fn breadth_first<A>(graph: &A, source: usize) -> ShortestPathTree
where
    A: Adjacency + ?Sized,
{
    let vertex_count = graph.vertex_count();
    let mut distances: Vec<Option<Weight>> = vec![None; vertex_count + 1];
    let mut predecessors = vec![0; vertex_count + 1];

    distances[source] = Some(0);
    let mut queue = VecDeque::from([(source, 0)]);
    let mut reached = 1_usize;

    while let Some((vertex, hops)) = queue.pop_front() {
        for edge in graph.outgoing(vertex) {
            let head = edge.to();
            if distances[head].is_none() {
                distances[head] = Some(hops + 1);
                predecessors[head] = vertex;
                queue.push_back((head, hops + 1));
                reached += 1;
            }
        }
    }

    debug!(reached, "breadth-first search completed");
    ShortestPathTree::new(source, distances, predecessors)
}
