//! Sequential Kruskal oracle for spanning tree verification.
//!
//! Deliberately avoids [`crate::DisjointSet`]: components are tracked with a
//! flat label vector that is relabelled on every merge. Quadratic, but
//! trivially correct for the graph sizes the properties generate.

use crate::{Edge, Weight};

/// Outcome of the oracle run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct OracleForest {
    pub total_weight: Weight,
    pub edge_count: usize,
    pub component_count: usize,
}

/// Computes a minimum spanning forest over `1..=vertex_count`.
///
/// Self-loops and out-of-range endpoints are ignored.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[Edge]) -> OracleForest {
    let mut sorted: Vec<(Weight, usize, usize)> = edges
        .iter()
        .filter(|edge| edge.from() != edge.to())
        .filter(|edge| (1..=vertex_count).contains(&edge.from()))
        .filter(|edge| (1..=vertex_count).contains(&edge.to()))
        .map(|edge| {
            let (low, high) = (edge.from().min(edge.to()), edge.from().max(edge.to()));
            (edge.weight(), low, high)
        })
        .collect();
    sorted.sort_unstable();

    let mut labels: Vec<usize> = (0..=vertex_count).collect();
    let mut forest = OracleForest {
        total_weight: 0,
        edge_count: 0,
        component_count: vertex_count,
    };
    for (weight, left, right) in sorted {
        let (keep, drop) = (labels[left], labels[right]);
        if keep == drop {
            continue;
        }
        for label in &mut labels {
            if *label == drop {
                *label = keep;
            }
        }
        forest.total_weight += weight;
        forest.edge_count += 1;
        forest.component_count -= 1;
    }
    forest
}

/// Returns the vertices reachable from `root` using `edges` in either
/// direction, as a membership mask indexed by vertex id.
pub(super) fn component_of(vertex_count: usize, edges: &[Edge], root: usize) -> Vec<bool> {
    let mut member = vec![false; vertex_count + 1];
    member[root] = true;
    let mut grew = true;
    while grew {
        grew = false;
        for edge in edges {
            let (from, to) = (edge.from(), edge.to());
            if member[from] != member[to] {
                member[from] = true;
                member[to] = true;
                grew = true;
            }
        }
    }
    member
}
