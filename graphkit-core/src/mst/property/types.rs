//! Fixture and distribution types for the spanning tree property tests.

use test_strategy::Arbitrary;

use crate::{Edge, Graph};

/// Weight and topology profile used when synthesising a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Every edge carries a distinct weight, so the minimum tree is unique.
    #[weight(2)]
    Unique,
    /// Edges draw from a pool of one to three weights, stressing tie-breaks.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning path plus roughly `n / 2` to `n` extra edges.
    #[weight(2)]
    Sparse,
    /// Close to a complete graph.
    #[weight(2)]
    Dense,
    /// Two to five components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Weights straddle zero.
    #[weight(1)]
    Negative,
}

/// A generated undirected graph together with the edges that built it.
///
/// `edges` holds each undirected edge once with `from < to`, and no pair
/// appears twice, so it matches `graph.edges()` as a set.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
    pub distribution: WeightDistribution,
}

impl MstFixture {
    pub(super) fn graph(&self) -> Graph {
        Graph::from_edges(&self.edges, self.vertex_count)
    }
}
