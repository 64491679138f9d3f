//! Benchmark parameter labels.

use std::fmt;

use graphkit_core::FrontierStrategy;

/// Shape of a synthetic benchmark graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Outgoing edges generated per vertex.
    pub out_degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.out_degree)
    }
}

/// A graph shape paired with the frontier strategy under test.
#[derive(Clone, Copy, Debug)]
pub struct SolverBenchParams {
    /// Graph shape.
    pub graph: GraphBenchParams,
    /// Frontier strategy used by Dijkstra or Prim.
    pub strategy: FrontierStrategy,
}

impl fmt::Display for SolverBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.graph, self.strategy.as_str())
    }
}
