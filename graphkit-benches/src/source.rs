//! Synthetic graph generation for benchmarking.
//!
//! Provides [`SyntheticGraph`], a seeded edge set over `1..=N` that can be
//! loaded into either a [`Digraph`] or a [`Graph`]. Every vertex above 1 is
//! linked to a lower-numbered vertex, so the undirected form is connected and
//! every vertex is reachable from vertex 1 in the directed form.

use graphkit_core::{Digraph, Edge, Graph, GraphError, Weight};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// Fewer than two vertices were requested.
    #[error("vertex count must be at least 2, got {got}")]
    TooFewVertices {
        /// Requested vertex count.
        got: usize,
    },
    /// The requested out-degree was zero.
    #[error("out-degree must be greater than zero")]
    ZeroOutDegree,
    /// The weight ceiling was not positive.
    #[error("max weight must be positive, got {got}")]
    NonPositiveWeight {
        /// Requested ceiling.
        got: Weight,
    },
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges generated per vertex, including the link to a lower vertex.
    pub out_degree: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A seeded random edge set for benchmarking.
///
/// # Examples
///
/// ```
/// use graphkit_benches::source::{SyntheticGraph, SyntheticGraphConfig};
///
/// let config = SyntheticGraphConfig {
///     vertex_count: 10,
///     out_degree: 3,
///     max_weight: 20,
///     seed: 42,
/// };
/// let synthetic = SyntheticGraph::generate(&config).expect("valid config");
/// let graph = synthetic.graph().expect("generated edges stay in range");
/// assert_eq!(graph.mst_kruskal().edges().len(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl SyntheticGraph {
    /// Generates edges eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError`] when the vertex count is below 2, the
    /// out-degree is zero or the weight ceiling is not positive.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        if config.vertex_count < 2 {
            return Err(SyntheticError::TooFewVertices {
                got: config.vertex_count,
            });
        }
        if config.out_degree == 0 {
            return Err(SyntheticError::ZeroOutDegree);
        }
        if config.max_weight <= 0 {
            return Err(SyntheticError::NonPositiveWeight {
                got: config.max_weight,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let n = config.vertex_count;
        let mut edges = Vec::with_capacity(n.saturating_mul(config.out_degree));
        for to in 2..=n {
            let from = rng.gen_range(1..to);
            edges.push(Edge::new(from, to, rng.gen_range(1..=config.max_weight)));
        }
        for from in 1..=n {
            for _ in 1..config.out_degree {
                let to = rng.gen_range(1..=n);
                if to == from {
                    continue;
                }
                edges.push(Edge::new(from, to, rng.gen_range(1..=config.max_weight)));
            }
        }
        Ok(Self {
            vertex_count: n,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the generated edges in generation order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Loads the edges into a directed graph.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from graph construction.
    pub fn digraph(&self) -> Result<Digraph, GraphError> {
        Digraph::try_from_edges(&self.edges, self.vertex_count)
    }

    /// Loads the edges into an undirected graph.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from graph construction.
    pub fn graph(&self) -> Result<Graph, GraphError> {
        Graph::try_from_edges(&self.edges, self.vertex_count)
    }
}
