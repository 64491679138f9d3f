//! Configured entry point for running the graph algorithms.
//!
//! [`Solver`] validates vertex arguments, opens a tracing span per run and
//! dispatches to the algorithm modules. Every run returns a fresh result
//! value; nothing is cached on the solver or the graph between calls.

use std::num::NonZeroUsize;

use tracing::instrument;

use crate::{
    adjacency::Adjacency,
    error::Result,
    frontier::FrontierStrategy,
    mst::{self, SpanningTree},
    path::{self, ShortestPathTree},
};

/// Runs BFS, Dijkstra, Prim and Kruskal against any [`Adjacency`].
///
/// # Examples
/// ```
/// use graphkit_core::{Digraph, Edge, Graph, Solver};
///
/// let solver = Solver::default();
/// let digraph = Digraph::from_edges(
///     &[Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(1, 3, 5)],
///     3,
/// );
/// let hops = solver.breadth_first(&digraph, 1)?;
/// let weighted = solver.dijkstra(&digraph, 1)?;
/// assert_eq!(hops.distances(), &[None, Some(0), Some(1), Some(1)]);
/// assert_eq!(weighted.distances(), &[None, Some(0), Some(1), Some(2)]);
///
/// let graph = Graph::from_edges(
///     &[Edge::new(1, 2, 1), Edge::new(2, 3, 2), Edge::new(1, 3, 3)],
///     3,
/// );
/// assert_eq!(solver.prim(&graph)?.total_weight(), 3);
/// assert_eq!(solver.kruskal(&graph).total_weight(), 3);
/// # Ok::<(), graphkit_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    frontier_strategy: FrontierStrategy,
    prim_root: NonZeroUsize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(FrontierStrategy::default(), NonZeroUsize::MIN)
    }
}

impl Solver {
    pub(crate) const fn new(frontier_strategy: FrontierStrategy, prim_root: NonZeroUsize) -> Self {
        Self {
            frontier_strategy,
            prim_root,
        }
    }

    /// Returns the frontier strategy used by Dijkstra and Prim.
    #[must_use]
    pub const fn frontier_strategy(&self) -> FrontierStrategy {
        self.frontier_strategy
    }

    /// Returns the vertex Prim's algorithm starts from.
    #[must_use]
    pub const fn prim_root(&self) -> NonZeroUsize {
        self.prim_root
    }

    /// Computes hop-count shortest paths from `source`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] when `source` is not a
    /// vertex of `graph`.
    #[instrument(
        name = "core.bfs",
        level = "debug",
        err,
        skip(self, graph),
        fields(vertex_count = graph.vertex_count(), edge_count = graph.edge_count()),
    )]
    pub fn breadth_first<A>(&self, graph: &A, source: usize) -> Result<ShortestPathTree>
    where
        A: Adjacency + ?Sized,
    {
        graph.check_vertex(source)?;
        Ok(path::breadth_first(graph, source))
    }

    /// Computes weighted shortest paths from `source` with Dijkstra's
    /// algorithm.
    ///
    /// Weights must be non-negative. This is the caller's responsibility and
    /// is not checked.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] when `source` is not a
    /// vertex of `graph`.
    #[instrument(
        name = "core.dijkstra",
        level = "debug",
        err,
        skip(self, graph),
        fields(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            strategy = self.frontier_strategy.as_str(),
        ),
    )]
    pub fn dijkstra<A>(&self, graph: &A, source: usize) -> Result<ShortestPathTree>
    where
        A: Adjacency + ?Sized,
    {
        graph.check_vertex(source)?;
        Ok(path::dijkstra(graph, source, self.frontier_strategy))
    }

    /// Builds a minimum spanning tree of the root's component with Prim's
    /// algorithm.
    ///
    /// `graph` is read as undirected, so its adjacency must be symmetric.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] when the configured
    /// root is not a vertex of `graph`.
    #[instrument(
        name = "core.prim",
        level = "debug",
        err,
        skip(self, graph),
        fields(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            root = self.prim_root.get(),
            strategy = self.frontier_strategy.as_str(),
        ),
    )]
    pub fn prim<A>(&self, graph: &A) -> Result<SpanningTree>
    where
        A: Adjacency + ?Sized,
    {
        let root = self.prim_root.get();
        graph.check_vertex(root)?;
        Ok(mst::prim(graph, root, self.frontier_strategy))
    }

    /// Builds a minimum spanning forest with Kruskal's algorithm.
    ///
    /// Only edges stored with `from < to` are considered, which counts every
    /// edge of a symmetric adjacency exactly once.
    #[instrument(
        name = "core.kruskal",
        level = "debug",
        skip(self, graph),
        fields(vertex_count = graph.vertex_count(), edge_count = graph.edge_count()),
    )]
    pub fn kruskal<A>(&self, graph: &A) -> SpanningTree
    where
        A: Adjacency + ?Sized,
    {
        mst::kruskal(graph)
    }
}
