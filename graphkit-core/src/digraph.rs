//! Directed graphs over the vertices `1..=N`.

use crate::{
    adjacency::{Adjacency, AdjacencyTable},
    edge::Edge,
    error::{Result, require},
    path::ShortestPathTree,
    solver::Solver,
};

/// A directed, weighted graph with a fixed vertex set `1..=N`.
///
/// Vertex `0` is reserved as the "no predecessor" sentinel and is rejected
/// everywhere a vertex is expected.
///
/// # Examples
/// ```
/// use graphkit_core::{Digraph, Edge};
///
/// let graph = Digraph::from_edges(
///     &[Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(1, 3, 5)],
///     3,
/// );
/// let hops = graph.unweighted_sssp(1);
/// assert_eq!(hops.distance(3), Some(1));
///
/// let weighted = graph.weighted_sssp(1);
/// assert_eq!(weighted.distance(3), Some(2));
/// assert_eq!(weighted.path_to(3), Some(vec![1, 2, 3]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digraph {
    table: AdjacencyTable,
}

impl Digraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    /// Panics when `vertex_count` is zero.
    #[must_use]
    #[track_caller]
    pub fn new(vertex_count: usize) -> Self {
        require(Self::try_new(vertex_count))
    }

    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertexCount`] when `vertex_count`
    /// is zero and [`crate::GraphError::VertexCountTooLarge`] when the
    /// adjacency lists cannot be allocated.
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            table: AdjacencyTable::try_new(vertex_count)?,
        })
    }

    /// Creates a graph with `vertex_count` vertices holding `edges`.
    ///
    /// Later duplicates of the same `(from, to)` pair overwrite the weight of
    /// earlier ones.
    ///
    /// # Panics
    /// Panics when `vertex_count` is zero or an edge endpoint is out of range.
    #[must_use]
    #[track_caller]
    pub fn from_edges(edges: &[Edge], vertex_count: usize) -> Self {
        require(Self::try_from_edges(edges, vertex_count))
    }

    /// Fallible counterpart of [`Self::from_edges`].
    ///
    /// # Errors
    /// Returns the first [`crate::GraphError`] raised by construction or
    /// insertion.
    pub fn try_from_edges(edges: &[Edge], vertex_count: usize) -> Result<Self> {
        let mut graph = Self::try_new(vertex_count)?;
        for edge in edges {
            graph.try_insert_edge(*edge)?;
        }
        Ok(graph)
    }

    /// Inserts the directed edge `edge`, updating the weight when an edge
    /// linking the same nodes is already present.
    ///
    /// # Panics
    /// Panics when either endpoint lies outside `1..=N`.
    #[track_caller]
    pub fn insert_edge(&mut self, edge: Edge) {
        require(self.try_insert_edge(edge));
    }

    /// Fallible counterpart of [`Self::insert_edge`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] for invalid endpoints.
    pub fn try_insert_edge(&mut self, edge: Edge) -> Result<()> {
        self.table.check_edge(&edge)?;
        self.table.upsert(edge);
        Ok(())
    }

    /// Removes the directed edge linking `edge.from()` to `edge.to()`.
    ///
    /// # Panics
    /// Panics when an endpoint is out of range or the edge is absent.
    #[track_caller]
    pub fn remove_edge(&mut self, edge: Edge) {
        require(self.try_remove_edge(edge));
    }

    /// Fallible counterpart of [`Self::remove_edge`]. Returns the removed
    /// edge with its stored weight.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::VertexOutOfRange`] for invalid endpoints
    /// and [`crate::GraphError::EdgeNotFound`] when no such edge is stored.
    pub fn try_remove_edge(&mut self, edge: Edge) -> Result<Edge> {
        self.table.check_edge(&edge)?;
        self.table.remove(&edge)
    }

    /// Returns `true` when an edge from `edge.from()` to `edge.to()` exists.
    #[must_use]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.table.contains(&edge)
    }

    /// Iterates every edge, grouped by tail vertex in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.table.iter()
    }

    /// Computes the unweighted (hop count) shortest-path tree from `source`.
    ///
    /// # Panics
    /// Panics when `source` lies outside `1..=N`.
    #[must_use]
    #[track_caller]
    pub fn unweighted_sssp(&self, source: usize) -> ShortestPathTree {
        require(Solver::default().breadth_first(self, source))
    }

    /// Computes the weighted shortest-path tree from `source` with Dijkstra's
    /// algorithm.
    ///
    /// Edge weights must be non-negative; this is not checked and negative
    /// weights yield meaningless distances.
    ///
    /// # Panics
    /// Panics when `source` lies outside `1..=N`.
    #[must_use]
    #[track_caller]
    pub fn weighted_sssp(&self, source: usize) -> ShortestPathTree {
        require(Solver::default().dijkstra(self, source))
    }
}

impl Adjacency for Digraph {
    fn vertex_count(&self) -> usize {
        self.table.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.table.entries()
    }

    fn outgoing(&self, vertex: usize) -> &[Edge] {
        self.table.outgoing(vertex)
    }
}
