//! Undirected graphs over the vertices `1..=N`.
//!
//! Each logical edge `{u, v}` is stored as the directed pair `(u, v)` and
//! `(v, u)`, so the adjacency store stays symmetric and the logical edge count
//! is half the number of stored entries.

use crate::{
    adjacency::{Adjacency, AdjacencyTable},
    edge::Edge,
    error::{GraphError, Result, require},
    mst::SpanningTree,
    solver::Solver,
};

/// An undirected, weighted graph with a fixed vertex set `1..=N`.
///
/// # Examples
/// ```
/// use graphkit_core::{Edge, Graph};
///
/// let graph = Graph::from_edges(
///     &[Edge::new(1, 2, 1), Edge::new(2, 3, 2), Edge::new(1, 3, 3)],
///     3,
/// );
/// assert_eq!(graph.mst_kruskal().total_weight(), 3);
/// assert_eq!(graph.mst_prim().total_weight(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    table: AdjacencyTable,
}

impl Graph {
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
    /// Returns [`GraphError::InvalidVertexCount`] when `vertex_count` is zero
    /// and [`GraphError::VertexCountTooLarge`] when the adjacency lists cannot
    /// be allocated.
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            table: AdjacencyTable::try_new(vertex_count)?,
        })
    }

    /// Creates a graph with `vertex_count` vertices holding `edges`.
    ///
    /// # Panics
    /// Panics when `vertex_count` is zero or an edge is invalid.
    #[must_use]
    #[track_caller]
    pub fn from_edges(edges: &[Edge], vertex_count: usize) -> Self {
        require(Self::try_from_edges(edges, vertex_count))
    }

    /// Fallible counterpart of [`Self::from_edges`].
    ///
    /// # Errors
    /// Returns the first [`GraphError`] raised by construction or insertion.
    pub fn try_from_edges(edges: &[Edge], vertex_count: usize) -> Result<Self> {
        let mut graph = Self::try_new(vertex_count)?;
        for edge in edges {
            graph.try_insert_edge(*edge)?;
        }
        Ok(graph)
    }

    /// Inserts the undirected edge `{edge.from(), edge.to()}`, updating its
    /// weight in both directions when it already exists.
    ///
    /// # Panics
    /// Panics when an endpoint is out of range or the edge is a self-loop.
    #[track_caller]
    pub fn insert_edge(&mut self, edge: Edge) {
        require(self.try_insert_edge(edge));
    }

    /// Fallible counterpart of [`Self::insert_edge`].
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for invalid endpoints and
    /// [`GraphError::SelfLoop`] when both endpoints coincide.
    pub fn try_insert_edge(&mut self, edge: Edge) -> Result<()> {
        self.check_undirected(&edge)?;
        self.table.upsert(edge);
        self.table.upsert(edge.reverse());
        Ok(())
    }

    /// Removes the undirected edge `{edge.from(), edge.to()}`.
    ///
    /// # Panics
    /// Panics when an endpoint is out of range or the edge is absent.
    #[track_caller]
    pub fn remove_edge(&mut self, edge: Edge) {
        require(self.try_remove_edge(edge));
    }

    /// Fallible counterpart of [`Self::remove_edge`]. Returns the removed
    /// edge, oriented as requested, with its stored weight.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for invalid endpoints,
    /// [`GraphError::SelfLoop`] for self-loops and
    /// [`GraphError::EdgeNotFound`] when the edge is not stored.
    pub fn try_remove_edge(&mut self, edge: Edge) -> Result<Edge> {
        self.check_undirected(&edge)?;
        let removed = self.table.remove(&edge)?;
        self.table.remove(&edge.reverse())?;
        Ok(removed)
    }

    /// Returns `true` when `{edge.from(), edge.to()}` is present.
    #[must_use]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.table.contains(&edge)
    }

    /// Iterates each logical edge once, oriented so that `from < to`.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.table.iter().filter(|edge| edge.from() < edge.to())
    }

    /// Builds a minimum spanning tree rooted at vertex 1 with Prim's
    /// algorithm.
    ///
    /// A disconnected graph yields a tree over vertex 1's component only.
    #[must_use]
    pub fn mst_prim(&self) -> SpanningTree {
        require(Solver::default().prim(self))
    }

    /// Builds a minimum spanning tree with Kruskal's algorithm.
    ///
    /// A disconnected graph yields a spanning forest with fewer than `N - 1`
    /// edges.
    #[must_use]
    pub fn mst_kruskal(&self) -> SpanningTree {
        Solver::default().kruskal(self)
    }

    fn check_undirected(&self, edge: &Edge) -> Result<()> {
        self.table.check_edge(edge)?;
        if edge.from() == edge.to() {
            return Err(GraphError::SelfLoop {
                vertex: edge.from(),
            });
        }
        Ok(())
    }
}

impl Adjacency for Graph {
    fn vertex_count(&self) -> usize {
        self.table.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.table.entries() / 2
    }

    fn outgoing(&self, vertex: usize) -> &[Edge] {
        self.table.outgoing(vertex)
    }
}
