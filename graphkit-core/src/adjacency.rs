//! Adjacency storage consumed by the graph algorithms.
//!
//! [`Adjacency`] is the read-only view every algorithm runs against.
//! [`AdjacencyTable`] is the per-vertex edge list behind [`crate::Digraph`]
//! and [`crate::Graph`].

use crate::{
    edge::{Edge, Weight},
    error::{GraphError, Result},
};

/// Read-only access to a graph over the vertices `1..=vertex_count()`.
///
/// Algorithms only ever call these methods, so any dense adjacency
/// representation can be plugged in.
///
/// # Examples
/// ```
/// use graphkit_core::{Adjacency, Edge, Solver};
///
/// struct Chain(Vec<Vec<Edge>>);
///
/// impl Adjacency for Chain {
///     fn vertex_count(&self) -> usize { self.0.len() - 1 }
///     fn edge_count(&self) -> usize { self.0.iter().map(Vec::len).sum() }
///     fn outgoing(&self, vertex: usize) -> &[Edge] { &self.0[vertex] }
/// }
///
/// let chain = Chain(vec![vec![], vec![Edge::new(1, 2, 4)], vec![]]);
/// let tree = Solver::default().dijkstra(&chain, 1)?;
/// assert_eq!(tree.distance(2), Some(4));
/// # Ok::<(), graphkit_core::GraphError>(())
/// ```
pub trait Adjacency {
    /// Returns the number of vertices `N`; valid ids are `1..=N`.
    fn vertex_count(&self) -> usize;

    /// Returns the number of logical edges.
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of `vertex` in insertion order.
    ///
    /// Callers only pass ids in `1..=vertex_count()`.
    fn outgoing(&self, vertex: usize) -> &[Edge];

    /// Checks that `vertex` is a real vertex of this graph.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for `0` or ids above
    /// [`Self::vertex_count`].
    fn check_vertex(&self, vertex: usize) -> Result<()> {
        let vertex_count = self.vertex_count();
        if vertex == 0 || vertex > vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
        Ok(())
    }
}

impl<A: Adjacency + ?Sized> Adjacency for &A {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn outgoing(&self, vertex: usize) -> &[Edge] {
        (**self).outgoing(vertex)
    }
}

/// Dense per-vertex edge lists. Slot `0` exists but never holds edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AdjacencyTable {
    lists: Vec<Vec<Edge>>,
    entries: usize,
}

/// What happened when an edge was written into the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Upsert {
    Inserted,
    Updated { previous: Weight },
}

impl AdjacencyTable {
    pub(crate) fn try_new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount { got: vertex_count });
        }
        let too_large = || GraphError::VertexCountTooLarge { got: vertex_count };
        let slots = vertex_count.checked_add(1).ok_or_else(too_large)?;
        let mut lists = Vec::new();
        lists.try_reserve_exact(slots).map_err(|_| too_large())?;
        lists.resize_with(slots, Vec::new);
        Ok(Self { lists, entries: 0 })
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.lists.len() - 1
    }

    /// Number of directed entries across all lists.
    pub(crate) const fn entries(&self) -> usize {
        self.entries
    }

    pub(crate) fn check_edge(&self, edge: &Edge) -> Result<()> {
        self.check_vertex(edge.from())?;
        self.check_vertex(edge.to())
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        let vertex_count = self.vertex_count();
        if vertex == 0 || vertex > vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
        Ok(())
    }

    /// Inserts `edge`, or overwrites the weight of the entry linking the same
    /// nodes. Endpoints must already be validated.
    pub(crate) fn upsert(&mut self, edge: Edge) -> Upsert {
        let list = &mut self.lists[edge.from()];
        if let Some(existing) = list.iter_mut().find(|stored| stored.links_same_nodes(&edge)) {
            let previous = existing.weight();
            *existing = existing.with_weight(edge.weight());
            return Upsert::Updated { previous };
        }
        list.push(edge);
        self.entries += 1;
        Upsert::Inserted
    }

    /// Removes the entry linking the same nodes as `edge`. Endpoints must
    /// already be validated.
    pub(crate) fn remove(&mut self, edge: &Edge) -> Result<Edge> {
        let list = &mut self.lists[edge.from()];
        let position = list
            .iter()
            .position(|stored| stored.links_same_nodes(edge))
            .ok_or(GraphError::EdgeNotFound {
                from: edge.from(),
                to: edge.to(),
            })?;
        self.entries -= 1;
        Ok(list.remove(position))
    }

    pub(crate) fn contains(&self, edge: &Edge) -> bool {
        self.lists
            .get(edge.from())
            .is_some_and(|list| list.iter().any(|stored| stored.links_same_nodes(edge)))
    }

    pub(crate) fn outgoing(&self, vertex: usize) -> &[Edge] {
        &self.lists[vertex]
    }

    /// Iterates every stored entry, vertex by vertex.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.lists.iter().flatten()
    }
}
