//! Minimum spanning tree construction.
//!
//! Two sequential algorithms are provided. Prim grows a tree from a single
//! root and therefore only spans the root's component. Kruskal scans edges in
//! ascending `(weight, from, to)` order and rejects cycle-forming edges with a
//! [`crate::DisjointSet`], producing a spanning forest on disconnected input.
//! On a connected graph both yield the same total weight.

mod kruskal;
mod prim;
#[cfg(test)]
mod property;

pub(crate) use self::{kruskal::kruskal, prim::prim};

use crate::edge::{Edge, Weight};

/// Edges accepted by a spanning tree algorithm, in acceptance order.
///
/// When the input graph is connected, this is a minimum spanning tree with
/// exactly `N - 1` edges.
///
/// # Examples
/// ```
/// use graphkit_core::{Edge, Graph};
///
/// let graph = Graph::from_edges(&[Edge::new(1, 2, 5), Edge::new(3, 4, 1)], 4);
/// let forest = graph.mst_kruskal();
/// assert_eq!(forest.edges(), &[Edge::new(3, 4, 1), Edge::new(1, 2, 5)]);
/// assert_eq!(forest.total_weight(), 6);
/// assert!(!forest.is_spanning());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    vertex_count: usize,
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl SpanningTree {
    fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
            total_weight: 0,
        }
    }

    fn accept(&mut self, edge: Edge) {
        self.total_weight = self.total_weight.saturating_add(edge.weight());
        self.edges.push(edge);
    }

    /// Returns the accepted edges in the order they were accepted.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of the accepted edge weights, saturating at the
    /// bounds of [`Weight`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of vertices `N` of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns `true` when the tree connects all `N` vertices.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }
}
