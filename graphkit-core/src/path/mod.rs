//! Single-source shortest paths.
//!
//! [`ShortestPathTree`] is the value returned by every path-finding run. It is
//! computed fresh on each call and owns its arrays, so results never alias
//! state from a previous run or a later mutation of the graph.

mod bfs;
mod dijkstra;

pub(crate) use self::{bfs::breadth_first, dijkstra::dijkstra};

use crate::edge::Weight;

/// Shortest-path tree rooted at a source vertex.
///
/// The raw views mirror the classic `dist[]`/`path[]` arrays: index `0` is
/// unused, an unreached vertex has no distance, and `0` in the predecessor
/// array means "no predecessor" (the source itself or an unreached vertex).
///
/// # Examples
/// ```
/// use graphkit_core::{Digraph, Edge};
///
/// let graph = Digraph::from_edges(&[Edge::new(1, 2, 4), Edge::new(2, 3, 1)], 4);
/// let tree = graph.weighted_sssp(1);
/// assert_eq!(tree.distances(), &[None, Some(0), Some(4), Some(5), None]);
/// assert_eq!(tree.predecessors(), &[0, 0, 1, 2, 0]);
/// assert_eq!(tree.hops_to(3), Some(2));
/// assert!(!tree.is_reachable(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: usize,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<usize>,
}

impl ShortestPathTree {
    pub(crate) fn new(
        source: usize,
        distances: Vec<Option<Weight>>,
        predecessors: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        Self {
            source,
            distances,
            predecessors,
        }
    }

    /// Returns the source vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the number of vertices `N` in the graph the tree was built on.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.distances.len().saturating_sub(1)
    }

    /// Returns the shortest distance from the source to `vertex`, or `None`
    /// when `vertex` is unreached or not a vertex of the graph.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<Weight> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns the predecessor of `vertex` on its shortest path, or `None`
    /// for the source, unreached vertices and invalid ids.
    #[must_use]
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors
            .get(vertex)
            .copied()
            .filter(|&parent| parent != 0)
    }

    /// Returns `true` when `vertex` was reached from the source.
    #[must_use]
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Raw distance array indexed by vertex id.
    #[must_use]
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.distances
    }

    /// Raw predecessor array indexed by vertex id; `0` encodes "none".
    #[must_use]
    pub fn predecessors(&self) -> &[usize] {
        &self.predecessors
    }

    /// Returns the vertices on the shortest path from the source to `target`,
    /// both ends included, or `None` when `target` is unreached.
    ///
    /// The predecessor chain is walked iteratively, so arbitrarily deep trees
    /// are fine.
    #[must_use]
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.predecessor(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Returns the number of edges on the shortest path to `target`.
    #[must_use]
    pub fn hops_to(&self, target: usize) -> Option<usize> {
        self.path_to(target).map(|path| path.len() - 1)
    }

    /// Iterates `(vertex, distance, predecessor)` rows for `1..=N`.
    pub fn rows(&self) -> impl Iterator<Item = (usize, Option<Weight>, Option<usize>)> + '_ {
        (1..self.distances.len())
            .map(|vertex| (vertex, self.distance(vertex), self.predecessor(vertex)))
    }
}
