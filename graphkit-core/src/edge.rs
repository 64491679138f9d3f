//! Weighted edges shared by the directed and undirected graphs.

use std::cmp::Ordering;

/// Integer edge weight. Path lengths accumulate in the same type.
pub type Weight = i64;

/// A directed, weighted edge `(from, to, weight)`.
///
/// Undirected graphs store each logical edge as a symmetric pair of these.
/// Two edges *link the same nodes* when their `(from, to)` pairs match; that
/// identity drives duplicate detection, whereas [`PartialEq`] compares all
/// three fields.
///
/// Edges order by `(weight, from, to)`, which gives Kruskal a deterministic
/// tie-break between equal weights.
///
/// # Examples
/// ```
/// use graphkit_core::Edge;
///
/// let edge = Edge::new(1, 2, 7);
/// assert_eq!(edge.reverse(), Edge::new(2, 1, 7));
/// assert!(edge.links_same_nodes(&Edge::new(1, 2, 3)));
/// assert!(Edge::new(3, 4, 1) < edge);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    from: usize,
    to: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge from `from` to `to` carrying `weight`.
    #[must_use]
    pub const fn new(from: usize, to: usize, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Returns the tail vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the head vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the same edge pointing the other way.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }

    /// Returns `true` when both edges join the same `(from, to)` pair.
    #[must_use]
    pub const fn links_same_nodes(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }

    pub(crate) const fn with_weight(self, weight: Weight) -> Self {
        Self { weight, ..self }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
