//! Vertex finalisation loop shared by Dijkstra and Prim.
//!
//! Both algorithms grow a set of finalised vertices from a root. After each
//! finalisation the outgoing edges of the new vertex are relaxed, then the
//! unfinished vertex with the smallest key is finalised next; equal keys go to
//! the lowest vertex id. They only differ in how a candidate key is derived
//! from the current key and the edge weight.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    adjacency::Adjacency,
    edge::{Edge, Weight},
};

/// How the next vertex to finalise is selected.
///
/// Both strategies finalise vertices in the same order, so results are
/// identical; only the running time differs.
///
/// # Examples
/// ```
/// use graphkit_core::FrontierStrategy;
///
/// assert_eq!(FrontierStrategy::default(), FrontierStrategy::LinearScan);
/// assert_eq!(FrontierStrategy::BinaryHeap.as_str(), "binary_heap");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FrontierStrategy {
    /// Scan every vertex for the smallest key: `O(N)` per step, `O(N²)`
    /// overall.
    #[default]
    LinearScan,
    /// Keep candidates in a binary heap with lazy deletion:
    /// `O((N + E) log E)` overall.
    BinaryHeap,
}

impl FrontierStrategy {
    /// Returns the stable identifier used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LinearScan => "linear_scan",
            Self::BinaryHeap => "binary_heap",
        }
    }
}

/// Per-run labels indexed by vertex id; slot `0` is unused.
#[derive(Debug)]
pub(crate) struct Labels {
    pub(crate) keys: Vec<Option<Weight>>,
    pub(crate) parents: Vec<usize>,
    done: Vec<bool>,
}

impl Labels {
    fn new(vertex_count: usize) -> Self {
        Self {
            keys: vec![None; vertex_count + 1],
            parents: vec![0; vertex_count + 1],
            done: vec![false; vertex_count + 1],
        }
    }
}

/// A vertex that has just been finalised.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Settled {
    pub(crate) vertex: usize,
    pub(crate) parent: usize,
    pub(crate) key: Weight,
}

impl Settled {
    /// The tree edge that attached this vertex.
    pub(crate) const fn edge(self) -> Edge {
        Edge::new(self.parent, self.vertex, self.key)
    }
}

trait Frontier {
    fn improved(&mut self, vertex: usize, key: Weight);

    fn pop(&mut self, labels: &Labels) -> Option<(usize, Weight)>;
}

struct LinearScan;

impl Frontier for LinearScan {
    fn improved(&mut self, _vertex: usize, _key: Weight) {}

    fn pop(&mut self, labels: &Labels) -> Option<(usize, Weight)> {
        let mut best: Option<(usize, Weight)> = None;
        for (vertex, key) in labels.keys.iter().enumerate().skip(1) {
            if labels.done[vertex] {
                continue;
            }
            let Some(key) = *key else {
                continue;
            };
            // Strict comparison keeps the first, lowest-indexed minimum.
            if best.is_none_or(|(_, best_key)| key < best_key) {
                best = Some((vertex, key));
            }
        }
        best
    }
}

#[derive(Default)]
struct HeapFrontier {
    heap: BinaryHeap<Reverse<(Weight, usize)>>,
}

impl Frontier for HeapFrontier {
    fn improved(&mut self, vertex: usize, key: Weight) {
        self.heap.push(Reverse((key, vertex)));
    }

    fn pop(&mut self, labels: &Labels) -> Option<(usize, Weight)> {
        while let Some(Reverse((key, vertex))) = self.heap.pop() {
            if !labels.done[vertex] && labels.keys[vertex] == Some(key) {
                return Some((vertex, key));
            }
        }
        None
    }
}

/// Finalises every vertex reachable from `root`.
///
/// `relax(current_key, edge_weight)` yields the candidate key for the edge's
/// head; it replaces the head's key when strictly smaller. `on_settle` runs
/// once per finalised vertex other than the root, in finalisation order.
pub(crate) fn settle<A, R, S>(
    graph: &A,
    root: usize,
    strategy: FrontierStrategy,
    relax: R,
    on_settle: S,
) -> Labels
where
    A: Adjacency + ?Sized,
    R: Fn(Weight, Weight) -> Weight,
    S: FnMut(Settled),
{
    match strategy {
        FrontierStrategy::LinearScan => run(graph, root, LinearScan, relax, on_settle),
        FrontierStrategy::BinaryHeap => {
            run(graph, root, HeapFrontier::default(), relax, on_settle)
        }
    }
}

fn run<A, F, R, S>(graph: &A, root: usize, mut frontier: F, relax: R, mut on_settle: S) -> Labels
where
    A: Adjacency + ?Sized,
    F: Frontier,
    R: Fn(Weight, Weight) -> Weight,
    S: FnMut(Settled),
{
    let mut labels = Labels::new(graph.vertex_count());
    labels.keys[root] = Some(0);
    labels.done[root] = true;

    let (mut current, mut current_key) = (root, 0);
    loop {
        for edge in graph.outgoing(current) {
            let head = edge.to();
            if labels.done[head] {
                continue;
            }
            let candidate = relax(current_key, edge.weight());
            if labels.keys[head].is_none_or(|key| candidate < key) {
                labels.keys[head] = Some(candidate);
                labels.parents[head] = current;
                frontier.improved(head, candidate);
            }
        }

        let Some((next, key)) = frontier.pop(&labels) else {
            break;
        };
        labels.done[next] = true;
        on_settle(Settled {
            vertex: next,
            parent: labels.parents[next],
            key,
        });
        (current, current_key) = (next, key);
    }
    labels
}
