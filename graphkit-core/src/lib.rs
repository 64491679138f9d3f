//! Graphkit core library.
//!
//! Directed and undirected graphs over a dense vertex set `1..=N`, with
//! breadth-first and Dijkstra shortest paths, Prim and Kruskal minimum spanning
//! trees, and the union-find structure Kruskal relies on.
//!
//! Vertex `0` is a sentinel meaning "no predecessor". Passing it, or any id
//! above `N`, to a graph operation is a programming error: the plain methods
//! panic, and the `try_*` methods report a [`GraphError`] instead.
//! Unreachable vertices and disconnected graphs are not errors; they show up
//! as missing distances or as spanning trees with fewer than `N - 1` edges.

mod adjacency;
mod builder;
mod digraph;
mod disjoint_set;
mod edge;
mod error;
mod frontier;
mod graph;
mod mst;
mod path;
mod solver;
#[cfg(test)]
mod test_utils;

pub use crate::{
    adjacency::Adjacency,
    builder::SolverBuilder,
    digraph::Digraph,
    disjoint_set::DisjointSet,
    edge::{Edge, Weight},
    error::{GraphError, GraphErrorCode, Result},
    frontier::FrontierStrategy,
    graph::Graph,
    mst::SpanningTree,
    path::ShortestPathTree,
    solver::Solver,
};
