//! Structural checks on spanning trees and forests.
//!
//! For every generated graph, the Kruskal forest and the Prim tree must:
//!
//! - only use edges present in the graph, with their stored weights;
//! - contain no cycle;
//! - report a total weight equal to the sum of their edges;
//! - have `V - C` edges, where `C` counts the components they cover.
//!
//! Kruskal edges are additionally oriented `from < to`, and every Prim edge
//! must attach a new vertex to one already in the tree.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use proptest::{prop_assert, prop_assert_eq};

use crate::{Adjacency, Graph, SpanningTree, Weight};

use super::oracle::{component_of, sequential_kruskal};
use super::types::MstFixture;

pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();

    let forest = graph.mst_kruskal();
    validate_edges_exist(&graph, &forest)?;
    validate_total_weight(&forest)?;
    validate_acyclic(fixture.vertex_count, &forest)?;
    for edge in forest.edges() {
        prop_assert!(edge.from() < edge.to(), "kruskal edge {:?} not canonical", edge);
    }
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);
    prop_assert_eq!(
        forest.edges().len(),
        fixture.vertex_count - oracle.component_count,
        "forest edge count mismatch ({:?})",
        fixture.distribution
    );
    prop_assert_eq!(forest.is_spanning(), oracle.component_count == 1);

    let tree = graph.mst_prim();
    validate_edges_exist(&graph, &tree)?;
    validate_total_weight(&tree)?;
    validate_grows_from_root(fixture.vertex_count, &tree)?;
    let reached = component_of(fixture.vertex_count, &fixture.edges, 1)
        .iter()
        .filter(|&&member| member)
        .count();
    prop_assert_eq!(tree.edges().len(), reached - 1);
    Ok(())
}

fn validate_edges_exist(graph: &Graph, tree: &SpanningTree) -> TestCaseResult {
    for edge in tree.edges() {
        prop_assert!(edge.from() != edge.to(), "self-loop {:?} in tree", edge);
        let stored = graph_weight(graph, edge.from(), edge.to());
        prop_assert_eq!(stored, Some(edge.weight()), "edge {:?} not in graph", edge);
    }
    Ok(())
}

fn validate_total_weight(tree: &SpanningTree) -> TestCaseResult {
    let sum: Weight = tree.edges().iter().map(|edge| edge.weight()).sum();
    prop_assert_eq!(tree.total_weight(), sum);
    Ok(())
}

fn validate_acyclic(vertex_count: usize, tree: &SpanningTree) -> TestCaseResult {
    let mut labels: Vec<usize> = (0..=vertex_count).collect();
    for edge in tree.edges() {
        let (keep, drop) = (labels[edge.from()], labels[edge.to()]);
        if keep == drop {
            return Err(TestCaseError::fail(format!("edge {edge:?} closes a cycle")));
        }
        for label in &mut labels {
            if *label == drop {
                *label = keep;
            }
        }
    }
    Ok(())
}

fn validate_grows_from_root(vertex_count: usize, tree: &SpanningTree) -> TestCaseResult {
    let mut in_tree = vec![false; vertex_count + 1];
    in_tree[1] = true;
    for edge in tree.edges() {
        prop_assert!(in_tree[edge.from()], "prim edge {:?} starts outside the tree", edge);
        prop_assert!(!in_tree[edge.to()], "prim edge {:?} revisits a vertex", edge);
        in_tree[edge.to()] = true;
    }
    Ok(())
}

fn graph_weight(graph: &Graph, from: usize, to: usize) -> Option<Weight> {
    graph
        .outgoing(from)
        .iter()
        .find(|edge| edge.to() == to)
        .map(|edge| edge.weight())
}
