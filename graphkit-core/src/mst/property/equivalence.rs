//! Oracle equivalence for Prim and Kruskal.
//!
//! Kruskal must match the sequential oracle on total weight, edge count and
//! component count. Prim must match the oracle restricted to the root's
//! component, under both frontier strategies.

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, FrontierStrategy, SolverBuilder};

use super::oracle::{component_of, sequential_kruskal};
use super::types::MstFixture;

pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    let forest = graph.mst_kruskal();
    prop_assert_eq!(
        forest.total_weight(),
        oracle.total_weight,
        "kruskal weight mismatch ({:?}, {} vertices, {} edges)",
        fixture.distribution,
        fixture.vertex_count,
        fixture.edges.len()
    );
    prop_assert_eq!(forest.edges().len(), oracle.edge_count);

    let member = component_of(fixture.vertex_count, &fixture.edges, 1);
    let root_edges: Vec<Edge> = fixture
        .edges
        .iter()
        .filter(|edge| member[edge.from()])
        .copied()
        .collect();
    let root_oracle = sequential_kruskal(fixture.vertex_count, &root_edges);

    for strategy in [FrontierStrategy::LinearScan, FrontierStrategy::BinaryHeap] {
        let solver = SolverBuilder::new()
            .with_frontier_strategy(strategy)
            .build()
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let tree = solver
            .prim(&graph)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(
            tree.total_weight(),
            root_oracle.total_weight,
            "prim weight mismatch under {}",
            strategy.as_str()
        );
        prop_assert_eq!(tree.edges().len(), root_oracle.edge_count);
    }
    Ok(())
}
