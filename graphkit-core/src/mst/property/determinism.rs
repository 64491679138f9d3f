//! Repeated runs over the same graph must return identical trees.
//!
//! Prim must also accept the same edges in the same order whichever
//! frontier strategy selects the next vertex.

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{FrontierStrategy, SolverBuilder, SpanningTree};

use super::types::MstFixture;

const REPETITIONS: usize = 3;

pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = graph.mst_kruskal();
    let tree = prim(fixture, FrontierStrategy::LinearScan)?;

    for _ in 0..REPETITIONS {
        prop_assert_eq!(&graph.mst_kruskal(), &forest);
        prop_assert_eq!(&graph.mst_prim(), &tree);
    }
    prop_assert_eq!(&prim(fixture, FrontierStrategy::BinaryHeap)?, &tree);
    Ok(())
}

fn prim(fixture: &MstFixture, strategy: FrontierStrategy) -> Result<SpanningTree, TestCaseError> {
    SolverBuilder::new()
        .with_frontier_strategy(strategy)
        .build()
        .and_then(|solver| solver.prim(&fixture.graph()))
        .map_err(|err| TestCaseError::fail(err.to_string()))
}
