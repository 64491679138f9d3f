//! Shared test utilities for `graphkit-core`.

use graphkit_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Digraph, Edge, Weight};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `GRAPHKIT_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Generates small directed graphs with weights in `0..=max_weight`.
///
/// Duplicate `(from, to)` pairs and self-loops are allowed in the raw edge
/// list; insertion collapses duplicates onto the last weight seen.
pub(crate) fn digraph_strategy(
    max_vertices: usize,
    max_weight: Weight,
) -> impl Strategy<Value = Digraph> {
    (1..=max_vertices).prop_flat_map(move |vertex_count| {
        prop::collection::vec(
            (1..=vertex_count, 1..=vertex_count, 0..=max_weight),
            0..=vertex_count * 3,
        )
        .prop_map(move |raw| {
            let edges: Vec<Edge> = raw
                .into_iter()
                .map(|(from, to, weight)| Edge::new(from, to, weight))
                .collect();
            Digraph::from_edges(&edges, vertex_count)
        })
    })
}
