//! Minimum spanning tree benchmarks.
//!
//! Measures Prim (per frontier strategy) and Kruskal over seeded synthetic
//! undirected graphs. Graph construction happens outside the timed loop.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use graphkit_benches::{
    error::BenchSetupError,
    params::{GraphBenchParams, SolverBenchParams},
    source::{SyntheticGraph, SyntheticGraphConfig},
};
use graphkit_core::{FrontierStrategy, Graph, SolverBuilder};

/// Seed used for all synthetic graph generation in this benchmark.
const SEED: u64 = 42;

/// Graph sizes to benchmark.
const VERTEX_COUNTS: &[usize] = &[100, 1_000, 5_000];

/// Edges generated per vertex before undirected deduplication.
const OUT_DEGREE: usize = 4;

/// Upper bound of generated edge weights.
const MAX_WEIGHT: i64 = 100;

fn undirected(vertex_count: usize) -> Result<Graph, BenchSetupError> {
    let synthetic = SyntheticGraph::generate(&SyntheticGraphConfig {
        vertex_count,
        out_degree: OUT_DEGREE,
        max_weight: MAX_WEIGHT,
        seed: SEED,
    })?;
    Ok(synthetic.graph()?)
}

fn prim_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("prim");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        let graph = undirected(vertex_count)?;
        for strategy in [FrontierStrategy::LinearScan, FrontierStrategy::BinaryHeap] {
            let solver = SolverBuilder::new()
                .with_frontier_strategy(strategy)
                .build()?;
            let params = SolverBenchParams {
                graph: GraphBenchParams {
                    vertex_count,
                    out_degree: OUT_DEGREE,
                },
                strategy,
            };
            group.bench_with_input(BenchmarkId::from_parameter(&params), &graph, |b, graph| {
                b.iter(|| solver.prim(graph));
            });
        }
    }

    group.finish();
    Ok(())
}

fn kruskal_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("kruskal");
    group.sample_size(20);
    let solver = SolverBuilder::new().build()?;

    for &vertex_count in VERTEX_COUNTS {
        let graph = undirected(vertex_count)?;
        let params = GraphBenchParams {
            vertex_count,
            out_degree: OUT_DEGREE,
        };
        group.bench_with_input(BenchmarkId::from_parameter(&params), &graph, |b, graph| {
            b.iter(|| solver.kruskal(graph));
        });
    }

    group.finish();
    Ok(())
}

fn prim(c: &mut Criterion) {
    if let Err(err) = prim_impl(c) {
        panic!("prim benchmark setup failed: {err}");
    }
}

fn kruskal(c: &mut Criterion) {
    if let Err(err) = kruskal_impl(c) {
        panic!("kruskal benchmark setup failed: {err}");
    }
}

criterion_group!(benches, prim, kruskal);
criterion_main!(benches);
