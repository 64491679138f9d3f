//! Graph generators for the spanning tree property tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so that any failing
//! case can be replayed from its distribution and seed alone.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{Edge, Weight};

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay small to keep the edge count quadratic but bounded.
const DENSE_MAX_VERTICES: usize = 24;

pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let mut builder = match distribution {
        WeightDistribution::Unique => unique_weights(rng),
        WeightDistribution::ManyIdentical => identical_weights(rng),
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let mut builder = EdgeBuilder::new(vertex_count);
            let probability = rng.gen_range(0.7..=0.95);
            builder.random_pairs(1, vertex_count, probability, rng, |r| r.gen_range(1..=100));
            builder
        }
        WeightDistribution::Disconnected => disconnected(rng),
        WeightDistribution::Negative => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let mut builder = EdgeBuilder::new(vertex_count);
            let probability = rng.gen_range(0.2..=0.6);
            builder.random_pairs(1, vertex_count, probability, rng, |r| r.gen_range(-50..=50));
            builder
        }
    };
    builder.ensure_edge(rng);
    MstFixture {
        vertex_count: builder.vertex_count,
        edges: builder.edges,
        distribution,
    }
}

fn unique_weights(rng: &mut SmallRng) -> EdgeBuilder {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = EdgeBuilder::new(vertex_count);
    let probability = rng.gen_range(0.2..=0.6);
    builder.random_pairs(1, vertex_count, probability, rng, |r| r.gen_range(1..=1_000));

    let mut weights: Vec<Weight> = (1..).take(builder.edges.len()).collect();
    weights.shuffle(rng);
    for (edge, weight) in builder.edges.iter_mut().zip(weights) {
        *edge = edge.with_weight(weight);
    }
    builder
}

fn identical_weights(rng: &mut SmallRng) -> EdgeBuilder {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = EdgeBuilder::new(vertex_count);
    let probability = rng.gen_range(0.3..=0.7);
    builder.random_pairs(1, vertex_count, probability, rng, |r| {
        pool[r.gen_range(0..pool.len())]
    });
    builder
}

fn sparse(rng: &mut SmallRng) -> EdgeBuilder {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = EdgeBuilder::new(vertex_count);

    let mut order: Vec<usize> = (1..=vertex_count).collect();
    order.shuffle(rng);
    for pair in order.windows(2) {
        let weight = rng.gen_range(1..=100);
        builder.push(pair[0], pair[1], weight);
    }

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let left = rng.gen_range(1..=vertex_count);
        let right = rng.gen_range(1..=vertex_count);
        let weight = rng.gen_range(1..=100);
        builder.push(left, right, weight);
    }
    builder
}

fn disconnected(rng: &mut SmallRng) -> EdgeBuilder {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut builder = EdgeBuilder::new(sizes.iter().sum());
    let mut first = 1;
    for size in sizes {
        let last = first + size - 1;
        let probability = rng.gen_range(0.3..=0.8);
        builder.random_pairs(first, last, probability, rng, |r| r.gen_range(1..=100));
        first = last + 1;
    }
    builder
}

/// Accumulates undirected edges, skipping self-loops and repeated pairs.
struct EdgeBuilder {
    vertex_count: usize,
    edges: Vec<Edge>,
    seen: BTreeSet<(usize, usize)>,
}

impl EdgeBuilder {
    fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            seen: BTreeSet::new(),
        }
    }

    fn push(&mut self, left: usize, right: usize, weight: Weight) {
        let (from, to) = (left.min(right), left.max(right));
        if from != to && self.seen.insert((from, to)) {
            self.edges.push(Edge::new(from, to, weight));
        }
    }

    /// Visits every pair in `first..=last` and keeps it with `probability`.
    fn random_pairs(
        &mut self,
        first: usize,
        last: usize,
        probability: f64,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> Weight,
    ) {
        for from in first..=last {
            for to in from + 1..=last {
                if rng.gen_bool(probability) {
                    let weight = weight(rng);
                    self.push(from, to, weight);
                }
            }
        }
    }

    fn ensure_edge(&mut self, rng: &mut SmallRng) {
        if self.edges.is_empty() && self.vertex_count >= 2 {
            let weight = rng.gen_range(1..=100);
            self.push(1, 2, weight);
        }
    }
}
