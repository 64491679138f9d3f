//! Benchmark support crate for graphkit.
//!
//! Provides seeded synthetic graphs and parameter labels used by the
//! Criterion benchmarks for shortest paths and minimum spanning trees.

pub mod error;
pub mod params;
pub mod source;
