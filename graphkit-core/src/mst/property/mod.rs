//! Property-based tests for Prim and Kruskal.
//!
//! Checks both algorithms against an independent sequential oracle,
//! validates the structural shape of the produced trees and forests, and
//! confirms that repeated runs are deterministic across graph topologies
//! with varied weight distributions.

mod determinism;
mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
