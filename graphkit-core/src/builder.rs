//! Builder utilities for configuring [`Solver`] instances.

use std::num::NonZeroUsize;

use crate::{
    error::{GraphError, Result},
    frontier::FrontierStrategy,
    solver::Solver,
};

/// Configures and constructs [`Solver`] instances.
///
/// # Examples
/// ```
/// use graphkit_core::{FrontierStrategy, SolverBuilder};
///
/// let solver = SolverBuilder::new()
///     .with_frontier_strategy(FrontierStrategy::BinaryHeap)
///     .with_prim_root(3)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(solver.frontier_strategy(), FrontierStrategy::BinaryHeap);
/// assert_eq!(solver.prim_root().get(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SolverBuilder {
    frontier_strategy: FrontierStrategy,
    prim_root: usize,
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self {
            frontier_strategy: FrontierStrategy::LinearScan,
            prim_root: 1,
        }
    }
}

impl SolverBuilder {
    /// Creates a builder with a linear-scan frontier and Prim rooted at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects how Dijkstra and Prim pick the next vertex to finalise.
    #[must_use]
    pub const fn with_frontier_strategy(mut self, strategy: FrontierStrategy) -> Self {
        self.frontier_strategy = strategy;
        self
    }

    /// Returns the configured frontier strategy.
    #[must_use]
    pub const fn frontier_strategy(&self) -> FrontierStrategy {
        self.frontier_strategy
    }

    /// Overrides the vertex Prim's algorithm grows its tree from.
    #[must_use]
    pub const fn with_prim_root(mut self, root: usize) -> Self {
        self.prim_root = root;
        self
    }

    /// Returns the configured Prim root.
    #[must_use]
    pub const fn prim_root(&self) -> usize {
        self.prim_root
    }

    /// Validates the configuration and constructs a [`Solver`].
    ///
    /// Whether the root exists in a particular graph is only known when
    /// [`Solver::prim`] runs.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidRoot`] when the Prim root is the `0`
    /// sentinel.
    ///
    /// # Examples
    /// ```
    /// use graphkit_core::{GraphError, SolverBuilder};
    ///
    /// let err = SolverBuilder::new().with_prim_root(0).build().unwrap_err();
    /// assert_eq!(err, GraphError::InvalidRoot { got: 0 });
    /// ```
    pub fn build(self) -> Result<Solver> {
        let prim_root = NonZeroUsize::new(self.prim_root)
            .ok_or(GraphError::InvalidRoot { got: self.prim_root })?;
        Ok(Solver::new(self.frontier_strategy, prim_root))
    }
}
