//! Error type for edge-list parsing and graph construction.

use graphkit_core::GraphError;
use thiserror::Error;

/// Errors raised while reading an edge list or turning it into a graph.
///
/// Line numbers are 1-based and count every physical line, including
/// comments and blank lines.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The input held no data lines at all.
    #[error("edge list is empty: expected a vertex count")]
    MissingHeader,
    /// The first data line was not a single vertex count.
    #[error("line {line}: expected a vertex count but found `{found}`")]
    InvalidHeader {
        /// Line holding the header.
        line: usize,
        /// The offending text, comments stripped.
        found: String,
    },
    /// An edge line did not hold `from to weight`.
    #[error("line {line}: expected `from to weight` but found `{found}`")]
    MalformedEdge {
        /// Line holding the edge.
        line: usize,
        /// The offending text, comments stripped.
        found: String,
    },
    /// A well-formed line described an edge or size the graph rejects.
    #[error("line {line}: {error}")]
    Graph {
        /// Line that produced the rejected value.
        line: usize,
        /// The underlying graph error.
        #[source]
        error: GraphError,
    },
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdgeListError {
    /// Returns the 1-based line the error refers to, when it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidHeader { line, .. }
            | Self::MalformedEdge { line, .. }
            | Self::Graph { line, .. } => Some(*line),
            Self::MissingHeader | Self::Io(_) => None,
        }
    }
}
