//! Error types for the graphkit core library.
//!
//! Precondition violations are reported through [`GraphError`]. The plain graph
//! operations panic with the error message, while the `try_*` variants return
//! it so untrusted input can be validated up front.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced when a graph operation receives invalid input.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Graphs must contain at least one vertex.
    #[error("a graph needs at least 1 vertex (got {got})")]
    InvalidVertexCount {
        /// The vertex count supplied by the caller.
        got: usize,
    },
    /// The vertex count is too large to allocate adjacency lists for.
    #[error("a graph of {got} vertices cannot be allocated")]
    VertexCountTooLarge {
        /// The vertex count supplied by the caller.
        got: usize,
    },
    /// A vertex id fell outside `1..=vertex_count`.
    #[error("vertex {vertex} is outside 1..={vertex_count}")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Undirected graphs cannot store an edge from a vertex to itself.
    #[error("undirected edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// The vertex at both ends of the edge.
        vertex: usize,
    },
    /// The edge requested for removal is not stored in the graph.
    #[error("edge ({from}, {to}) is not present")]
    EdgeNotFound {
        /// Tail of the missing edge.
        from: usize,
        /// Head of the missing edge.
        to: usize,
    },
    /// Prim's root must be a real vertex, never the `0` sentinel.
    #[error("prim root must be at least 1 (got {got})")]
    InvalidRoot {
        /// The root supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Graphs must contain at least one vertex.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_INVALID_VERTEX_COUNT",
        /// The vertex count is too large to allocate.
        VertexCountTooLarge => VertexCountTooLarge { .. } => "GRAPH_VERTEX_COUNT_TOO_LARGE",
        /// A vertex id fell outside `1..=vertex_count`.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// Undirected graphs cannot store self-loops.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The edge requested for removal is not stored in the graph.
        EdgeNotFound => EdgeNotFound { .. } => "GRAPH_EDGE_NOT_FOUND",
        /// Prim's root must be a real vertex.
        InvalidRoot => InvalidRoot { .. } => "GRAPH_INVALID_ROOT",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Unwraps a precondition check, panicking with the error message on failure.
#[track_caller]
pub(crate) fn require<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
