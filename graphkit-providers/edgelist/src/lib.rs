//! Edge-list provider: parses the plain-text graph format into graphkit
//! graphs.
//!
//! ```text
//! # comments run to the end of the line
//! 4          <- vertex count N
//! 1 2 7      <- from to weight
//! 2 3 1
//! ```

mod errors;
mod parse;
mod source;

pub use errors::EdgeListError;
pub use source::EdgeListSource;
