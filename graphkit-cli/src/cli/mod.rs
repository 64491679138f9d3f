//! Command-line interface for running graph algorithms over edge lists.
//!
//! Every command loads one edge-list file, runs a single algorithm and
//! returns an [`ExecutionSummary`] that [`render_summary`] prints as text.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, Frontier, InputArgs, KruskalCommand, PathCommand,
    PrimCommand, Report, ShowCommand, run_cli,
};
pub use render::render_summary;
