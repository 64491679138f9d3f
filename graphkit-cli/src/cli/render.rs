//! Plain-text rendering of command results.

use std::io::{self, Write};

use graphkit_core::{Edge, ShortestPathTree, SpanningTree};

use super::commands::{ExecutionSummary, Report};

const ADJACENCY_RULE: usize = 66;
const TREE_RULE: usize = 22;

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use graphkit_cli::cli::{ExecutionSummary, Report, render_summary};
/// # use graphkit_core::{Edge, Graph};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_edges(&[Edge::new(1, 2, 4)], 2);
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     report: Report::SpanningTree(graph.mst_kruskal()),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer.into_inner())?,
///     "1 -- 2 [weight: 4]\n\nTotal weight = 4\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match &summary.report {
        Report::Adjacency { rows, .. } => render_adjacency(rows, &mut writer),
        Report::ShortestPaths {
            tree,
            target: Some(target),
        } => render_path(tree, *target, &mut writer),
        Report::ShortestPaths { tree, target: None } => render_tree(tree, &mut writer),
        Report::SpanningTree(tree) => render_spanning_tree(tree, &mut writer),
    }
}

fn rule(writer: &mut impl Write, width: usize) -> io::Result<()> {
    writeln!(writer, "{}", "-".repeat(width))
}

fn render_adjacency(rows: &[Vec<Edge>], writer: &mut impl Write) -> io::Result<()> {
    rule(writer, ADJACENCY_RULE)?;
    writeln!(writer, "Vertex  adjacency lists")?;
    rule(writer, ADJACENCY_RULE)?;
    for (vertex, edges) in (1..).zip(rows) {
        write!(writer, "{vertex:4} :")?;
        for edge in edges {
            write!(writer, " ({:2}, {:2})", edge.to(), edge.weight())?;
        }
        writeln!(writer)?;
    }
    rule(writer, ADJACENCY_RULE)
}

/// Unreached vertices print a distance of `-1`; the source and unreached
/// vertices print a predecessor of `0`.
fn render_tree(tree: &ShortestPathTree, writer: &mut impl Write) -> io::Result<()> {
    rule(writer, TREE_RULE)?;
    writeln!(writer, "vertex    dist    path")?;
    rule(writer, TREE_RULE)?;
    for (vertex, distance, predecessor) in tree.rows() {
        writeln!(
            writer,
            "{vertex:4} : {:6} {:6}",
            distance.unwrap_or(-1),
            predecessor.unwrap_or(0)
        )?;
    }
    rule(writer, TREE_RULE)
}

fn render_path(tree: &ShortestPathTree, target: usize, writer: &mut impl Write) -> io::Result<()> {
    let Some(path) = tree.path_to(target) else {
        return writeln!(
            writer,
            "vertex {target} is not reachable from {}",
            tree.source()
        );
    };
    let joined: Vec<String> = path.iter().map(ToString::to_string).collect();
    writeln!(writer, "{}", joined.join(" -> "))?;
    writeln!(writer, "Number of edges: {}", path.len() - 1)
}

fn render_spanning_tree(tree: &SpanningTree, writer: &mut impl Write) -> io::Result<()> {
    for edge in tree.edges() {
        writeln!(
            writer,
            "{} -- {} [weight: {}]",
            edge.from(),
            edge.to(),
            edge.weight()
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total weight = {}", tree.total_weight())
}
