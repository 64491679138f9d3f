//! Argument parsing and command execution for the graphkit CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphkit_core::{
    Adjacency, Edge, FrontierStrategy, GraphError, ShortestPathTree, Solver, SolverBuilder,
    SpanningTree,
};
use graphkit_providers_edgelist::{EdgeListError, EdgeListSource};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphkit",
    about = "Run shortest-path and spanning-tree algorithms over an edge list."
)]
pub struct Cli {
    /// How Dijkstra and Prim select the next vertex.
    #[arg(long, value_enum, global = true, default_value_t = Frontier::Linear)]
    pub frontier: Frontier,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the adjacency lists of the loaded graph.
    Show(ShowCommand),
    /// Hop-count shortest paths on the directed graph.
    Bfs(PathCommand),
    /// Weighted shortest paths on the directed graph.
    Dijkstra(PathCommand),
    /// Minimum spanning tree of the undirected graph with Prim's algorithm.
    Prim(PrimCommand),
    /// Minimum spanning forest of the undirected graph with Kruskal's
    /// algorithm.
    Kruskal(KruskalCommand),
}

impl Command {
    const fn label(&self) -> &'static str {
        match self {
            Self::Show(_) => "show",
            Self::Bfs(_) => "bfs",
            Self::Dijkstra(_) => "dijkstra",
            Self::Prim(_) => "prim",
            Self::Kruskal(_) => "kruskal",
        }
    }
}

/// Location of the edge-list file.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Path to an edge list: a vertex count line, then `from to weight`
    /// lines.
    pub path: PathBuf,
}

/// Arguments of the `show` command.
#[derive(Debug, Args, Clone)]
pub struct ShowCommand {
    /// Input file.
    #[command(flatten)]
    pub input: InputArgs,

    /// Treat every edge as undirected.
    #[arg(long)]
    pub undirected: bool,
}

/// Arguments of the `bfs` and `dijkstra` commands.
#[derive(Debug, Args, Clone)]
pub struct PathCommand {
    /// Input file.
    #[command(flatten)]
    pub input: InputArgs,

    /// Vertex the search starts from.
    #[arg(long, default_value_t = 1)]
    pub source: usize,

    /// Print only the path to this vertex instead of the whole tree.
    #[arg(long)]
    pub target: Option<usize>,
}

/// Arguments of the `prim` command.
#[derive(Debug, Args, Clone)]
pub struct PrimCommand {
    /// Input file.
    #[command(flatten)]
    pub input: InputArgs,

    /// Vertex the tree grows from.
    #[arg(long, default_value_t = 1)]
    pub root: usize,
}

/// Arguments of the `kruskal` command.
#[derive(Debug, Args, Clone)]
pub struct KruskalCommand {
    /// Input file.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Frontier strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Frontier {
    /// Scan every vertex for the smallest key.
    Linear,
    /// Keep candidates in a binary heap.
    Heap,
}

impl From<Frontier> for FrontierStrategy {
    fn from(frontier: Frontier) -> Self {
        match frontier {
            Frontier::Linear => Self::LinearScan,
            Frontier::Heap => Self::BinaryHeap,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list could not be parsed or turned into a graph.
    #[error("failed to load `{path}`: {source}")]
    Load {
        /// Path of the rejected file.
        path: PathBuf,
        /// Parser or graph construction error.
        #[source]
        source: EdgeListError,
    },
    /// A vertex argument was rejected by the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns the stable graph error code behind this failure, if any.
    #[must_use]
    pub fn graph_code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(error) | Self::Load { source: EdgeListError::Graph { error, .. }, .. } => {
                Some(error.code().as_str())
            }
            _ => None,
        }
    }
}

/// What a command computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Outgoing edges of every vertex; `rows[v - 1]` belongs to vertex `v`.
    Adjacency {
        /// Whether edges were read as directed.
        directed: bool,
        /// Per-vertex outgoing edges in insertion order.
        rows: Vec<Vec<Edge>>,
    },
    /// A shortest-path tree, optionally narrowed to one target.
    ShortestPaths {
        /// The computed tree.
        tree: ShortestPathTree,
        /// Vertex whose path should be printed, if any.
        target: Option<usize>,
    },
    /// A spanning tree or forest.
    SpanningTree(SpanningTree),
}

/// Outcome of one CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded edge list.
    pub source: String,
    /// The computed result.
    pub report: Report,
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when a
/// vertex argument lies outside the graph.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use graphkit_cli::cli::{Cli, Command, Frontier, InputArgs, KruskalCommand, Report, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n1 2 1\n2 3 2\n1 3 3\n")?;
/// let cli = Cli {
///     frontier: Frontier::Linear,
///     command: Command::Kruskal(KruskalCommand {
///         input: InputArgs { path: file.path().to_path_buf() },
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let Report::SpanningTree(tree) = summary.report else { unreachable!() };
/// assert_eq!(tree.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = cli.command.label(), frontier = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let strategy = FrontierStrategy::from(cli.frontier);
    Span::current().record("frontier", strategy.as_str());
    let solver = SolverBuilder::new().with_frontier_strategy(strategy);

    let summary = match cli.command {
        Command::Show(command) => run_show(command)?,
        Command::Bfs(command) => run_paths(&solver.build()?, command, Search::BreadthFirst)?,
        Command::Dijkstra(command) => run_paths(&solver.build()?, command, Search::Dijkstra)?,
        Command::Prim(command) => {
            let solver = solver.with_prim_root(command.root).build()?;
            run_prim(&solver, command)?
        }
        Command::Kruskal(command) => run_kruskal(&solver.build()?, command)?,
    };
    info!(source = summary.source.as_str(), "command completed");
    Ok(summary)
}

#[derive(Clone, Copy, Debug)]
pub(super) enum Search {
    BreadthFirst,
    Dijkstra,
}

#[instrument(name = "cli.show", err, skip(command), fields(path = field::Empty))]
pub(super) fn run_show(command: ShowCommand) -> Result<ExecutionSummary, CliError> {
    let ShowCommand { input, undirected } = command;
    Span::current().record("path", field::display(input.path.display()));
    let source = load(&input.path)?;
    let name = source.name().to_owned();
    let rows = if undirected {
        adjacency_rows(&source.into_graph().map_err(load_error(&input.path))?)
    } else {
        adjacency_rows(&source.into_digraph().map_err(load_error(&input.path))?)
    };
    Ok(ExecutionSummary {
        source: name,
        report: Report::Adjacency {
            directed: !undirected,
            rows,
        },
    })
}

#[instrument(
    name = "cli.paths",
    err,
    skip(solver, command),
    fields(path = field::Empty, source = command.source, search = ?search),
)]
pub(super) fn run_paths(
    solver: &Solver,
    command: PathCommand,
    search: Search,
) -> Result<ExecutionSummary, CliError> {
    let PathCommand {
        input,
        source,
        target,
    } = command;
    Span::current().record("path", field::display(input.path.display()));
    let edges = load(&input.path)?;
    let name = edges.name().to_owned();
    let graph = edges.into_digraph().map_err(load_error(&input.path))?;
    if let Some(target) = target {
        graph.check_vertex(target)?;
    }
    let tree = match search {
        Search::BreadthFirst => solver.breadth_first(&graph, source)?,
        Search::Dijkstra => solver.dijkstra(&graph, source)?,
    };
    Ok(ExecutionSummary {
        source: name,
        report: Report::ShortestPaths { tree, target },
    })
}

#[instrument(name = "cli.prim", err, skip(solver, command), fields(path = field::Empty))]
pub(super) fn run_prim(solver: &Solver, command: PrimCommand) -> Result<ExecutionSummary, CliError> {
    Span::current().record("path", field::display(command.input.path.display()));
    let (name, graph) = load_undirected(&command.input.path)?;
    let tree = solver.prim(&graph)?;
    Ok(ExecutionSummary {
        source: name,
        report: Report::SpanningTree(tree),
    })
}

#[instrument(name = "cli.kruskal", err, skip(solver, command), fields(path = field::Empty))]
pub(super) fn run_kruskal(
    solver: &Solver,
    command: KruskalCommand,
) -> Result<ExecutionSummary, CliError> {
    Span::current().record("path", field::display(command.input.path.display()));
    let (name, graph) = load_undirected(&command.input.path)?;
    Ok(ExecutionSummary {
        source: name,
        report: Report::SpanningTree(solver.kruskal(&graph)),
    })
}

fn load_undirected(path: &Path) -> Result<(String, graphkit_core::Graph), CliError> {
    let source = load(path)?;
    let name = source.name().to_owned();
    let graph = source.into_graph().map_err(load_error(path))?;
    Ok((name, graph))
}

pub(super) fn load(path: &Path) -> Result<EdgeListSource, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    EdgeListSource::try_from_reader(derive_source_name(path), BufReader::new(file))
        .map_err(load_error(path))
}

fn load_error(path: &Path) -> impl FnOnce(EdgeListError) -> CliError {
    let path = path.to_path_buf();
    move |source| CliError::Load { path, source }
}

pub(super) fn derive_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edge_list".to_owned(), ToOwned::to_owned)
}

fn adjacency_rows(graph: &impl Adjacency) -> Vec<Vec<Edge>> {
    (1..=graph.vertex_count())
        .map(|vertex| graph.outgoing(vertex).to_vec())
        .collect()
}
