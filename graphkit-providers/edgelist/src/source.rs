//! Parsed edge lists and their conversion into graphs.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use graphkit_core::{Digraph, Edge, Graph, GraphError};
use tracing::{debug, instrument};

use crate::{
    errors::EdgeListError,
    parse::{self, DataLine},
};

/// A parsed edge list: a vertex count plus edges in file order.
///
/// Parsing only checks the shape of each line. Vertex ranges and self-loops
/// are validated when the list is turned into a graph, so the same source
/// can feed both a [`Digraph`] and a [`Graph`].
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use graphkit_providers_edgelist::EdgeListSource;
///
/// let source = EdgeListSource::try_from_reader("demo", Cursor::new("3\n1 2 4\n2 3 1\n"))?;
/// assert_eq!(source.vertex_count(), 3);
/// let graph = source.into_digraph()?;
/// assert_eq!(graph.weighted_sssp(1).distance(3), Some(5));
/// # Ok::<(), graphkit_providers_edgelist::EdgeListError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EdgeListSource {
    name: String,
    vertex_count: usize,
    header_line: usize,
    edges: Vec<Edge>,
    edge_lines: Vec<usize>,
}

impl EdgeListSource {
    /// Reads an edge list from any buffered reader.
    ///
    /// # Errors
    /// Returns [`EdgeListError::MissingHeader`] when no data line exists,
    /// [`EdgeListError::InvalidHeader`] or [`EdgeListError::MalformedEdge`]
    /// for lines of the wrong shape, and [`EdgeListError::Io`] when reading
    /// fails.
    #[instrument(name = "edgelist.read", level = "debug", err, skip(name, reader))]
    pub fn try_from_reader<R>(name: impl Into<String>, reader: R) -> Result<Self, EdgeListError>
    where
        R: BufRead,
    {
        let mut header: Option<(usize, usize)> = None;
        let mut edges = Vec::new();
        let mut edge_lines = Vec::new();

        for (index, raw) in reader.lines().enumerate() {
            let raw = raw?;
            let Some(DataLine { number, text }) = parse::data_line(index + 1, &raw) else {
                continue;
            };
            if header.is_none() {
                let count = parse::header(text).ok_or_else(|| EdgeListError::InvalidHeader {
                    line: number,
                    found: text.to_owned(),
                })?;
                header = Some((count, number));
                continue;
            }
            let edge = parse::edge(text).ok_or_else(|| EdgeListError::MalformedEdge {
                line: number,
                found: text.to_owned(),
            })?;
            edges.push(edge);
            edge_lines.push(number);
        }

        let (vertex_count, header_line) = header.ok_or(EdgeListError::MissingHeader)?;
        debug!(vertex_count, edges = edges.len(), "edge list parsed");
        Ok(Self {
            name: name.into(),
            vertex_count,
            header_line,
            edges,
            edge_lines,
        })
    }

    /// Reads an edge list from a file, naming the source after its path.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when the file cannot be opened, plus
    /// every error of [`Self::try_from_reader`].
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, EdgeListError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::try_from_reader(path.display().to_string(), BufReader::new(file))
    }

    /// Returns the source name, usually a file path.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared vertex count `N`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in file order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Builds a directed graph, inserting edges in file order.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Graph`] for a zero vertex count or an
    /// endpoint outside `1..=N`, tagged with the offending line.
    pub fn into_digraph(self) -> Result<Digraph, EdgeListError> {
        let mut graph = Digraph::try_new(self.vertex_count).map_err(at_line(self.header_line))?;
        for (edge, &line) in self.edges.iter().zip(&self.edge_lines) {
            graph.try_insert_edge(*edge).map_err(at_line(line))?;
        }
        Ok(graph)
    }

    /// Builds an undirected graph, inserting edges in file order.
    ///
    /// A later line naming the same pair in either orientation replaces the
    /// earlier weight.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Graph`] for a zero vertex count, an endpoint
    /// outside `1..=N` or a self-loop, tagged with the offending line.
    pub fn into_graph(self) -> Result<Graph, EdgeListError> {
        let mut graph = Graph::try_new(self.vertex_count).map_err(at_line(self.header_line))?;
        for (edge, &line) in self.edges.iter().zip(&self.edge_lines) {
            graph.try_insert_edge(*edge).map_err(at_line(line))?;
        }
        Ok(graph)
    }
}

fn at_line(line: usize) -> impl FnOnce(GraphError) -> EdgeListError {
    move |error| EdgeListError::Graph { line, error }
}
