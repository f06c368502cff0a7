//! # EdgeList
//!
//! The EdgeList-Format consists of a line with the number of nodes `n`, a line with the number
//! of edges `m`, followed by `m` lines `u v` representing an undirected edge `Edge(u, v)`.
//!
//! Reading is split in two steps: [`EdgeListReader::read_edge_list`] (or the shorthand
//! [`read_edge_list`]) only parses the text and does not check that endpoints lie in `0..n`.
//! [`EdgeListReader`] as a [`GraphReader`] (or [`EdgeListRead`] for default settings) then
//! inserts the parsed edges in order, which is where out-of-range endpoints are rejected.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use itertools::Itertools;
use tracing::debug;

use super::*;
use crate::repr::{Neighborhood, UndirectedGraph};

/// The parsed content of an edge-list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Number of nodes declared in the first line
    pub number_of_nodes: NumNodes,
    /// Edges in file order, endpoints not yet validated
    pub edges: Vec<RawEdge>,
}

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    /// If set, lines starting with this identifier are skipped (none by default)
    comment_identifier: Option<String>,
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines starting with `c` are skipped when reading.
    /// Skipped lines still count towards the line numbers in [`GraphError::Parse`].
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = Some(c.into());
        self
    }

    /// Parses the EdgeList-Format from a reader without checking endpoints.
    ///
    /// # Errors
    /// - [`GraphError::InvalidArgument`] if the number of nodes or edges is negative (or too large),
    /// - [`GraphError::Parse`] if a line is malformed, not valid UTF-8, or the input ends before
    ///   all edges were read,
    /// - [`GraphError::Io`] if the reader fails.
    pub fn read_edge_list<R: BufRead>(&self, reader: R) -> Result<EdgeList> {
        EdgeListParser::new(reader, self.comment_identifier.as_deref()).parse()
    }
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphNew + GraphEdgeEditing + GraphEdgeOrder,
{
    /// Edges are inserted in file order.
    /// Fails with [`GraphError::OutOfRange`] if an edge has an endpoint outside of `0..n`.
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let EdgeList {
            number_of_nodes,
            edges,
        } = self.read_edge_list(reader)?;

        let mut graph = G::new(number_of_nodes);
        for edge in edges {
            graph.add_raw_edge(edge)?;
        }

        debug!(
            number_of_nodes,
            number_of_edges = graph.number_of_edges(),
            "loaded graph"
        );
        Ok(graph)
    }
}

/// Parses the EdgeList-Format from a reader.
/// Shorthand for [`EdgeListReader::read_edge_list`] with default settings.
///
/// # Errors
/// See [`EdgeListReader::read_edge_list`].
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<EdgeList> {
    EdgeListReader::default().read_edge_list(reader)
}

/// Parses the EdgeList-Format from a file.
///
/// # Errors
/// See [`read_edge_list`]; additionally fails if the file cannot be opened.
pub fn read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    read_edge_list(BufReader::new(File::open(path)?))
}

/// Line-based parser for the EdgeList-Format
struct EdgeListParser<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of the last consumed line (1-indexed)
    line: usize,
    /// Lines starting with this are skipped
    comment_identifier: Option<&'a str>,
}

impl<'a, R: BufRead> EdgeListParser<'a, R> {
    fn new(reader: R, comment_identifier: Option<&'a str>) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            comment_identifier,
        }
    }

    fn parse(mut self) -> Result<EdgeList> {
        let number_of_nodes = self.parse_count("number of vertices")?;
        raise_error_unless!(
            number_of_nodes >= 0,
            GraphError::InvalidArgument("Number of vertices must be non negative".into())
        );
        let number_of_nodes = NumNodes::try_from(number_of_nodes).map_err(|_| {
            GraphError::InvalidArgument(format!("Too many vertices: {number_of_nodes}"))
        })?;

        let number_of_edges = self.parse_count("number of edges")?;
        raise_error_unless!(
            number_of_edges >= 0,
            GraphError::InvalidArgument("Number of edges must be non negative".into())
        );
        let number_of_edges = NumEdges::try_from(number_of_edges).map_err(|_| {
            GraphError::InvalidArgument(format!("Too many edges: {number_of_edges}"))
        })?;

        debug!(number_of_nodes, number_of_edges, "parsed edge-list header");

        // Do not trust the header with the allocation size
        let mut edges = Vec::with_capacity((number_of_edges as usize).min(1 << 16));
        for _ in 0..number_of_edges {
            edges.push(self.parse_edge()?);
        }

        Ok(EdgeList {
            number_of_nodes,
            edges,
        })
    }

    /// Returns the next non-comment line or fails if the input ended prematurely
    fn next_line(&mut self, name: &str) -> Result<String> {
        loop {
            self.line += 1;
            match self.lines.next() {
                None => {
                    return Err(GraphError::parse(
                        self.line,
                        format!("Premature end of input when parsing {name}."),
                    ));
                }
                Some(Err(e)) if e.kind() == ErrorKind::InvalidData => {
                    return Err(GraphError::parse(
                        self.line,
                        format!("Invalid UTF-8 found when parsing {name}."),
                    ));
                }
                Some(Err(e)) => return Err(e.into()),
                Some(Ok(line))
                    if self
                        .comment_identifier
                        .is_some_and(|c| line.starts_with(c)) =>
                {
                    continue;
                }
                Some(Ok(line)) => return Ok(line),
            }
        }
    }

    /// Parses a line consisting of a single integer
    fn parse_count(&mut self, name: &str) -> Result<RawNode> {
        let line = self.next_line(name)?;
        let mut parts = line.split_whitespace();

        let count = parse_next_value!(parts, self.line, name);
        raise_error_unless!(
            parts.next().is_none(),
            GraphError::parse(self.line, format!("Unexpected token after {name}."))
        );

        Ok(count)
    }

    /// Parses a line consisting of exactly two integers
    fn parse_edge(&mut self) -> Result<RawEdge> {
        let line = self.next_line("edge")?;
        let mut parts = line.split_whitespace();

        let u = parse_next_value!(parts, self.line, "source node");
        let v = parse_next_value!(parts, self.line, "target node");
        raise_error_unless!(
            parts.next().is_none(),
            GraphError::parse(self.line, "Unexpected token after edge.")
        );

        Ok((u, v))
    }
}

/// Trait for creating graphs from the EdgeList-Format.
/// Used as shorthand for default [`EdgeListReader`] settings.
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader.
    /// Edges are inserted in file order.
    ///
    /// # Errors
    /// Fails with any error of [`read_edge_list`], or with [`GraphError::OutOfRange`]
    /// if an edge has an endpoint outside of `0..n`.
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphNew + GraphEdgeEditing + GraphEdgeOrder,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

impl<Nbs: Neighborhood> UndirectedGraph<Nbs> {
    /// Loads a graph from an edge-list file.
    /// Shorthand for [`EdgeListRead::try_read_edge_list_file`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list_file(path)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Write edges sorted instead of in storage order
    sorted: bool,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, edges are written in ascending order
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for EdgeListWriter {
    /// Writes every stored undirected edge once as `u v` with `u <= v`.
    /// The edge count in the header is the number of written lines, which is smaller than
    /// `number_of_edges()` for matrix-backed graphs with repeated edges.
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let edges = if self.sorted {
            graph.ordered_edges(true)
        } else {
            graph.edges(true).collect_vec()
        };

        writeln!(writer, "{}", graph.number_of_nodes())?;
        writeln!(writer, "{}", edges.len())?;
        for Edge(u, v) in edges {
            writeln!(writer, "{u} {v}")?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<G: AdjacencyList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
