//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only draw nodes and undirected edges.
//!
//! Graphs are written through their [`SimpleGraph`] view, so parallel edges are drawn once.
//! Every node is declared explicitly so that isolated nodes remain visible.
//!
//! ```
//! use ugraph_basics::{io::DotWrite, prelude::*};
//!
//! let graph = Graph::from_edges(3, [(0, 1), (1, 0)]).unwrap();
//!
//! let mut buffer = Vec::new();
//! graph.try_write_dot(&mut buffer).unwrap();
//! assert_eq!(String::from_utf8(buffer).unwrap(), "graph {\nu0;u1;u2;\nu0--u1;\n}\n");
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::*;
use crate::interchange::{SimpleGraph, to_simple_graph};

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: false,
            prefix: "u".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, nodes are written 1-indexed
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a node (`u` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u as u64 + self.inc_nodes as u64;
        format!("{}{u}", self.prefix)
    }

    /// Writes a [`SimpleGraph`] as an undirected Dot-Graph
    pub fn write_simple_graph<W>(&self, simple: &SimpleGraph, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {{")?;

        for u in simple.vertices() {
            write!(writer, "{};", self.format_node(u))?;
        }
        writeln!(writer)?;

        for &Edge(u, v) in &simple.edges {
            write!(writer, "{}--{};", self.format_node(u), self.format_node(v))?;
        }
        writeln!(writer)?;

        writeln!(writer, "}}")?;
        Ok(())
    }
}

impl<G: AdjacencyList> GraphWriter<G> for DotWriter {
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write,
    {
        self.write_simple_graph(&to_simple_graph(graph), writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<G: AdjacencyList> DotWrite for G {
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}
