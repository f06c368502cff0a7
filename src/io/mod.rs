/*!
# IO

Utilities for reading and writing graphs.

## Input Format

The **EdgeList**-Format is the only input format:
```text
<number of nodes>
<number of edges m>
<u_1> <v_1>
...
<u_m> <v_m>
```
Nodes are 0-indexed. There are no header markers and, by default, no comments; lines after the
`m`-th edge line are ignored. [`EdgeListReader::comment_identifier`] enables skipping comment lines.

## Output Formats

- **EdgeList**: the same format as above, every undirected edge written once.
- **Dot**: the [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/)
  for the deduplicated [`SimpleGraph`](crate::interchange::SimpleGraph) view of a graph.

## Traits

- [`EdgeListRead`] loads a graph from a reader or file (ie. `load`).
- [`EdgeListWrite`] and [`DotWrite`] write a graph using default settings.
- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
*/

pub mod dot;
pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use dot::*;
pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Shorthand for returning `Err(GraphError)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $error : expr) => {
        if !($cond) {
            return Err($error);
        }
    };
}

/// Tries to parse the next token in an iterator and returns early with a
/// [`GraphError::Parse`] for line `$line` if it is missing or malformed
macro_rules! parse_next_value {
    ($iterator : expr, $line : expr, $name : expr) => {{
        let token = $iterator.next().ok_or_else(|| {
            GraphError::parse($line, format!("Premature end of line when parsing {}.", $name))
        })?;

        token.parse().map_err(|_| {
            GraphError::parse(
                $line,
                format!("Invalid value `{token}` found. Cannot parse {}.", $name),
            )
        })?
    }};
}

use parse_next_value;
use raise_error_unless;
