//! # Errors
//!
//! All fallible operations of this crate return a [`GraphError`]. Errors are never recovered
//! internally; a failed operation leaves the graph untouched.

use thiserror::Error;

use crate::{NumNodes, RawNode};

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur when building, mutating or loading a graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// A count (nodes or edges) is negative or does not fit the graph
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The edge-list text is malformed or truncated
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A node lies outside of `0..n`
    #[error("Vertex {node} is not between 0 and {}", last_node(.number_of_nodes))]
    OutOfRange {
        node: RawNode,
        number_of_nodes: NumNodes,
    },

    /// Reading or writing the underlying source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Largest valid node in a graph with `n` nodes (`-1` if the graph is empty)
fn last_node(n: &NumNodes) -> RawNode {
    RawNode::from(*n) - 1
}

impl GraphError {
    /// Shorthand for a [`GraphError::Parse`]
    pub(crate) fn parse<S: Into<String>>(line: usize, reason: S) -> Self {
        GraphError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Returns *true* if this is a [`GraphError::OutOfRange`]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, GraphError::OutOfRange { .. })
    }

    /// Returns *true* if this is a [`GraphError::Parse`]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, GraphError::Parse { .. })
    }

    /// Returns *true* if this is a [`GraphError::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GraphError::InvalidArgument(_))
    }
}
