/*!
# Representations

A graph is a vector of per-node [`Neighborhood`]s plus an edge counter. The neighborhood decides
how adjacency is stored and therefore how repeated insertions are reflected:

- [`ArrNeighborhood`] appends every neighbor to a `Vec<Node>` (an adjacency list), so parallel
  edges and repeated self-loops accumulate.
- [`BitNeighborhood`] sets a bit in a row of an adjacency matrix, so repeated insertions of the
  same edge collapse into a single entry.

[`Graph`] and [`AdjMatrixGraph`] are the two resulting representations. Both implement the same
set of traits from [`ops`](crate::ops), so algorithms can be written once for either.
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    /// Creates an empty Neighborhood for a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of entries in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all entries in the Neighborhood in storage order
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `u` is in the Neighborhood
    /// ** Might panic if `u >= n` **
    fn has_neighbor(&self, u: Node) -> bool {
        self.neighbors().any(|v| v == u)
    }

    /// Returns how often `u` is recorded in the Neighborhood
    /// ** Might panic if `u >= n` **
    fn multiplicity_of(&self, u: Node) -> NumNodes {
        self.neighbors().filter(|&v| v == u).count() as NumNodes
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// For some implementations, this might lead to Multi-Edges
    /// ** Might panic if `u >= n` **
    fn add_neighbor(&mut self, u: Node);
}
