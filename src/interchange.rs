/*!
# Interchange

Converts a graph into a [`SimpleGraph`]: the node count plus every undirected edge exactly once.
Parallel edges collapse, self-loops are kept. This is the shape general-purpose graph libraries
and visualizers expect, and it only relies on the read-only [`AdjacencyList`] view of a graph.

```
use ugraph_basics::{prelude::*, interchange::to_simple_graph};

let mut graph = Graph::new(3);
graph.add_edges([(0, 1), (1, 0), (2, 2)]).unwrap();

let simple = to_simple_graph(&graph);
assert_eq!(simple.edges, vec![Edge(0, 1), Edge(2, 2)]);
```
*/

use fxhash::FxHashSet;

use crate::prelude::*;

/// A graph without parallel edges, given as a plain list of nodes and edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleGraph {
    /// Nodes are `0..number_of_nodes`
    pub number_of_nodes: NumNodes,
    /// Normalized edges in order of first appearance
    pub edges: Vec<Edge>,
}

impl SimpleGraph {
    /// Returns an iterator over all nodes
    pub fn vertices(&self) -> impl Iterator<Item = Node> {
        0..self.number_of_nodes
    }

    /// Returns the number of distinct edges
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }
}

/// Walks all nodes in increasing order and keeps the first occurrence of every undirected edge
pub fn to_simple_graph<G: AdjacencyList>(graph: &G) -> SimpleGraph {
    let mut seen: FxHashSet<Edge> = Default::default();
    let edges = graph
        .edges(false)
        .map(|e| e.normalized())
        .filter(|e| seen.insert(*e))
        .collect();

    SimpleGraph {
        number_of_nodes: graph.number_of_nodes(),
        edges,
    }
}
