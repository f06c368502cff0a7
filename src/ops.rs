use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n` of all nodes.
    /// In contrast to `self.vertices()`, the range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that `u` lies in `0..n` and returns it as a [`Node`].
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `u < 0` or `u >= n`.
    fn validate_node<U: Into<RawNode>>(&self, u: U) -> Result<Node> {
        let raw = u.into();
        Node::try_from(raw)
            .ok()
            .filter(|&node| node < self.number_of_nodes())
            .ok_or_else(|| GraphError::OutOfRange {
                node: raw,
                number_of_nodes: self.number_of_nodes(),
            })
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    ///
    /// This is the number of successful insertions, counting self-loops and
    /// repeated edges once per insertion, independent of the representation.
    fn number_of_edges(&self) -> NumEdges;
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Traits pertaining getters for neighborhoods & edges.
///
/// Everything here is a read-only view on the graph: no method hands out
/// mutable access to the underlying storage.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighborhood of a given vertex in storage order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of adjacency entries recorded for `u`.
    /// A self-loop contributes `1`.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the degree of `u` after checking that `u` is a node of the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `u >= n`.
    fn try_degree_of(&self, u: Node) -> Result<NumNodes> {
        let u = self.validate_node(u)?;
        Ok(self.degree_of(u))
    }

    /// Returns how often `u` is recorded in its own neighborhood.
    /// ** Panics if `u >= n` **
    fn self_loops_at(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).filter(|&v| v == u).count() as NumNodes
    }

    /// Returns the number of self-loops in the graph, ie. the sum of `self_loops_at` over all nodes.
    ///
    /// For list-backed graphs every inserted self-loop is counted, whereas matrix-backed
    /// graphs count each node with a self-loop once.
    fn number_of_self_loops(&self) -> NumNodes {
        self.vertices().map(|u| self.self_loops_at(u)).sum()
    }

    /// Returns the maximum degree in the graph (`0` if there are no nodes)
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    node_iterator!(degrees, degree_of, NumNodes);

    /// Returns an iterator over edges incident to a given vertex in storage order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then every undirected edge is reported once per stored entry.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect_vec()
    }
}

/// Trait for checking whether nodes are connected
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if `v` is recorded in the neighborhood of `u`.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with `n` nodes and no edges
    fn new(n: NumNodes) -> Self;

    /// Creates an empty graph from a possibly negative number of nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] if `n` is negative or too large.
    fn try_new(n: RawNode) -> Result<Self> {
        let n = NumNodes::try_from(n).map_err(|_| {
            GraphError::InvalidArgument(format!(
                "Number of vertices must be between 0 and {}, got {n}",
                NumNodes::MAX
            ))
        })?;
        Ok(Self::new(n))
    }
}

/// Trait for inserting edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the undirected edge `{u, v}` to the graph.
    /// Parallel edges and self-loops are allowed; every call increases the number of edges by one.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `u` or `v` is not a node of the graph, and
    /// [`GraphError::InvalidArgument`] if the number of edges would exceed [`NumEdges::MAX`].
    /// The graph is left unchanged in both cases.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()>;

    /// Adds an edge read from an input file, checking both endpoints first.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if an endpoint is negative or `>= n`.
    fn add_raw_edge(&mut self, (u, v): RawEdge) -> Result<()> {
        let u = self.validate_node(u)?;
        let v = self.validate_node(v)?;
        self.add_edge(u, v)
    }

    /// Adds all edges in the given order, stopping at the first error.
    /// Edges inserted before the error remain in the graph.
    fn add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        for e in edges {
            let Edge(u, v) = e.into();
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

/// Trait for creating a graph from a list of edges
pub trait GraphFromScratch: Sized {
    /// Creates a graph with `n` nodes and inserts all edges in order.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] for the first edge with an invalid endpoint.
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

/// Combination of all traits every graph representation of this crate implements
pub trait UndirectedGraphOps:
    GraphNew
    + GraphNodeOrder
    + GraphEdgeOrder
    + AdjacencyList
    + AdjacencyTest
    + GraphEdgeEditing
    + std::fmt::Display
{
}

impl<G> UndirectedGraphOps for G where
    G: GraphNew
        + GraphNodeOrder
        + GraphEdgeOrder
        + AdjacencyList
        + AdjacencyTest
        + GraphEdgeEditing
        + std::fmt::Display
{
}
