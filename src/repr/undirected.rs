use std::fmt::{self, Display};

use tracing::trace;

use super::*;
use crate::testing::test_graph_ops;

/// An undirected graph on a fixed number of nodes.
///
/// The number of nodes is set on construction and never changes; edges can only be added.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-List.
/// Parallel edges and repeated self-loops are all recorded.
pub type Graph = UndirectedGraph<ArrNeighborhood>;

/// Representation using an Adjacency-Matrix.
/// Repeated insertions of an edge set the same matrix cell, but are still counted as edges.
pub type AdjMatrixGraph = UndirectedGraph<BitNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }

    // A matrix row answers this with a single lookup instead of a scan
    fn self_loops_at(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].multiplicity_of(u)
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        let u = self.validate_node(u)?;
        let v = self.validate_node(v)?;
        self.num_edges = self.num_edges.checked_add(1).ok_or_else(|| {
            GraphError::InvalidArgument(format!("Cannot store more than {} edges", NumEdges::MAX))
        })?;
        trace!(u, v, "add edge");

        self.nbs[u as usize].add_neighbor(v);
        if u != v {
            self.nbs[v as usize].add_neighbor(u);
        }

        Ok(())
    }
}

impl<Nbs: Neighborhood> Display for UndirectedGraph<Nbs> {
    /// Writes `"{n} vertices, {m} edges"` followed by one line `"u: v w ... "` per node,
    /// neighbors listed in storage order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        for u in self.vertices() {
            write!(f, "{u}: ")?;
            for v in self.neighbors_of(u) {
                write!(f, "{v} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

test_graph_ops!(
    test_graph,
    Graph,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

test_graph_ops!(
    test_adj_matrix_graph,
    AdjMatrixGraph,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn check_path_of_three<G: UndirectedGraphOps>() {
        let mut graph = G::new(3);
        graph.add_edges([(0, 1), (1, 2)]).unwrap();

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degrees().collect_vec(), vec![1, 2, 1]);
        assert_eq!(graph.number_of_self_loops(), 0);
        assert_eq!(graph.max_degree(), 2);
    }

    #[test]
    fn path_of_three() {
        check_path_of_three::<Graph>();
        check_path_of_three::<AdjMatrixGraph>();
    }

    #[test]
    fn self_loop_counts_once_per_insertion() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 0).unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.try_degree_of(0).unwrap(), 1);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![0]);
        assert_eq!(graph.number_of_self_loops(), 1);

        graph.add_edge(0, 0).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(0), 2);
        assert_eq!(graph.number_of_self_loops(), 2);

        let mut graph = AdjMatrixGraph::new(2);
        graph.add_edge(0, 0).unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.try_degree_of(0).unwrap(), 1);
        assert_eq!(graph.number_of_self_loops(), 1);

        graph.add_edge(0, 0).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(0), 1);
        assert_eq!(graph.number_of_self_loops(), 1);
    }

    #[test]
    fn parallel_edges() {
        let mut graph = Graph::new(3);
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 1).unwrap();

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![2, 2]);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![1, 1]);

        let mut graph = AdjMatrixGraph::new(3);
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 2).unwrap();

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(1), 1);
        assert_eq!(graph.degree_of(2), 1);
        assert!(graph.has_edge(1, 2));
        assert!(graph.has_edge(2, 1));
    }

    #[test]
    fn neighbor_order() {
        let edges = [(2, 0), (2, 3), (2, 1), (0, 0)];

        let graph = Graph::from_edges(4, edges).unwrap();
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![0, 3, 1]);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![2, 0]);

        let graph = AdjMatrixGraph::from_edges(4, edges).unwrap();
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![0, 1, 3]);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![0, 2]);
    }

    #[test]
    fn out_of_range_leaves_graph_untouched() {
        let mut graph = Graph::from_edges(3, [(0, 1)]).unwrap();

        let err = graph.add_edge(0, 3).unwrap_err();
        assert!(err.is_out_of_range());
        let err = graph.add_edge(3, 0).unwrap_err();
        assert!(err.is_out_of_range());
        let err = graph.add_raw_edge((-1, 0)).unwrap_err();
        assert!(err.is_out_of_range());
        let err = graph.add_raw_edge((0, -1)).unwrap_err();
        assert!(err.is_out_of_range());

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degrees().collect_vec(), vec![1, 1, 0]);

        let mut graph = AdjMatrixGraph::from_edges(3, [(0, 1)]).unwrap();
        assert!(graph.add_edge(1, 7).unwrap_err().is_out_of_range());
        assert!(graph.add_raw_edge((-1, -1)).unwrap_err().is_out_of_range());
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degrees().collect_vec(), vec![1, 1, 0]);

        assert!(graph.try_degree_of(3).unwrap_err().is_out_of_range());
        assert_eq!(graph.try_degree_of(2).unwrap(), 0);
    }

    #[test]
    fn empty_graphs() {
        let graph = Graph::new(0);
        assert!(graph.is_empty());
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.max_degree(), 0);
        assert_eq!(graph.number_of_self_loops(), 0);
        assert!(graph.try_degree_of(0).unwrap_err().is_out_of_range());

        let graph = AdjMatrixGraph::new(4);
        assert_eq!(graph.max_degree(), 0);
        assert!(graph.degrees().all(|d| d == 0));
        assert_eq!(graph.edges(false).count(), 0);
    }

    #[test]
    fn negative_number_of_nodes() {
        assert!(Graph::try_new(-1).unwrap_err().is_invalid_argument());
        assert!(AdjMatrixGraph::try_new(-5).unwrap_err().is_invalid_argument());
        assert!(Graph::try_new(RawNode::from(NumNodes::MAX) + 1)
            .unwrap_err()
            .is_invalid_argument());

        let graph = AdjMatrixGraph::try_new(3).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn add_edges_stops_at_first_error() {
        let mut graph = Graph::new(3);
        let err = graph.add_edges([(0, 1), (1, 5), (1, 2)]).unwrap_err();

        assert!(err.is_out_of_range());
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 2));
    }

    #[test]
    fn render() {
        let graph = Graph::from_edges(3, [(0, 1), (2, 2), (1, 0)]).unwrap();
        assert_eq!(
            graph.to_string(),
            "3 vertices, 3 edges\n0: 1 1 \n1: 0 0 \n2: 2 \n"
        );

        let graph = AdjMatrixGraph::from_edges(3, [(0, 1), (2, 2), (1, 0)]).unwrap();
        assert_eq!(graph.to_string(), "3 vertices, 3 edges\n0: 1 \n1: 0 \n2: 2 \n");

        assert_eq!(Graph::new(0).to_string(), "0 vertices, 0 edges\n");
    }

    #[test]
    fn edge_counter_overflow_leaves_graph_untouched() {
        let mut graph = Graph {
            nbs: vec![ArrNeighborhood::new(3); 3],
            num_edges: NumEdges::MAX,
        };

        let err = graph.add_edge(0, 1).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(graph.number_of_edges(), NumEdges::MAX);
        assert_eq!(graph.degrees().collect_vec(), vec![0, 0, 0]);

        // endpoints are still checked first
        assert!(graph.add_edge(0, 3).unwrap_err().is_out_of_range());

        let mut graph = AdjMatrixGraph {
            nbs: vec![BitNeighborhood::new(2); 2],
            num_edges: NumEdges::MAX,
        };
        assert!(graph.add_edge(1, 1).unwrap_err().is_invalid_argument());
        assert!(!graph.has_edge(1, 1));
        assert_eq!(graph.number_of_self_loops(), 0);
    }

    #[test]
    fn degree_change_per_insertion() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [1 as NumNodes, 5, 30] {
            let mut list = Graph::new(n);
            let mut matrix = AdjMatrixGraph::new(n);

            for _ in 0..(n * 4) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);

                let (list_u, list_v) = (list.degree_of(u), list.degree_of(v));
                let (matrix_u, matrix_v) = (matrix.degree_of(u), matrix.degree_of(v));
                let was_adjacent = matrix.has_edge(u, v);

                list.add_edge(u, v).unwrap();
                matrix.add_edge(u, v).unwrap();

                let added = NumNodes::from(!was_adjacent);
                if u == v {
                    assert_eq!(list.degree_of(u), list_u + 1);
                    assert_eq!(matrix.degree_of(u), matrix_u + added);
                } else {
                    assert_eq!(list.degree_of(u), list_u + 1);
                    assert_eq!(list.degree_of(v), list_v + 1);
                    assert_eq!(matrix.degree_of(u), matrix_u + added);
                    assert_eq!(matrix.degree_of(v), matrix_v + added);
                }
            }

            assert_eq!(list.number_of_edges(), n * 4);
            assert_eq!(matrix.number_of_edges(), n * 4);
        }
    }
}
