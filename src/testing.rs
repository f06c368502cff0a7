/// Every graph representation should pass the same randomized checks against a simple model.
/// Random edge lists deliberately contain self-loops and repeated edges.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random edges for nodes `0..n` (possibly with loops and duplicates)
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v)
                }).collect_vec()
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.degrees().all(|d| d == 0));
                assert_eq!(graph.max_degree(), 0);
                assert_eq!(graph.number_of_self_loops(), 0);
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m in [n, n * 2, n * 5] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);
                        }
                        let num_loops = edges.iter().filter(|e| e.is_loop()).count() as NumNodes;
                        let num_looped_nodes = (0..n)
                            .filter(|&u| adj_matrix[u as usize].get_bit(u))
                            .count() as NumNodes;

                        let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m);

                        for u in 0..n {
                            let nbs = NodeBitSet::new_with_bits_set(n, graph.neighbors_of(u));
                            assert_eq!(nbs, adj_matrix[u as usize]);
                            assert_eq!(graph.degree_of(u), graph.neighbors_of(u).count() as NumNodes);
                            assert!(graph.degree_of(u) >= adj_matrix[u as usize].cardinality());
                            assert_eq!(graph.try_degree_of(u).unwrap(), graph.degree_of(u));

                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize].get_bit(v));
                            }
                        }

                        assert!(graph.number_of_self_loops() >= num_looped_nodes);
                        assert!(graph.number_of_self_loops() <= num_loops);
                        assert_eq!(graph.max_degree(), graph.degrees().max().unwrap());
                        assert!(graph.try_degree_of(n).is_err());

                        // every normalized edge is reported once per stored entry
                        assert!(graph.ordered_edges(true).iter().all(|e| e.is_normalized()));
                        assert!(graph.edges(true).count() <= m as usize);
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [1 as NumNodes, 10, 20, 50] {
                for _ in 0..10 {
                    let mut graph = <$graph>::new(n);
                    let mut m: NumEdges = 0;

                    for _ in 0..(n * 3) {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        if rng.random_bool(0.2) {
                            let degrees = graph.degrees().collect_vec();
                            let invalid = rng.random_range(n..2 * n);

                            assert!(graph.add_edge(u, invalid).unwrap_err().is_out_of_range());
                            assert!(graph.add_edge(invalid, v).unwrap_err().is_out_of_range());
                            assert!(graph.add_raw_edge((-1, v as RawNode)).unwrap_err().is_out_of_range());

                            assert_eq!(graph.number_of_edges(), m);
                            assert_eq!(graph.degrees().collect_vec(), degrees);
                        } else {
                            graph.add_edge(u, v).unwrap();
                            m += 1;

                            assert_eq!(graph.number_of_edges(), m);
                            assert!(graph.has_edge(u, v));
                            assert!(graph.has_edge(v, u));
                            assert!(graph.self_loops_at(u) > 0 || u != v);
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
