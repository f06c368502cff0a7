/*!
`ugraph_basics` is a small library for **u**ndirected graphs on a fixed set of nodes, in the
style of the textbook `Graph` API:
- Nodes are numbered `0` to `n - 1`, and `n` is fixed on construction,
- Edges can only be added; parallel edges and self-loops are allowed,
- Graphs can be loaded from (and written to) a plain edge-list file.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

There are two representations, see [`repr`]:
- [`Graph`](crate::repr::Graph) stores an adjacency list per node. Every insertion is recorded,
  so parallel edges and repeated self-loops accumulate in degrees and in the self-loop count.
- [`AdjMatrixGraph`](crate::repr::AdjMatrixGraph) stores a boolean adjacency matrix. Repeated
  insertions of the same edge collapse into one matrix cell.

Both count every successful insertion in `number_of_edges()` and a self-loop contributes `1` to
the degree of its node.

# Usage

```
use ugraph_basics::prelude::*;

let graph = Graph::try_read_edge_list("3\n2\n0 1\n1 2\n".as_bytes()).unwrap();

assert_eq!(graph.number_of_edges(), 2);
assert_eq!(graph.try_degree_of(1).unwrap(), 2);
assert_eq!(graph.max_degree(), 2);
assert_eq!(graph.number_of_self_loops(), 0);
assert_eq!(graph.to_string(), "3 vertices, 2 edges\n0: 1 \n1: 0 2 \n2: 1 \n");
```

Errors are reported as [`GraphError`]; operations that fail leave the graph unchanged.
The [`interchange`] module converts a graph into a deduplicated edge list for other libraries.
*/

pub mod edge;
pub mod error;
pub mod interchange;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `ugraph_basics::prelude` includes definitions for nodes, edges and errors, all graph operation
/// traits, both representations and the edge-list readers/writers.
pub mod prelude {
    pub use super::{
        edge::*,
        error::*,
        io::{EdgeListRead, EdgeListWrite, GraphReader, GraphWriter},
        node::*,
        ops::*,
        repr::*,
    };
}
