/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
Node ids read from text are signed (`RawNode`) until they pass the range check of the graph.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `n - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// A node id as it appears in an input file, before it is validated against a graph
pub type RawNode = i64;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
