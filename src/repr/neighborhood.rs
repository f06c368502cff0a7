use super::*;

/// Basic Neighborhood-Impl. using `Vec<Node>`.
/// Keeps insertion order and records every insertion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArrNeighborhood(Vec<Node>);

impl ArrNeighborhood {
    /// Returns a slice-reference of the neighborhood
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }
}

/// A Neighborhood represented by a NodeBitSet, ie. one row of an adjacency matrix.
/// Neighbors are reported in ascending order and every neighbor is recorded at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct BitNeighborhood(NodeBitSet);

impl BitNeighborhood {
    /// Returns the underlying matrix row
    pub fn as_bitset(&self) -> &NodeBitSet {
        &self.0
    }
}

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(NodeBitSet::new(n))
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.cardinality()
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter_set_bits()
    }

    fn has_neighbor(&self, u: Node) -> bool {
        self.0.get_bit(u)
    }

    fn multiplicity_of(&self, u: Node) -> NumNodes {
        self.0.get_bit(u) as NumNodes
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.set_bit(u);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn arr_neighborhood_keeps_duplicates() {
        let mut nbs = ArrNeighborhood::new(5);
        for u in [3, 1, 3, 4] {
            nbs.add_neighbor(u);
        }

        assert_eq!(nbs.num_of_neighbors(), 4);
        assert_eq!(nbs.neighbors().collect_vec(), vec![3, 1, 3, 4]);
        assert_eq!(nbs.as_slice(), &[3, 1, 3, 4]);
        assert_eq!(nbs.multiplicity_of(3), 2);
        assert_eq!(nbs.multiplicity_of(0), 0);
        assert!(nbs.has_neighbor(4));
        assert!(!nbs.has_neighbor(2));
    }

    #[test]
    fn bit_neighborhood_collapses_duplicates() {
        let mut nbs = BitNeighborhood::new(5);
        for u in [3, 1, 3, 4] {
            nbs.add_neighbor(u);
        }

        assert_eq!(nbs.num_of_neighbors(), 3);
        assert_eq!(nbs.neighbors().collect_vec(), vec![1, 3, 4]);
        assert_eq!(nbs.multiplicity_of(3), 1);
        assert_eq!(nbs.multiplicity_of(0), 0);
        assert!(nbs.has_neighbor(4));
        assert!(!nbs.has_neighbor(2));
        assert_eq!(nbs.as_bitset().cardinality(), 3);
    }
}
