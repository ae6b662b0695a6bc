//! Tests for the disjoint-set forest

#[cfg(test)]
mod tests {
    use linked_labyrinth::generation::union_find::DisjointSet;

    // Tests every element starts alone
    // Verified by initialising all parents to zero
    #[test]
    fn test_new_sets_are_singletons() {
        let mut sets = DisjointSet::new(4);
        for id in 0..4 {
            assert_eq!(sets.find(id), id);
        }
        assert_ne!(sets.find(0), sets.find(1));
    }

    // Tests union joins once and reports repeated joins
    // Verified by always returning true from union
    #[test]
    fn test_union_reports_merge() {
        let mut sets = DisjointSet::new(5);
        assert!(sets.union(0, 1));
        assert!(sets.union(1, 2));
        assert!(!sets.union(0, 2));
        assert_eq!(sets.find(0), sets.find(2));
        assert_ne!(sets.find(0), sets.find(3));
    }

    // Tests long chains collapse to a single representative
    // Verified by skipping parent updates in union
    #[test]
    fn test_chain_shares_root() {
        let mut sets = DisjointSet::new(8);
        for id in 1..8 {
            sets.union(id - 1, id);
        }
        let root = sets.find(7);
        for id in 0..8 {
            assert_eq!(sets.find(id), root);
        }
    }

    // Tests ids outside the forest are inert
    // Verified by removing the bounds check in find
    #[test]
    fn test_out_of_range_ids() {
        let mut sets = DisjointSet::new(2);
        assert_eq!(sets.find(9), 9);
        assert_eq!(sets.find(1), 1);
    }
}
