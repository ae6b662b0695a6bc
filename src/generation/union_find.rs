//! Disjoint-set forest keyed by cell index

use crate::maze::CellId;

/// Union-find over `0..len` with path compression and union by size
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<CellId>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Every element starts in its own singleton set
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Representative of the set containing `id`
    ///
    /// Ids outside the forest are their own representative.
    pub fn find(&mut self, id: CellId) -> CellId {
        let mut root = id;
        while let Some(&parent) = self.parent.get(root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        // Point every node on the walked chain straight at the root
        let mut current = id;
        while current != root {
            let Some(slot) = self.parent.get_mut(current) else {
                break;
            };
            current = std::mem::replace(slot, root);
        }

        root
    }

    /// Merge the sets of `a` and `b`
    ///
    /// Returns `false` when they were already joined.
    pub fn union(&mut self, a: CellId, b: CellId) -> bool {
        let mut big = self.find(a);
        let mut small = self.find(b);
        if big == small {
            return false;
        }

        let size_of = |sizes: &[usize], id: CellId| sizes.get(id).copied().unwrap_or(1);
        if size_of(&self.size, big) < size_of(&self.size, small) {
            std::mem::swap(&mut big, &mut small);
        }

        let merged = size_of(&self.size, big) + size_of(&self.size, small);
        if let Some(parent) = self.parent.get_mut(small) {
            *parent = big;
        }
        if let Some(size) = self.size.get_mut(big) {
            *size = merged;
        }
        true
    }
}
