//! Union-find with union by rank and path compression.

use gk_core::Vertex;

/// Disjoint sets over `0..len`, each element initially its own root.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Vertex>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.sets
    }

    /// Root of `v`'s set; every vertex on the walked path is re-pointed at it.
    ///
    /// # Panics
    ///
    /// Panics if `v >= self.len()`.
    pub fn find(&mut self, v: Vertex) -> Vertex {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut curr = v;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        root
    }

    /// Merge the sets of `u` and `v`. Returns `false` if they already shared
    /// a set, which is how spanning-tree construction detects a cycle.
    pub fn union(&mut self, u: Vertex, v: Vertex) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }

        match self.rank[ru].cmp(&self.rank[rv]) {
            std::cmp::Ordering::Less => self.parent[ru] = rv,
            std::cmp::Ordering::Greater => self.parent[rv] = ru,
            std::cmp::Ordering::Equal => {
                self.parent[rv] = ru;
                self.rank[ru] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, u: Vertex, v: Vertex) -> bool {
        self.find(u) == self.find(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut ds = DisjointSet::new(4);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.num_sets(), 4);
        for v in 0..4 {
            assert_eq!(ds.find(v), v);
        }
    }

    #[test]
    fn union_reports_cycles() {
        let mut ds = DisjointSet::new(5);
        assert!(ds.union(0, 1));
        assert!(ds.union(1, 2));
        assert!(!ds.union(0, 2));
        assert!(ds.union(3, 4));
        assert_eq!(ds.num_sets(), 2);
        assert!(ds.same_set(2, 0));
        assert!(!ds.same_set(2, 3));
    }

    #[test]
    fn find_compresses_paths() {
        let mut ds = DisjointSet::new(8);
        for v in 1..8 {
            ds.union(v - 1, v);
        }
        let root = ds.find(7);
        for v in 0..8 {
            assert_eq!(ds.find(v), root);
            assert_eq!(ds.parent[v], root);
        }
    }

    #[test]
    fn rank_stays_logarithmic() {
        let mut ds = DisjointSet::new(1024);
        let mut width = 1;
        while width < 1024 {
            for start in (0..1024).step_by(2 * width) {
                ds.union(start, start + width);
            }
            width *= 2;
        }
        assert_eq!(ds.num_sets(), 1);
        assert!(ds.rank.iter().all(|&r| r <= 10));
    }
}
