/// Disjoint sets over indices 0..n with weighted union by element count
/// and iterative path compression.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates n singleton sets.
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Returns the root of the set containing `x`, compressing the path
    /// to the root on the way.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut x = x;
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }

        root
    }

    /// Merges the sets of `a` and `b`, attaching the smaller set under the
    /// larger. Returns false if they already share a root.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let a = self.find(a);
        let b = self.find(b);
        if a == b {
            return false;
        }

        let (big, small) = if self.size[a] >= self.size[b] { (a, b) } else { (b, a) };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut sets = UnionFind::new(4);
        for i in 0..4 {
            assert_eq!(sets.find(i), i);
        }
    }

    #[test]
    fn test_union_merges_and_is_idempotent() {
        let mut sets = UnionFind::new(4);
        assert!(sets.union(0, 1));
        assert!(!sets.union(0, 1));
        assert_eq!(sets.find(0), sets.find(1));
        assert_ne!(sets.find(0), sets.find(2));
    }

    #[test]
    fn test_smaller_set_attaches_under_larger() {
        let mut sets = UnionFind::new(4);
        sets.union(0, 1);
        // {0, 1} has two elements, {2} has one, so 2 joins 0's root
        assert!(sets.union(2, 0));
        assert_eq!(sets.find(2), sets.find(0));
        assert_eq!(sets.find(2), 0);
    }

    #[test]
    fn test_long_chain() {
        let mut sets = UnionFind::new(64);
        for i in 1..64 {
            sets.union(i - 1, i);
        }
        let root = sets.find(0);
        assert!((0..64).all(|i| sets.find(i) == root));
    }
}
