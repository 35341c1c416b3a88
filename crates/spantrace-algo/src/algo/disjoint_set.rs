// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Disjoint-Set (Union-Find) over dense vertex slots.
//!
//! Union by rank with path halving. When two roots of equal rank are merged,
//! the root of the first argument survives and its rank grows by one, so the
//! resulting forest depends only on the sequence of calls.

/// Union-Find with union by rank and path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// One singleton component per slot in `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Current number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Representative of the component containing `x`.
    pub fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            self.parent[x as usize] = self.parent[self.parent[x as usize] as usize]; // path halving
            x = self.parent[x as usize];
        }
        x
    }

    /// Whether `a` and `b` are in the same component.
    pub fn same(&mut self, a: u32, b: u32) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merge the components of `a` and `b`.
    ///
    /// Returns `false` without changing anything if they already share a
    /// component (the edge would form a cycle).
    pub fn union(&mut self, a: u32, b: u32) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra as usize].cmp(&self.rank[rb as usize]) {
            std::cmp::Ordering::Less => self.parent[ra as usize] = rb,
            std::cmp::Ordering::Greater => self.parent[rb as usize] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb as usize] = ra;
                self.rank[ra as usize] += 1;
            }
        }
        self.components -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn distinct_roots(set: &mut DisjointSet) -> usize {
        (0..set.len() as u32)
            .map(|x| set.find(x))
            .collect::<HashSet<_>>()
            .len()
    }

    #[test]
    fn test_union_and_cycle() {
        let mut set = DisjointSet::new(4);
        assert_eq!(set.component_count(), 4);

        assert!(set.union(0, 1));
        assert!(set.union(2, 3));
        assert!(set.union(1, 2));
        assert_eq!(set.component_count(), 1);

        // Every further union would close a cycle
        assert!(!set.union(0, 3));
        assert!(!set.union(3, 0));
        assert_eq!(set.component_count(), 1);
        assert!(set.same(0, 3));
    }

    #[test]
    fn test_equal_rank_first_root_survives() {
        let mut set = DisjointSet::new(4);
        set.union(0, 1);
        assert_eq!(set.find(1), 0);

        set.union(3, 2);
        assert_eq!(set.find(2), 3);

        // Both roots have rank 1: the first argument's root wins
        set.union(2, 0);
        assert_eq!(set.find(0), 3);
        assert_eq!(set.find(1), 3);
    }

    #[test]
    fn test_lower_rank_attaches_to_higher() {
        let mut set = DisjointSet::new(3);
        set.union(0, 1); // root 0, rank 1
        set.union(2, 0); // rank 0 root 2 attaches under 0
        assert_eq!(set.find(2), 0);
    }

    #[test]
    fn test_find_is_stable_between_unions() {
        let mut set = DisjointSet::new(6);
        set.union(0, 1);
        set.union(1, 2);
        set.union(4, 5);

        let first: Vec<u32> = (0..6).map(|x| set.find(x)).collect();
        let second: Vec<u32> = (0..6).map(|x| set.find(x)).collect();
        assert_eq!(first, second);
        assert_eq!(distinct_roots(&mut set), set.component_count());
        assert_eq!(set.component_count(), 3);
    }
}
