//! Disjoint-set (union-find) over group ids.
//!
//! The assigner discovers that two groups are connected one record at a time.
//! Calling [`DisjointSet::union`] at the moment of discovery keeps the closure
//! transitive no matter in which order the connections show up:
//!
//! ```text
//! union(2, 1)   {1,2}  {3}
//! union(3, 1)   {1,2,3}          <- reaches 2 through the shared root
//! ```
//!
//! Ids are 1-based; slot 0 is allocated but never handed out.
//!
//! ## Invariants
//!
//! - `parent[id] == id` iff `id` is a root.
//! - `size[root]` is the number of ids in the root's set. Sizes of non-roots
//!   are stale and never read.

use crate::GroupId;

#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<GroupId>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub fn new() -> Self {
        DisjointSet { parent: vec![0], size: vec![1] }
    }

    /// Register the next id and return it. Ids are issued as 1, 2, 3, ...
    pub fn make_set(&mut self) -> GroupId {
        let id = self.parent.len() as GroupId;
        self.parent.push(id);
        self.size.push(1);
        id
    }

    /// Number of ids issued so far.
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Representative of `id`'s set, compressing the path on the way up.
    pub fn find(&mut self, id: GroupId) -> GroupId {
        let mut root = id;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut cursor = id;
        while self.parent[cursor as usize] != root {
            let next = self.parent[cursor as usize];
            self.parent[cursor as usize] = root;
            cursor = next;
        }
        root
    }

    /// Merge the sets holding `a` and `b`; the larger set's root survives.
    ///
    /// Ties keep the smaller id as root, so the earliest group gives its id to
    /// the consolidated group. Returns `false` when both were already joined.
    pub fn union(&mut self, a: GroupId, b: GroupId) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        let (root, child) = match self.size[ra as usize].cmp(&self.size[rb as usize]) {
            std::cmp::Ordering::Greater => (ra, rb),
            std::cmp::Ordering::Less => (rb, ra),
            std::cmp::Ordering::Equal => (ra.min(rb), ra.max(rb)),
        };
        self.parent[child as usize] = root;
        self.size[root as usize] += self.size[child as usize];
        true
    }

    /// True when `a` and `b` are in the same set.
    pub fn connected(&mut self, a: GroupId, b: GroupId) -> bool {
        self.find(a) == self.find(b)
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one() {
        let mut sets = DisjointSet::new();
        assert!(sets.is_empty());
        assert_eq!(sets.make_set(), 1);
        assert_eq!(sets.make_set(), 2);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets.find(2), 2);
    }

    #[test]
    fn union_is_transitive() {
        let mut sets = DisjointSet::new();
        let ids: Vec<GroupId> = (0..4).map(|_| sets.make_set()).collect();

        assert!(sets.union(ids[1], ids[0]));
        assert!(sets.union(ids[2], ids[0]));
        assert!(!sets.union(ids[2], ids[1]));

        assert!(sets.connected(ids[1], ids[2]));
        assert!(!sets.connected(ids[0], ids[3]));
    }

    #[test]
    fn larger_set_keeps_its_root() {
        let mut sets = DisjointSet::new();
        for _ in 0..4 {
            sets.make_set();
        }
        sets.union(3, 4);
        sets.union(1, 3);

        assert_eq!(sets.find(1), 3);
        assert_eq!(sets.find(4), 3);
    }

    #[test]
    fn ties_keep_the_smaller_id() {
        let mut sets = DisjointSet::new();
        sets.make_set();
        sets.make_set();
        sets.union(2, 1);
        assert_eq!(sets.find(2), 1);
    }

    #[test]
    fn find_compresses_long_chains() {
        let mut sets = DisjointSet::new();
        for _ in 0..6 {
            sets.make_set();
        }
        for id in 2..=6 {
            sets.union(1, id);
        }
        for id in 1..=6 {
            assert_eq!(sets.find(id), 1);
            assert_eq!(sets.parent[id as usize], 1);
        }
    }
}
