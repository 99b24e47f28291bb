//! Disjoint-set forest over vertex ids

use crate::graph::VertexId;
use rustc_hash::FxHashMap;

/// Union-find with path compression and union by rank.
///
/// Vertex ids are mapped to dense indices at construction, so the parent
/// and rank tables are flat vectors rather than hash maps.
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    index_of: FxHashMap<VertexId, usize>,
}

impl UnionFind {
    /// Build a forest of singletons, one per given vertex.
    pub fn new(vertices: &[VertexId]) -> Self {
        let mut index_of = FxHashMap::default();
        for (i, &v) in vertices.iter().enumerate() {
            index_of.insert(v, i);
        }
        UnionFind {
            parent: (0..vertices.len()).collect(),
            rank: vec![0; vertices.len()],
            index_of,
        }
    }

    fn find_root(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find_root(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    /// Representative of the set containing `v`. None for unknown vertices.
    pub fn find(&mut self, v: VertexId) -> Option<usize> {
        let i = *self.index_of.get(&v)?;
        Some(self.find_root(i))
    }

    /// Merge the sets containing `a` and `b`. Returns true if the sets were
    /// distinct (a merge happened), false if already joined or either vertex
    /// is unknown.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let (ra, rb) = match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => (ra, rb),
            _ => return false,
        };
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra;
        } else {
            self.parent[rb] = ra;
            self.rank[ra] += 1;
        }
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: VertexId, b: VertexId) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::RangeInclusive<u64>) -> Vec<VertexId> {
        range.map(VertexId::new).collect()
    }

    #[test]
    fn test_singletons_start_disjoint() {
        let vs = ids(1..=4);
        let mut uf = UnionFind::new(&vs);
        assert!(!uf.connected(vs[0], vs[1]));
        assert!(uf.connected(vs[2], vs[2]));
    }

    #[test]
    fn test_union_and_find() {
        let vs = ids(1..=5);
        let mut uf = UnionFind::new(&vs);
        assert!(uf.union(vs[0], vs[1]));
        assert!(uf.union(vs[1], vs[2]));
        assert!(!uf.union(vs[0], vs[2]));

        assert!(uf.connected(vs[0], vs[2]));
        assert!(!uf.connected(vs[0], vs[3]));
    }

    #[test]
    fn test_unknown_vertex() {
        let vs = ids(1..=2);
        let mut uf = UnionFind::new(&vs);
        assert_eq!(uf.find(VertexId::new(99)), None);
        assert!(!uf.union(vs[0], VertexId::new(99)));
    }
}
