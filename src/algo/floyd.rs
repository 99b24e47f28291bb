//! Floyd–Warshall all-pairs shortest paths over dense matrices

use crate::graph::{Graph, VertexId, Weight};
use ndarray::Array2;
use rustc_hash::FxHashMap;
use tracing::debug;

const INF: Weight = Weight::MAX;

/// All-pairs distances plus a routing table for path reconstruction.
///
/// Rows and columns follow the graph's ascending vertex-id order; the INF
/// sentinel never leaks through the accessors.
#[derive(Debug, Clone)]
pub struct FloydResult {
    vertices: Vec<VertexId>,
    index_of: FxHashMap<VertexId, usize>,
    dist: Array2<Weight>,
    next: Array2<Option<usize>>,
}

impl FloydResult {
    /// Vertices in matrix row/column order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Shortest distance from `u` to `v`, `None` if unreachable or either
    /// vertex is unknown.
    pub fn distance(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        let i = *self.index_of.get(&u)?;
        let j = *self.index_of.get(&v)?;
        let d = self.dist[[i, j]];
        if d == INF {
            None
        } else {
            Some(d)
        }
    }

    /// Reconstruct the shortest path from `u` to `v` by walking the routing
    /// table. `path(v, v)` is the zero-edge path `[v]`.
    pub fn path(&self, u: VertexId, v: VertexId) -> Option<Vec<VertexId>> {
        let mut i = *self.index_of.get(&u)?;
        let j = *self.index_of.get(&v)?;
        if self.dist[[i, j]] == INF {
            return None;
        }

        let mut path = vec![u];
        while i != j {
            i = self.next[[i, j]]?;
            path.push(self.vertices[i]);
        }
        Some(path)
    }
}

/// Floyd–Warshall over every ordered vertex pair.
///
/// When parallel edges share an ordered pair, the minimum weight wins.
/// Negative-weight cycles are outside the supported input class.
pub fn floyd(graph: &Graph) -> FloydResult {
    let vertices = graph.vertex_ids();
    let n = vertices.len();
    let mut index_of = FxHashMap::default();
    for (i, &v) in vertices.iter().enumerate() {
        index_of.insert(v, i);
    }

    let mut dist = Array2::from_elem((n, n), INF);
    let mut next: Array2<Option<usize>> = Array2::from_elem((n, n), None);
    for i in 0..n {
        dist[[i, i]] = 0;
        next[[i, i]] = Some(i);
    }
    for edge in graph.edges() {
        if let (Some(&i), Some(&j)) = (index_of.get(&edge.from()), index_of.get(&edge.to())) {
            if edge.weight() < dist[[i, j]] {
                dist[[i, j]] = edge.weight();
                next[[i, j]] = Some(j);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[[i, k]] == INF {
                continue;
            }
            for j in 0..n {
                if dist[[k, j]] == INF {
                    continue;
                }
                let through_k = dist[[i, k]] + dist[[k, j]];
                if through_k < dist[[i, j]] {
                    dist[[i, j]] = through_k;
                    next[[i, j]] = next[[i, k]];
                }
            }
        }
    }

    debug!(vertices = n, "floyd complete");
    FloydResult {
        vertices,
        index_of,
        dist,
        next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with_shortcut() -> (Graph, Vec<VertexId>) {
        // 1 -> 2 -> 3 -> 4 with a direct 1 -> 3 that is more expensive
        let mut g = Graph::new();
        let vs: Vec<VertexId> = (1..=4).map(|i| g.add_vertex(format!("v{}", i))).collect();
        g.add_edge(vs[0], vs[1], 2).unwrap();
        g.add_edge(vs[1], vs[2], 3).unwrap();
        g.add_edge(vs[2], vs[3], 1).unwrap();
        g.add_edge(vs[0], vs[2], 6).unwrap();
        (g, vs)
    }

    #[test]
    fn test_all_pairs_distances() {
        let (g, vs) = chain_with_shortcut();
        let result = floyd(&g);

        assert_eq!(result.distance(vs[0], vs[2]), Some(5));
        assert_eq!(result.distance(vs[0], vs[3]), Some(6));
        assert_eq!(result.distance(vs[3], vs[0]), None);
    }

    #[test]
    fn test_path_reconstruction() {
        let (g, vs) = chain_with_shortcut();
        let result = floyd(&g);

        assert_eq!(
            result.path(vs[0], vs[3]),
            Some(vec![vs[0], vs[1], vs[2], vs[3]])
        );
        assert_eq!(result.path(vs[3], vs[0]), None);
    }

    #[test]
    fn test_self_path_is_trivial() {
        let (g, vs) = chain_with_shortcut();
        let result = floyd(&g);
        assert_eq!(result.distance(vs[1], vs[1]), Some(0));
        assert_eq!(result.path(vs[1], vs[1]), Some(vec![vs[1]]));
    }

    #[test]
    fn test_duplicate_edges_take_minimum() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        g.add_edge(a, b, 9).unwrap();
        g.add_edge(a, b, 4).unwrap();

        let result = floyd(&g);
        assert_eq!(result.distance(a, b), Some(4));
    }

    #[test]
    fn test_unknown_vertex() {
        let g = Graph::new();
        let ghost = VertexId::new(7);
        let result = floyd(&g);
        assert_eq!(result.distance(ghost, ghost), None);
        assert_eq!(result.path(ghost, ghost), None);
    }
}
