//! Single-source shortest paths: BFS for unit weights, Dijkstra for
//! non-negative weights

use super::{AlgoError, AlgoResult};
use crate::graph::{Graph, VertexId, Weight};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use tracing::debug;

/// Distances and predecessor tree from a single source.
///
/// Unreachable vertices are simply absent from the tables: `distance`
/// returns `None`, never a sentinel that could be confused with a real
/// zero-weight path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    pub source: VertexId,
    pub dist: FxHashMap<VertexId, Weight>,
    pub predecessor: FxHashMap<VertexId, VertexId>,
}

impl ShortestPaths {
    /// Shortest distance from the source, `None` if unreachable.
    pub fn distance(&self, v: VertexId) -> Option<Weight> {
        self.dist.get(&v).copied()
    }

    /// Reconstruct the shortest path from the source to `v`.
    ///
    /// `path_to(source)` is the zero-edge path `[source]`; unreachable
    /// targets give `None`.
    pub fn path_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        if !self.dist.contains_key(&v) {
            return None;
        }
        let mut path = vec![v];
        let mut current = v;
        while let Some(&prev) = self.predecessor.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// BFS shortest paths where every edge counts 1, ignoring stored weights.
/// Distances are fixed at first discovery.
pub fn unweighted(graph: &Graph, source: VertexId) -> AlgoResult<ShortestPaths> {
    if !graph.contains(source) {
        return Err(AlgoError::VertexNotFound(source));
    }

    let mut dist = FxHashMap::default();
    let mut predecessor = FxHashMap::default();
    let mut queue = VecDeque::new();
    dist.insert(source, 0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let d = dist[&v];
        for edge in graph.out_edges(v) {
            if !dist.contains_key(&edge.to()) {
                dist.insert(edge.to(), d + 1);
                predecessor.insert(edge.to(), v);
                queue.push_back(edge.to());
            }
        }
    }

    Ok(ShortestPaths {
        source,
        dist,
        predecessor,
    })
}

#[derive(Eq, PartialEq)]
struct State {
    dist: Weight,
    vertex: VertexId,
}

// Reversed ordering turns std's max-heap into a min-heap; ties break on
// the lower vertex id for determinism.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm with a binary heap and lazy deletion.
///
/// Stale heap entries are skipped on extraction instead of decreased in
/// place. Any negative edge weight is rejected before the search starts.
pub fn dijkstra(graph: &Graph, source: VertexId) -> AlgoResult<ShortestPaths> {
    if !graph.contains(source) {
        return Err(AlgoError::VertexNotFound(source));
    }
    for edge in graph.edges() {
        if edge.weight() < 0 {
            return Err(AlgoError::NegativeWeight {
                from: edge.from(),
                to: edge.to(),
                weight: edge.weight(),
            });
        }
    }

    let mut dist: FxHashMap<VertexId, Weight> = FxHashMap::default();
    let mut predecessor = FxHashMap::default();
    let mut heap = BinaryHeap::new();
    dist.insert(source, 0);
    heap.push(State {
        dist: 0,
        vertex: source,
    });

    while let Some(State { dist: d, vertex: v }) = heap.pop() {
        if dist.get(&v).map_or(true, |&best| d > best) {
            continue;
        }
        for edge in graph.out_edges(v) {
            let candidate = d + edge.weight();
            if dist.get(&edge.to()).map_or(true, |&best| candidate < best) {
                dist.insert(edge.to(), candidate);
                predecessor.insert(edge.to(), v);
                heap.push(State {
                    dist: candidate,
                    vertex: edge.to(),
                });
            }
        }
    }

    debug!(source = %source, settled = dist.len(), "dijkstra complete");
    Ok(ShortestPaths {
        source,
        dist,
        predecessor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unweighted_distances() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        let c = g.add_vertex("c");
        let d = g.add_vertex("d");
        g.add_edge(a, b, 9).unwrap(); // weight ignored
        g.add_edge(b, c, 9).unwrap();
        g.add_edge(a, c, 9).unwrap();

        let sp = unweighted(&g, a).unwrap();
        assert_eq!(sp.distance(a), Some(0));
        assert_eq!(sp.distance(b), Some(1));
        assert_eq!(sp.distance(c), Some(1));
        assert_eq!(sp.distance(d), None);
        assert_eq!(sp.path_to(c), Some(vec![a, c]));
        assert_eq!(sp.path_to(d), None);
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        let c = g.add_vertex("c");
        g.add_edge(a, c, 10).unwrap();
        g.add_edge(a, b, 3).unwrap();
        g.add_edge(b, c, 4).unwrap();

        let sp = dijkstra(&g, a).unwrap();
        assert_eq!(sp.distance(c), Some(7));
        assert_eq!(sp.path_to(c), Some(vec![a, b, c]));
    }

    #[test]
    fn test_dijkstra_zero_weight_is_not_unreachable() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        let c = g.add_vertex("c");
        g.add_edge(a, b, 0).unwrap();

        let sp = dijkstra(&g, a).unwrap();
        assert_eq!(sp.distance(b), Some(0));
        assert_eq!(sp.distance(c), None);
    }

    #[test]
    fn test_dijkstra_rejects_negative_weight() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        g.add_edge(a, b, -1).unwrap();

        assert_eq!(
            dijkstra(&g, a),
            Err(AlgoError::NegativeWeight {
                from: a,
                to: b,
                weight: -1
            })
        );
    }

    #[test]
    fn test_missing_source() {
        let g = Graph::new();
        let ghost = VertexId::new(1);
        assert_eq!(unweighted(&g, ghost), Err(AlgoError::VertexNotFound(ghost)));
        assert_eq!(dijkstra(&g, ghost), Err(AlgoError::VertexNotFound(ghost)));
    }

    #[test]
    fn test_path_to_source_is_trivial() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let sp = dijkstra(&g, a).unwrap();
        assert_eq!(sp.path_to(a), Some(vec![a]));
    }
}
