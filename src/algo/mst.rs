//! Minimum spanning trees: Prim and Kruskal
//!
//! Undirected graphs are modeled by inserting both directed arcs; the
//! visited/union-find checks drop the mirror of every accepted edge, so
//! each undirected edge contributes at most once.

use super::union_find::UnionFind;
use super::{AlgoError, AlgoResult};
use crate::graph::{Edge, EdgeId, Graph, VertexId, Weight};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// An edge accepted into a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstEdge {
    pub id: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl MstEdge {
    fn of(edge: &Edge) -> Self {
        MstEdge {
            id: edge.id(),
            from: edge.from(),
            to: edge.to(),
            weight: edge.weight(),
        }
    }
}

/// A minimum spanning tree, or forest when the input is disconnected.
///
/// `spanning` is false whenever fewer than `|V| - 1` edges were accepted,
/// which is how a disconnected input surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mst {
    pub edges: Vec<MstEdge>,
    pub total_weight: Weight,
    pub spanning: bool,
}

impl Mst {
    fn new(edges: Vec<MstEdge>, vertex_count: usize) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        let spanning = vertex_count == 0 || edges.len() == vertex_count - 1;
        Mst {
            edges,
            total_weight,
            spanning,
        }
    }
}

#[derive(PartialEq, Eq)]
struct Frontier {
    weight: Weight,
    edge: EdgeId,
    from: VertexId,
    to: VertexId,
}

// Min-heap by weight, edge id breaking ties deterministically.
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.edge.cmp(&self.edge))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim's algorithm seeded at the lowest vertex id, restarting at the next
/// unvisited vertex until every component is covered. Disconnected input
/// yields a spanning forest with `spanning == false`.
pub fn prim(graph: &Graph) -> Mst {
    let mut visited = FxHashSet::default();
    let mut edges = Vec::new();
    for seed in graph.vertex_ids() {
        if !visited.contains(&seed) {
            grow_from(graph, seed, &mut visited, &mut edges);
        }
    }

    debug!(accepted = edges.len(), "prim complete");
    Mst::new(edges, graph.vertex_count())
}

/// Prim's algorithm growing a single tree from `seed`. Vertices outside
/// the seed's component are left untouched, so `spanning` reports whether
/// the seed reaches the whole graph.
pub fn prim_from(graph: &Graph, seed: VertexId) -> AlgoResult<Mst> {
    if !graph.contains(seed) {
        return Err(AlgoError::VertexNotFound(seed));
    }
    let mut visited = FxHashSet::default();
    let mut edges = Vec::new();
    grow_from(graph, seed, &mut visited, &mut edges);
    Ok(Mst::new(edges, graph.vertex_count()))
}

fn grow_from(
    graph: &Graph,
    seed: VertexId,
    visited: &mut FxHashSet<VertexId>,
    edges: &mut Vec<MstEdge>,
) {
    let mut heap = BinaryHeap::new();
    visited.insert(seed);
    push_frontier(graph, seed, &mut heap);

    while let Some(Frontier {
        edge, from, to, ..
    }) = heap.pop()
    {
        if !visited.insert(to) {
            continue;
        }
        if let Some(accepted) = graph.vertex(from).and_then(|v| v.edge(edge)) {
            edges.push(MstEdge::of(accepted));
        }
        push_frontier(graph, to, &mut heap);
    }
}

fn push_frontier(graph: &Graph, v: VertexId, heap: &mut BinaryHeap<Frontier>) {
    for edge in graph.out_edges(v) {
        heap.push(Frontier {
            weight: edge.weight(),
            edge: edge.id(),
            from: edge.from(),
            to: edge.to(),
        });
    }
}

/// Kruskal's algorithm: edges in ascending weight order (stable, so the
/// scan encounter order breaks ties), accepted greedily when their
/// endpoints sit in different union-find sets.
pub fn kruskal(graph: &Graph) -> Mst {
    let vertices = graph.vertex_ids();
    let mut sorted = graph.edges();
    sorted.sort_by_key(|e| e.weight());

    let mut uf = UnionFind::new(&vertices);
    let mut edges = Vec::new();
    let target = vertices.len().saturating_sub(1);

    for edge in sorted {
        if edges.len() == target {
            break;
        }
        if uf.union(edge.from(), edge.to()) {
            edges.push(MstEdge::of(edge));
        }
    }

    debug!(accepted = edges.len(), "kruskal complete");
    Mst::new(edges, graph.vertex_count())
}
