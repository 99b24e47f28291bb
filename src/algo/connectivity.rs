//! Strongly connected components and articulation points
//!
//! Both passes use explicit frame stacks instead of recursion, so deep
//! path-shaped graphs cannot overflow the call stack.

use crate::graph::{Graph, VertexId};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Strongly connected component decomposition.
///
/// `components` partition the vertex set; each component's vertices are
/// sorted ascending and `component_of` maps every vertex to its component
/// index. Which vertices share a component does not depend on edge
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scc {
    pub components: Vec<Vec<VertexId>>,
    pub component_of: FxHashMap<VertexId, usize>,
}

impl Scc {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Whether two vertices are strongly connected.
    pub fn same_component(&self, a: VertexId, b: VertexId) -> bool {
        match (self.component_of.get(&a), self.component_of.get(&b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }
}

/// Kosaraju's two-pass algorithm.
///
/// Pass one records a post-order over the graph; pass two runs DFS on the
/// transpose in reverse post-order, harvesting one component per root.
pub fn kosaraju(graph: &Graph) -> Scc {
    // Pass 1: post-order finish times, iteratively.
    let mut visited = FxHashSet::default();
    let mut post_order = Vec::with_capacity(graph.vertex_count());
    for root in graph.vertex_ids() {
        if visited.contains(&root) {
            continue;
        }
        visited.insert(root);
        let mut stack = vec![(root, neighbors_of(graph, root))];
        while let Some((v, iter)) = stack.last_mut() {
            match iter.next() {
                Some(to) => {
                    if visited.insert(to) {
                        stack.push((to, neighbors_of(graph, to)));
                    }
                }
                None => {
                    post_order.push(*v);
                    stack.pop();
                }
            }
        }
    }

    // Pass 2: DFS on the transpose, roots taken in reverse finish order.
    let transposed = graph.transpose();
    let mut assigned = FxHashSet::default();
    let mut components = Vec::new();
    let mut component_of = FxHashMap::default();

    for &root in post_order.iter().rev() {
        if assigned.contains(&root) {
            continue;
        }
        let index = components.len();
        let mut component = Vec::new();
        let mut stack = vec![root];
        assigned.insert(root);
        while let Some(v) = stack.pop() {
            component.push(v);
            component_of.insert(v, index);
            for edge in transposed.out_edges(v) {
                if assigned.insert(edge.to()) {
                    stack.push(edge.to());
                }
            }
        }
        component.sort();
        components.push(component);
    }

    debug!(components = components.len(), "kosaraju complete");
    Scc {
        components,
        component_of,
    }
}

fn neighbors_of(graph: &Graph, v: VertexId) -> std::vec::IntoIter<VertexId> {
    graph
        .out_edges(v)
        .map(|e| e.to())
        .collect::<Vec<_>>()
        .into_iter()
}

struct Frame {
    vertex: VertexId,
    parent: Option<VertexId>,
    neighbors: std::vec::IntoIter<VertexId>,
}

/// Articulation points of the graph viewed as undirected, sorted by id.
///
/// DFS low-link over every component. A non-root vertex is a cut vertex
/// iff some DFS child's subtree cannot reach above the vertex (low ≥ its
/// discovery number); a root iff it has two or more DFS children.
pub fn articulation_points(graph: &Graph) -> Vec<VertexId> {
    let mut disc: FxHashMap<VertexId, u64> = FxHashMap::default();
    let mut low: FxHashMap<VertexId, u64> = FxHashMap::default();
    let mut counter: u64 = 0;
    let mut cut: FxHashSet<VertexId> = FxHashSet::default();

    for root in graph.vertex_ids() {
        if disc.contains_key(&root) {
            continue;
        }
        disc.insert(root, counter);
        low.insert(root, counter);
        counter += 1;
        let mut root_children = 0usize;

        let mut stack = vec![Frame {
            vertex: root,
            parent: None,
            neighbors: neighbors_of(graph, root),
        }];
        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex;
            match frame.neighbors.next() {
                Some(to) => {
                    if let Some(&to_disc) = disc.get(&to) {
                        // Back or cross edge; low never rises above an
                        // already discovered neighbor.
                        if let Some(lv) = low.get_mut(&v) {
                            *lv = (*lv).min(to_disc);
                        }
                    } else {
                        disc.insert(to, counter);
                        low.insert(to, counter);
                        counter += 1;
                        stack.push(Frame {
                            vertex: to,
                            parent: Some(v),
                            neighbors: neighbors_of(graph, to),
                        });
                    }
                }
                None => {
                    let parent = frame.parent;
                    stack.pop();
                    if let Some(p) = parent {
                        let child_low = low.get(&v).copied().unwrap_or(u64::MAX);
                        if let Some(lp) = low.get_mut(&p) {
                            *lp = (*lp).min(child_low);
                        }
                        if p == root {
                            root_children += 1;
                        } else if disc.get(&p).map_or(false, |&pd| child_low >= pd) {
                            cut.insert(p);
                        }
                    }
                }
            }
        }

        if root_children >= 2 {
            cut.insert(root);
        }
    }

    let mut result: Vec<VertexId> = cut.into_iter().collect();
    result.sort();
    result
}
