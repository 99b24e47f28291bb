//! Breadth-first and depth-first traversal forests
//!
//! All traversals cover the whole graph: the outer loop scans vertex ids
//! ascending and starts a new component at every still-unvisited vertex, so
//! the returned lists partition the vertex set even on disconnected input.

use crate::graph::{Graph, VertexId};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Breadth-first traversal. One visit list per reachable component, in
/// first-discovery order.
pub fn bfs(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut visited = FxHashSet::default();
    let mut forest = Vec::new();

    for root in graph.vertex_ids() {
        if visited.contains(&root) {
            continue;
        }
        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        visited.insert(root);
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            component.push(v);
            for edge in graph.out_edges(v) {
                if visited.insert(edge.to()) {
                    queue.push_back(edge.to());
                }
            }
        }
        forest.push(component);
    }

    debug!(components = forest.len(), "bfs complete");
    forest
}

/// Depth-first traversal using the call stack.
///
/// Recursion depth is bounded by the longest simple path; prefer
/// [`dfs_iterative`] for very deep graphs.
pub fn dfs_recursive(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut visited = FxHashSet::default();
    let mut forest = Vec::new();

    for root in graph.vertex_ids() {
        if visited.contains(&root) {
            continue;
        }
        let mut component = Vec::new();
        visit(graph, root, &mut visited, &mut component);
        forest.push(component);
    }

    debug!(components = forest.len(), "dfs complete");
    forest
}

fn visit(
    graph: &Graph,
    v: VertexId,
    visited: &mut FxHashSet<VertexId>,
    component: &mut Vec<VertexId>,
) {
    visited.insert(v);
    component.push(v);
    for edge in graph.out_edges(v) {
        if !visited.contains(&edge.to()) {
            visit(graph, edge.to(), visited, component);
        }
    }
}

/// Depth-first traversal with an explicit stack.
///
/// Neighbors are pushed in reverse edge order so the visit order is
/// identical to [`dfs_recursive`].
pub fn dfs_iterative(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut visited = FxHashSet::default();
    let mut forest = Vec::new();

    for root in graph.vertex_ids() {
        if visited.contains(&root) {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![root];

        while let Some(v) = stack.pop() {
            if !visited.insert(v) {
                continue;
            }
            component.push(v);
            let neighbors: Vec<VertexId> = graph.out_edges(v).map(|e| e.to()).collect();
            for to in neighbors.into_iter().rev() {
                if !visited.contains(&to) {
                    stack.push(to);
                }
            }
        }
        forest.push(component);
    }

    forest
}

/// One tree of a DFS spanning forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsTree {
    pub vertex: VertexId,
    pub children: Vec<DfsTree>,
}

/// Depth-first spanning forest with parent/child structure preserved.
///
/// Same visit order as [`dfs_recursive`]; uses the call stack.
pub fn dfs_forest(graph: &Graph) -> Vec<DfsTree> {
    let mut visited = FxHashSet::default();
    let mut forest = Vec::new();

    for root in graph.vertex_ids() {
        if visited.contains(&root) {
            continue;
        }
        forest.push(build_tree(graph, root, &mut visited));
    }

    forest
}

fn build_tree(graph: &Graph, v: VertexId, visited: &mut FxHashSet<VertexId>) -> DfsTree {
    visited.insert(v);
    let mut children = Vec::new();
    for edge in graph.out_edges(v) {
        if !visited.contains(&edge.to()) {
            children.push(build_tree(graph, edge.to(), visited));
        }
    }
    DfsTree {
        vertex: v,
        children,
    }
}
