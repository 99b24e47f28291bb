//! Graph algorithms
//!
//! Every algorithm takes `&Graph` and runs synchronously on the calling
//! thread; the graph is never mutated. Deterministic tie-breaking is by
//! ascending vertex id, and within one vertex by edge insertion order.

pub mod connectivity;
pub mod floyd;
pub mod mst;
pub mod shortest_path;
pub mod topo;
pub mod traversal;
pub mod union_find;

use crate::graph::{VertexId, Weight};
use thiserror::Error;

/// Errors from algorithm execution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgoError {
    /// The algorithm requires a DAG but the graph contains a cycle
    #[error("graph contains a cycle")]
    CycleDetected,
    /// The algorithm requires non-negative weights
    #[error("negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: VertexId,
        to: VertexId,
        weight: Weight,
    },
    /// A designated start vertex is not registered in the graph
    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),
}

pub type AlgoResult<T> = Result<T, AlgoError>;

pub use connectivity::{articulation_points, kosaraju, Scc};
pub use floyd::{floyd, FloydResult};
pub use mst::{kruskal, prim, prim_from, Mst, MstEdge};
pub use shortest_path::{dijkstra, unweighted, ShortestPaths};
pub use topo::{critical_path, topo_sort_kahn, CriticalPath};
pub use traversal::{bfs, dfs_forest, dfs_iterative, dfs_recursive, DfsTree};
pub use union_find::UnionFind;
