//! Graphwerk
//!
//! An in-memory directed, weighted, labelled property graph with a suite of
//! classic graph algorithms: traversal forests, topological ordering and
//! AOE critical path analysis, shortest paths (BFS, Dijkstra,
//! Floyd–Warshall), strongly connected components, articulation points and
//! minimum spanning trees.
//!
//! Vertices own their outgoing edges; edges refer to endpoints by id. All
//! algorithms are synchronous, read-only over `&Graph`, and deterministic:
//! ties break on ascending vertex id, then edge insertion order.
//!
//! ## Example Usage
//!
//! ```rust
//! use graphwerk::{Graph, algo};
//!
//! let mut g = Graph::new();
//! let a = g.add_vertex("a");
//! let b = g.add_vertex("b");
//! let c = g.add_vertex("c");
//! g.add_edge(a, b, 3).unwrap();
//! g.add_edge(b, c, 4).unwrap();
//! g.add_edge(a, c, 10).unwrap();
//!
//! let sp = algo::dijkstra(&g, a).unwrap();
//! assert_eq!(sp.distance(c), Some(7));
//! assert_eq!(sp.path_to(c), Some(vec![a, b, c]));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeId, Graph, GraphError, GraphResult, IdAllocator, Label, LabelId, LabelKind,
    PropertyMap, PropertyValue, Vertex, VertexId, Weight,
};

pub use algo::{AlgoError, AlgoResult};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the crate version
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
