//! Monotonic id allocation for vertices, edges and labels
//!
//! Each namespace is an independent atomic counter: ids are unique within
//! their namespace and never reused, even across graphs that share an
//! allocator. A fresh allocator per graph gives deterministic ids in tests;
//! sharing one `Arc<IdAllocator>` between graphs keeps ids globally unique
//! during concurrent construction.

use super::types::{EdgeId, LabelId, VertexId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe source of vertex, edge and label ids.
///
/// Vertex and edge ids start at 1, label ids at 0, matching the numbering
/// the rest of the crate assumes (vertex id 0 is never issued).
#[derive(Debug)]
pub struct IdAllocator {
    next_vertex: AtomicU64,
    next_edge: AtomicU64,
    next_label: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator {
            next_vertex: AtomicU64::new(1),
            next_edge: AtomicU64::new(1),
            next_label: AtomicU64::new(0),
        }
    }

    pub fn next_vertex_id(&self) -> VertexId {
        VertexId::new(self.next_vertex.fetch_add(1, Ordering::Relaxed))
    }

    pub fn next_edge_id(&self) -> EdgeId {
        EdgeId::new(self.next_edge.fetch_add(1, Ordering::Relaxed))
    }

    pub fn next_label_id(&self) -> LabelId {
        LabelId::new(self.next_label.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
