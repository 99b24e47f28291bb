//! In-memory directed labelled property graph

use super::edge::Edge;
use super::ids::IdAllocator;
use super::label::{Label, LabelKind};
use super::types::{EdgeId, VertexId, Weight};
use super::vertex::Vertex;
use indexmap::IndexMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors from graph mutation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),
    #[error("edge source vertex not found: {0}")]
    EdgeSourceNotFound(VertexId),
    #[error("edge target vertex not found: {0}")]
    EdgeTargetNotFound(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// A directed, weighted, labelled property graph.
///
/// Vertices own their outgoing edges; both endpoints of an edge must exist
/// before the edge can be added. Parallel edges and self-loops are allowed.
/// The vertex table preserves insertion order, but algorithms that need a
/// canonical scan order use [`vertex_ids`](Graph::vertex_ids), which sorts
/// ascending by id.
#[derive(Debug)]
pub struct Graph {
    vertices: IndexMap<VertexId, Vertex>,
    edge_count: usize,
    ids: Arc<IdAllocator>,
}

impl Graph {
    /// Create an empty graph with its own id allocator.
    pub fn new() -> Self {
        Graph::with_allocator(Arc::new(IdAllocator::new()))
    }

    /// Create an empty graph drawing ids from a shared allocator.
    pub fn with_allocator(ids: Arc<IdAllocator>) -> Self {
        Graph {
            vertices: IndexMap::new(),
            edge_count: 0,
            ids,
        }
    }

    pub fn allocator(&self) -> &Arc<IdAllocator> {
        &self.ids
    }

    /// Mint a new label in the given namespace.
    pub fn create_label(&self, name: impl Into<String>, kind: LabelKind) -> Label {
        Label::new(self.ids.next_label_id(), name, kind)
    }

    /// Add a vertex and return its freshly allocated id.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        self.add_vertex_labeled(name, None)
    }

    /// Add a vertex carrying an optional classification label.
    pub fn add_vertex_labeled(&mut self, name: impl Into<String>, label: Option<Label>) -> VertexId {
        let id = self.ids.next_vertex_id();
        let vertex = Vertex::new(id, name, label);
        debug!(vertex = %id, name = vertex.name(), "add vertex");
        self.vertices.insert(id, vertex);
        id
    }

    /// Add a directed weighted edge. Both endpoints must already exist.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> GraphResult<EdgeId> {
        self.add_edge_labeled(from, to, weight, None)
    }

    /// Add a directed weighted edge with an optional label.
    pub fn add_edge_labeled(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: Weight,
        label: Option<Label>,
    ) -> GraphResult<EdgeId> {
        if !self.vertices.contains_key(&from) {
            return Err(GraphError::EdgeSourceNotFound(from));
        }
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::EdgeTargetNotFound(to));
        }

        let id = self.ids.next_edge_id();
        let edge = Edge::new(id, from, to, weight, label);
        debug!(edge = %id, %from, %to, weight, "add edge");
        if let Some(vertex) = self.vertices.get_mut(&from) {
            vertex.insert_edge(edge);
            self.edge_count += 1;
        }
        Ok(id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(&id)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All vertex ids, sorted ascending. This is the canonical scan order
    /// the algorithms use when no explicit start vertex pins one down.
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.vertices.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Outgoing edges of a vertex in insertion order. Empty for unknown ids.
    pub fn out_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> {
        self.vertices.get(&id).into_iter().flat_map(|v| v.edges())
    }

    /// All edges, grouped by source vertex in ascending id order and by
    /// insertion order within each vertex.
    pub fn edges(&self) -> Vec<&Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for id in self.vertex_ids() {
            edges.extend(self.out_edges(id));
        }
        edges
    }

    /// Build the transpose graph: same vertices (ids, names, labels), every
    /// edge reversed but keeping its id, weight and label. Shares this
    /// graph's id allocator. Property bags are not carried over.
    pub fn transpose(&self) -> Graph {
        let mut reversed = Graph {
            vertices: IndexMap::with_capacity(self.vertices.len()),
            edge_count: 0,
            ids: Arc::clone(&self.ids),
        };
        for id in self.vertex_ids() {
            if let Some(vertex) = self.vertices.get(&id) {
                reversed
                    .vertices
                    .insert(id, Vertex::new(id, vertex.name(), vertex.label().cloned()));
            }
        }
        for edge in self.edges() {
            if let Some(vertex) = reversed.vertices.get_mut(&edge.to()) {
                vertex.insert_edge(Edge::new(
                    edge.id(),
                    edge.to(),
                    edge.from(),
                    edge.weight(),
                    edge.label().cloned(),
                ));
                reversed.edge_count += 1;
            }
        }
        reversed
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertices_and_edges() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        assert_eq!(g.vertex_count(), 2);

        let e = g.add_edge(a, b, 5).unwrap();
        assert_eq!(g.edge_count(), 1);

        let edge = g.vertex(a).unwrap().edge(e).unwrap();
        assert_eq!(edge.from(), a);
        assert_eq!(edge.to(), b);
        assert_eq!(edge.weight(), 5);
    }

    #[test]
    fn test_edge_requires_both_endpoints() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let ghost = VertexId::new(999);

        assert_eq!(
            g.add_edge(ghost, a, 1),
            Err(GraphError::EdgeSourceNotFound(ghost))
        );
        assert_eq!(
            g.add_edge(a, ghost, 1),
            Err(GraphError::EdgeTargetNotFound(ghost))
        );
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_parallel_edges_and_self_loops() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");

        g.add_edge(a, b, 1).unwrap();
        g.add_edge(a, b, 2).unwrap();
        g.add_edge(a, a, 0).unwrap();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.vertex(a).unwrap().out_degree(), 3);
    }

    #[test]
    fn test_vertex_ids_sorted() {
        let mut g = Graph::new();
        let ids: Vec<VertexId> = (0..5).map(|i| g.add_vertex(format!("v{}", i))).collect();
        assert_eq!(g.vertex_ids(), ids);
    }

    #[test]
    fn test_edges_in_scan_order() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        let c = g.add_vertex("c");

        g.add_edge(b, c, 1).unwrap();
        g.add_edge(a, c, 2).unwrap();
        g.add_edge(a, b, 3).unwrap();

        let order: Vec<(VertexId, VertexId)> =
            g.edges().iter().map(|e| (e.from(), e.to())).collect();
        assert_eq!(order, vec![(a, c), (a, b), (b, c)]);
    }

    #[test]
    fn test_transpose_reverses_edges() {
        let mut g = Graph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        let e = g.add_edge(a, b, 7).unwrap();

        let t = g.transpose();
        assert_eq!(t.vertex_count(), 2);
        assert_eq!(t.edge_count(), 1);

        let reversed = t.vertex(b).unwrap().edge(e).unwrap();
        assert_eq!(reversed.from(), b);
        assert_eq!(reversed.to(), a);
        assert_eq!(reversed.weight(), 7);
        // Fresh ids from the shared allocator stay unique across both graphs
        assert!(Arc::ptr_eq(g.allocator(), t.allocator()));
    }

    #[test]
    fn test_labels() {
        let mut g = Graph::new();
        let person = g.create_label("Person", LabelKind::Vertex);
        let knows = g.create_label("KNOWS", LabelKind::Edge);

        let a = g.add_vertex_labeled("alice", Some(person.clone()));
        let b = g.add_vertex_labeled("bob", Some(person.clone()));
        g.add_edge_labeled(a, b, 1, Some(knows.clone())).unwrap();

        assert_eq!(g.vertex(a).unwrap().label(), Some(&person));
        let edge = g.out_edges(a).next().unwrap();
        assert_eq!(edge.label(), Some(&knows));
    }
}
