//! Labelled vertex with an owned outgoing adjacency list

use super::edge::Edge;
use super::label::Label;
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, VertexId};
use indexmap::IndexMap;

/// A vertex in the graph.
///
/// Owns its outgoing edges, keyed by edge id. The map enforces edge-id
/// uniqueness and preserves insertion order, which is the left-to-right
/// neighbor order the traversal algorithms rely on.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    name: String,
    label: Option<Label>,
    properties: PropertyMap,
    edges: IndexMap<EdgeId, Edge>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, name: impl Into<String>, label: Option<Label>) -> Self {
        Vertex {
            id,
            name: name.into(),
            label,
            properties: PropertyMap::new(),
            edges: IndexMap::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get a property value
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn insert_edge(&mut self, edge: Edge) {
        self.edges.insert(edge.id(), edge);
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
