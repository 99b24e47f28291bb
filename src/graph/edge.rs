//! Directed weighted edge

use super::label::Label;
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, VertexId, Weight};

/// A directed edge between two vertices of the owning [`Graph`].
///
/// Endpoints are stored as ids into the graph's vertex table, so an edge
/// never outlives or dangles from the graph that owns its endpoints. The
/// weight, label and property bag stay mutable after construction; the
/// endpoints do not.
///
/// [`Graph`]: super::Graph
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    from: VertexId,
    to: VertexId,
    weight: Weight,
    label: Option<Label>,
    properties: PropertyMap,
}

impl Edge {
    pub(crate) fn new(
        id: EdgeId,
        from: VertexId,
        to: VertexId,
        weight: Weight,
        label: Option<Label>,
    ) -> Self {
        Edge {
            id,
            from,
            to,
            weight,
            label,
            properties: PropertyMap::new(),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Source vertex (edge goes FROM this vertex)
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Target vertex (edge goes TO this vertex)
    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn set_label(&mut self, label: Option<Label>) {
        self.label = label;
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

    /// Check if this edge connects two specific vertices (in either direction)
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}
