//! Core graph data model
//!
//! A [`Graph`] is a directed, weighted, labelled property graph: vertices
//! own their outgoing edges, edges refer to their endpoints by id, and both
//! can carry a [`Label`] plus an open string-keyed property bag. Ids come
//! from an [`IdAllocator`] and are never reused.

pub mod edge;
pub mod graph;
pub mod ids;
pub mod label;
pub mod property;
pub mod types;
pub mod vertex;

pub use edge::Edge;
pub use graph::{Graph, GraphError, GraphResult};
pub use ids::IdAllocator;
pub use label::{Label, LabelKind};
pub use property::{PropertyMap, PropertyValue};
pub use types::{EdgeId, LabelId, VertexId, Weight};
pub use vertex::Vertex;
