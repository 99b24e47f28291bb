//! Classification labels for vertices and edges

use super::types::LabelId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which namespace a label classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelKind {
    Vertex,
    Edge,
}

/// A named classification tag (e.g. "Person", "KNOWS").
///
/// Immutable after creation; carries a process-unique monotone id. Create
/// labels through [`Graph::create_label`](super::Graph::create_label) so the
/// id comes from the graph's allocator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    id: LabelId,
    name: String,
    kind: LabelKind,
}

impl Label {
    pub(crate) fn new(id: LabelId, name: impl Into<String>, kind: LabelKind) -> Self {
        Label {
            id,
            name: name.into(),
            kind,
        }
    }

    pub fn id(&self) -> LabelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
