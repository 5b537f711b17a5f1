use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense vertex identity assigned by the path index.
///
/// Ids start at 0 and double as row/column numbers of the adjacency matrix.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Row/column position in the adjacency matrix.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The id following this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `(relative path, name)` reference to a vertex as written in an edge
/// descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexRef {
    /// Directory segment relative to the referencing vertex.
    #[serde(alias = "relativePath")]
    pub path: String,

    /// Vertex name inside that directory.
    pub name: String,
}

impl VertexRef {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// A directed edge collected during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }
}
