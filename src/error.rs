//! Error types for graph construction.

use crate::descriptor::DescriptorError;
use crate::types::VertexId;
use thiserror::Error;

/// Errors raised while registering paths, traversing descriptors or
/// materializing the adjacency matrix.
///
/// Every variant aborts the `parse` call that produced it; there is no
/// partial-result mode.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Cannot normalize path '{path}': {reason}")]
    NormalizationFailed { path: String, reason: String },

    #[error("Path '{path}' is already registered as vertex {id}")]
    DuplicateRegistration { path: String, id: VertexId },

    #[error("Failed to load edge descriptor {path}: {source}")]
    EdgeFileLoadFailed {
        path: String,
        #[source]
        source: DescriptorError,
    },

    #[error("Cycle detected: {path} is already on the active traversal path")]
    CycleDetected { path: String },

    #[error("Edge ({from}, {to}) is outside the {size}x{size} adjacency matrix")]
    InvalidEdgeIndex {
        from: VertexId,
        to: VertexId,
        size: usize,
    },

    #[error("Adjacency matrix of order {size} exceeds the limit of {limit} vertices")]
    MatrixTooLarge { size: usize, limit: usize },

    #[error("Failed to allocate adjacency matrix of order {size}")]
    MatrixAllocation { size: usize },
}

impl GraphError {
    /// The offending path for errors that carry one.
    pub fn path(&self) -> Option<&str> {
        match self {
            GraphError::NormalizationFailed { path, .. }
            | GraphError::DuplicateRegistration { path, .. }
            | GraphError::EdgeFileLoadFailed { path, .. }
            | GraphError::CycleDetected { path } => Some(path.as_str()),
            _ => None,
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
