//! The artifact produced by a parse.

use super::matrix::{AdjacencyMatrix, MatrixState};
use crate::error::GraphResult;
use crate::index::PathIndex;
use crate::types::{Edge, VertexId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Path registry, adjacency matrix and vertex metadata paths of one graph.
#[derive(Debug, Default)]
pub struct GraphDocument {
    paths: PathIndex,
    matrix: MatrixState,
    metadata: HashMap<VertexId, String>,
}

impl GraphDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> &PathIndex {
        &self.paths
    }

    pub(crate) fn paths_mut(&mut self) -> &mut PathIndex {
        &mut self.paths
    }

    /// Number of registered vertices.
    pub fn order(&self) -> usize {
        self.paths.count()
    }

    pub fn matrix_state(&self) -> &MatrixState {
        &self.matrix
    }

    /// The adjacency matrix, once traversal has completed.
    pub fn matrix(&self) -> Option<&AdjacencyMatrix> {
        self.matrix.as_built()
    }

    /// Metadata file path recorded for a vertex.
    pub fn metadata_path(&self, id: VertexId) -> Option<&str> {
        self.metadata.get(&id).map(String::as_str)
    }

    /// Record the metadata file path of a vertex. The first recorded path
    /// wins; returns whether this call stored it.
    pub fn record_metadata_path(&mut self, id: VertexId, path: impl Into<String>) -> bool {
        match self.metadata.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(path.into());
                true
            }
        }
    }

    /// Allocate the matrix at the current order and mark every edge.
    pub(crate) fn build_matrix(&mut self, edges: &[Edge], limit: usize) -> GraphResult<()> {
        let mut matrix = AdjacencyMatrix::build(self.order(), limit)?;
        for edge in edges {
            matrix.set(edge.from, edge.to)?;
        }
        self.matrix = MatrixState::Built(matrix);
        Ok(())
    }
}
