//! Dense adjacency matrix.
//!
//! Built once, after traversal has fixed the graph order. Storage is a
//! single row-major `Vec<u8>` of `size * size` flags, so memory grows as
//! O(size²); large graphs are bounded by the configured vertex limit
//! rather than handled with a sparse layout.

use crate::error::{GraphError, GraphResult};
use crate::types::{Edge, VertexId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Allocate a zeroed `size × size` matrix.
    ///
    /// Fails when `size` exceeds `limit`, when `size²` overflows, or when
    /// the allocator refuses the request.
    pub fn build(size: usize, limit: usize) -> GraphResult<Self> {
        if size > limit {
            return Err(GraphError::MatrixTooLarge { size, limit });
        }
        let len = size
            .checked_mul(size)
            .ok_or(GraphError::MatrixTooLarge { size, limit })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GraphError::MatrixAllocation { size })?;
        cells.resize(len, 0);

        Ok(Self { size, cells })
    }

    /// Order of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Mark the edge `from → to`.
    pub fn set(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        let offset = self.offset(from, to).ok_or(GraphError::InvalidEdgeIndex {
            from,
            to,
            size: self.size,
        })?;
        self.cells[offset] = 1;
        Ok(())
    }

    /// Cell value, or `None` outside the matrix.
    pub fn get(&self, from: VertexId, to: VertexId) -> Option<u8> {
        self.offset(from, to).map(|offset| self.cells[offset])
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.get(from, to) == Some(1)
    }

    /// Row of outgoing flags for `from`.
    pub fn row(&self, from: VertexId) -> Option<&[u8]> {
        let start = from.index().checked_mul(self.size)?;
        (from.index() < self.size).then(|| &self.cells[start..start + self.size])
    }

    /// Every set cell as an edge, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell != 0)
            .map(move |(offset, _)| {
                Edge::new(
                    VertexId::new((offset / size) as u32),
                    VertexId::new((offset % size) as u32),
                )
            })
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != 0).count()
    }

    fn offset(&self, from: VertexId, to: VertexId) -> Option<usize> {
        let (row, column) = (from.index(), to.index());
        (row < self.size && column < self.size).then(|| row * self.size + column)
    }
}

/// Adjacency matrix lifecycle: absent until traversal has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MatrixState {
    #[default]
    Empty,
    Built(AdjacencyMatrix),
}

impl MatrixState {
    pub fn as_built(&self) -> Option<&AdjacencyMatrix> {
        match self {
            MatrixState::Empty => None,
            MatrixState::Built(matrix) => Some(matrix),
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self, MatrixState::Built(_))
    }
}
