//! Edge descriptor loading
//!
//! An edge descriptor lists the children of one vertex as `(path, name)`
//! references, in the order the edges should be recorded:
//!
//! ```json
//! { "edges": [ { "path": "lib", "name": "core" }, { "path": ".", "name": "util" } ] }
//! ```
//!
//! The graph builder only sees the [`DescriptorSource`] trait; the source is
//! injected when the [`Graph`](crate::graph::Graph) is constructed.

use crate::paths;
use crate::types::VertexRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Children of a single vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    #[serde(default)]
    pub edges: Vec<VertexRef>,
}

impl EdgeDescriptor {
    pub fn new(edges: Vec<VertexRef>) -> Self {
        Self { edges }
    }

    /// Parse a descriptor from JSON text.
    pub fn from_json(path: &str, text: &str) -> Result<Self, DescriptorError> {
        serde_json::from_str(text).map_err(|source| DescriptorError::Json {
            path: path.to_string(),
            source,
        })
    }
}

#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid descriptor JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("No descriptor registered for {path}")]
    Missing { path: String },
}

/// Loads the edge descriptor stored at a vertex path plus the edge suffix.
pub trait DescriptorSource {
    fn load(&self, path: &str) -> Result<EdgeDescriptor, DescriptorError>;
}

impl<S: DescriptorSource + ?Sized> DescriptorSource for &S {
    fn load(&self, path: &str) -> Result<EdgeDescriptor, DescriptorError> {
        (**self).load(path)
    }
}

/// Reads JSON descriptors from disk.
///
/// Relative descriptor paths are resolved under `base`.
#[derive(Debug, Clone)]
pub struct FsDescriptorSource {
    base: PathBuf,
}

impl FsDescriptorSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl DescriptorSource for FsDescriptorSource {
    fn load(&self, path: &str) -> Result<EdgeDescriptor, DescriptorError> {
        let file = paths::resolve_against(Path::new(path), &self.base);
        let text = std::fs::read_to_string(&file).map_err(|source| DescriptorError::Io {
            path: file.clone(),
            source,
        })?;
        EdgeDescriptor::from_json(path, &text)
    }
}

/// Descriptors held in memory, keyed by descriptor path.
#[derive(Debug, Clone, Default)]
pub struct MemoryDescriptorSource {
    descriptors: HashMap<String, EdgeDescriptor>,
}

impl MemoryDescriptorSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, replacing any previous one at `path`.
    pub fn insert(&mut self, path: impl Into<String>, descriptor: EdgeDescriptor) {
        self.descriptors.insert(path.into(), descriptor);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, path: impl Into<String>, edges: Vec<VertexRef>) -> Self {
        self.insert(path, EdgeDescriptor::new(edges));
        self
    }
}

impl DescriptorSource for MemoryDescriptorSource {
    fn load(&self, path: &str) -> Result<EdgeDescriptor, DescriptorError> {
        self.descriptors
            .get(path)
            .cloned()
            .ok_or_else(|| DescriptorError::Missing {
                path: path.to_string(),
            })
    }
}
