//! Graph construction
//!
//! ```text
//! Graph::parse(root)
//!   └─ GraphBuilder ── DescriptorSource::load(path + edge suffix)
//!        │
//!        ├─ PathIndex::get_or_create   (one id per canonical path)
//!        ├─ edges: Vec<Edge>           (collected during traversal)
//!        └─ AdjacencyMatrix::build     (order known only at the end)
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use vertexgraph::{FsDescriptorSource, Graph, GraphOptions, VertexRef};
//!
//! let mut graph = Graph::new(FsDescriptorSource::new("."), GraphOptions::default());
//! let document = graph.parse(&VertexRef::new("pkg", "app"))?;
//! println!("{} vertices", document.order());
//! # Ok::<(), vertexgraph::GraphError>(())
//! ```

pub mod builder;
pub mod document;
pub mod matrix;

pub use builder::GraphBuilder;
pub use document::GraphDocument;
pub use matrix::{AdjacencyMatrix, MatrixState};

use crate::Settings;
use crate::descriptor::DescriptorSource;
use crate::error::GraphResult;
use crate::types::VertexRef;

pub const DEFAULT_EDGE_SUFFIX: &str = ".edges.json";
pub const DEFAULT_METADATA_SUFFIX: &str = ".vertex.json";
pub const DEFAULT_MAX_VERTICES: usize = 16_384;

/// Engine parameters, injected into every [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOptions {
    /// Appended to a vertex path to locate its edge descriptor.
    pub edge_suffix: String,
    /// Appended to a vertex path to name its metadata file.
    pub metadata_suffix: String,
    /// Largest graph order the adjacency matrix may be built for.
    pub max_vertices: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            edge_suffix: DEFAULT_EDGE_SUFFIX.to_string(),
            metadata_suffix: DEFAULT_METADATA_SUFFIX.to_string(),
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl GraphOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            edge_suffix: settings.graph.edge_suffix.clone(),
            metadata_suffix: settings.graph.metadata_suffix.clone(),
            max_vertices: settings.graph.max_vertices,
        }
    }
}

/// Entry point: parses a descriptor graph into a [`GraphDocument`].
pub struct Graph<S: DescriptorSource> {
    source: S,
    options: GraphOptions,
    document: Option<GraphDocument>,
}

impl<S: DescriptorSource> Graph<S> {
    pub fn new(source: S, options: GraphOptions) -> Self {
        Self {
            source,
            options,
            document: None,
        }
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Discover the graph reachable from `root`.
    ///
    /// Replaces any previously parsed document. On error no document is
    /// kept: a failed parse never yields a partial graph.
    pub fn parse(&mut self, root: &VertexRef) -> GraphResult<&GraphDocument> {
        self.document = None;

        let mut document = GraphDocument::new();
        GraphBuilder::new(&self.source, &self.options, &mut document).parse(root)?;

        tracing::info!(
            "[graph] parsed {}/{}: {} vertices, {} edges",
            root.path,
            root.name,
            document.order(),
            document.matrix().map_or(0, AdjacencyMatrix::edge_count)
        );
        Ok(&*self.document.insert(document))
    }

    /// The most recently parsed document.
    pub fn document(&self) -> Option<&GraphDocument> {
        self.document.as_ref()
    }

    pub fn into_document(self) -> Option<GraphDocument> {
        self.document
    }
}
