pub mod logging;
pub mod types;
pub mod paths;
pub mod error;
pub mod descriptor;
pub mod index;
pub mod graph;
pub mod config;

pub use types::*;
pub use error::{GraphError, GraphResult};
pub use descriptor::{
    DescriptorError, DescriptorSource, EdgeDescriptor, FsDescriptorSource, MemoryDescriptorSource,
};
pub use index::PathIndex;
pub use graph::{AdjacencyMatrix, Graph, GraphBuilder, GraphDocument, GraphOptions, MatrixState};
pub use config::Settings;
