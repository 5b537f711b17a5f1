//! Depth-first graph discovery over edge descriptors.
//!
//! The traversal runs on an explicit work stack instead of recursion, so
//! input depth never grows the call stack. Each pending frame carries a
//! handle to its own directory snapshot in a segment arena (a
//! parent-linked chain of path segments); siblings always resolve against
//! their parent's chain no matter how an earlier branch finished.
//!
//! Cycles are detected against the set of vertices on the active path.
//! Vertices reached again after they were fully expanded are DAG
//! re-convergence: their edge is recorded but their descriptor is not
//! loaded a second time.

use super::GraphOptions;
use super::document::GraphDocument;
use crate::descriptor::DescriptorSource;
use crate::error::{GraphError, GraphResult};
use crate::paths;
use crate::types::{Edge, VertexId, VertexRef};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SegmentId(usize);

#[derive(Debug)]
struct Segment {
    text: String,
    parent: Option<SegmentId>,
}

/// Append-only store of directory segments. A `SegmentId` names the whole
/// chain from the traversal root down to that segment.
#[derive(Debug, Default)]
struct SegmentArena {
    segments: Vec<Segment>,
}

impl SegmentArena {
    fn push(&mut self, parent: Option<SegmentId>, text: &str) -> SegmentId {
        self.segments.push(Segment {
            text: text.to_string(),
            parent,
        });
        SegmentId(self.segments.len() - 1)
    }

    /// Segments from the root down to `tip`.
    fn chain(&self, tip: SegmentId) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut cursor = Some(tip);
        while let Some(SegmentId(index)) = cursor {
            let segment = &self.segments[index];
            chain.push(segment.text.as_str());
            cursor = segment.parent;
        }
        chain.reverse();
        chain
    }
}

#[derive(Debug)]
enum Frame {
    /// Visit a reference found in `parent`'s descriptor (or the root).
    Enter {
        reference: VertexRef,
        parent: Option<VertexId>,
        dirs: Option<SegmentId>,
    },
    /// All descendants of `id` are done.
    Exit { id: VertexId },
}

/// Populates a [`GraphDocument`] by walking descriptors from a root.
pub struct GraphBuilder<'a, S: DescriptorSource> {
    source: &'a S,
    options: &'a GraphOptions,
    document: &'a mut GraphDocument,
    edges: Vec<Edge>,
    segments: SegmentArena,
    work: Vec<Frame>,
    active: HashSet<VertexId>,
    expanded: HashSet<VertexId>,
}

impl<'a, S: DescriptorSource> GraphBuilder<'a, S> {
    pub fn new(source: &'a S, options: &'a GraphOptions, document: &'a mut GraphDocument) -> Self {
        Self {
            source,
            options,
            document,
            edges: Vec::new(),
            segments: SegmentArena::default(),
            work: Vec::new(),
            active: HashSet::new(),
            expanded: HashSet::new(),
        }
    }

    /// Traverse from `root`, then materialize the adjacency matrix.
    ///
    /// On error the document is left half-populated; callers discard it.
    pub fn parse(mut self, root: &VertexRef) -> GraphResult<()> {
        self.work.push(Frame::Enter {
            reference: root.clone(),
            parent: None,
            dirs: None,
        });

        while let Some(frame) = self.work.pop() {
            match frame {
                Frame::Enter {
                    reference,
                    parent,
                    dirs,
                } => self.enter(reference, parent, dirs)?,
                Frame::Exit { id } => {
                    self.active.remove(&id);
                    self.expanded.insert(id);
                }
            }
        }

        crate::debug_event!(
            "builder",
            "complete",
            "{} vertices, {} edges",
            self.document.order(),
            self.edges.len()
        );
        self.document
            .build_matrix(&self.edges, self.options.max_vertices)
    }

    fn enter(
        &mut self,
        reference: VertexRef,
        parent: Option<VertexId>,
        dirs: Option<SegmentId>,
    ) -> GraphResult<()> {
        let dirs = self.segments.push(dirs, &reference.path);
        let full_path = paths::join_segments(self.segments.chain(dirs), &reference.name);
        let canonical = paths::normalize(&full_path)?;
        let id = self.document.paths_mut().get_or_create(&canonical)?;

        if let Some(parent) = parent {
            self.edges.push(Edge::new(parent, id));
        }
        self.document.record_metadata_path(
            id,
            paths::with_suffix(&canonical, &self.options.metadata_suffix),
        );

        if self.active.contains(&id) {
            return Err(GraphError::CycleDetected { path: canonical });
        }
        if self.expanded.contains(&id) {
            crate::debug_event!("builder", "revisit", "{id} {canonical}");
            return Ok(());
        }

        let descriptor_path = paths::with_suffix(&canonical, &self.options.edge_suffix);
        let descriptor = self.source.load(&descriptor_path).map_err(|source| {
            GraphError::EdgeFileLoadFailed {
                path: descriptor_path.clone(),
                source,
            }
        })?;
        crate::debug_event!(
            "builder",
            "expand",
            "{id} {canonical} ({} children)",
            descriptor.edges.len()
        );

        self.active.insert(id);
        self.work.push(Frame::Exit { id });
        // Reversed so children pop in file order.
        for child in descriptor.edges.into_iter().rev() {
            self.work.push(Frame::Enter {
                reference: child,
                parent: Some(id),
                dirs: Some(dirs),
            });
        }
        Ok(())
    }
}
