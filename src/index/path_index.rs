//! Bidirectional path ↔ vertex id registry.
//!
//! Paths are normalized before every lookup or insertion, so two spellings
//! of the same canonical path always share one id. Ids are dense: id → path
//! is a slot vector indexed by id, path → id is a single hash map. Removal
//! clears the slot and erases the map entry together; ids are never reused.

use crate::error::{GraphError, GraphResult};
use crate::paths;
use crate::types::VertexId;
use std::collections::HashMap;

/// Registry assigning stable ids to canonical vertex paths.
#[derive(Debug, Default)]
pub struct PathIndex {
    /// id → path; `None` marks a removed id.
    slots: Vec<Option<Box<str>>>,
    /// path → id for live entries.
    ids: HashMap<Box<str>, VertexId>,
    next_id: VertexId,
}

impl PathIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new path at the next sequential id.
    ///
    /// Fails with [`GraphError::DuplicateRegistration`] when the normalized
    /// path already has an id. Traversal code uses
    /// [`get_or_create`](Self::get_or_create) instead.
    pub fn add(&mut self, path: &str) -> GraphResult<VertexId> {
        let normalized = paths::normalize(path)?;
        if let Some(&id) = self.ids.get(normalized.as_str()) {
            return Err(GraphError::DuplicateRegistration {
                path: normalized,
                id,
            });
        }
        Ok(self.insert(normalized.into_boxed_str()))
    }

    /// Return the id of `path`, registering it first if needed.
    pub fn get_or_create(&mut self, path: &str) -> GraphResult<VertexId> {
        let normalized = paths::normalize(path)?;
        if let Some(&id) = self.ids.get(normalized.as_str()) {
            return Ok(id);
        }
        Ok(self.insert(normalized.into_boxed_str()))
    }

    /// Look up the id of a path. Paths that fail to normalize are not found.
    pub fn get_index(&self, path: &str) -> Option<VertexId> {
        let normalized = paths::normalize(path).ok()?;
        self.ids.get(normalized.as_str()).copied()
    }

    /// Look up the canonical path of an id.
    pub fn get_path(&self, id: VertexId) -> Option<&str> {
        self.slots.get(id.index())?.as_deref()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get_index(path).is_some()
    }

    /// Remove an entry by path. Returns whether it existed.
    pub fn remove_path(&mut self, path: &str) -> bool {
        match self.get_index(path) {
            Some(id) => self.remove_index(id),
            None => false,
        }
    }

    /// Remove an entry by id. Returns whether it existed.
    pub fn remove_index(&mut self, id: VertexId) -> bool {
        let Some(slot) = self.slots.get_mut(id.index()) else {
            return false;
        };
        match slot.take() {
            Some(path) => {
                self.ids.remove(&path);
                true
            }
            None => false,
        }
    }

    /// Number of live entries.
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Live entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_deref().map(|path| (VertexId::new(index as u32), path))
        })
    }

    fn insert(&mut self, normalized: Box<str>) -> VertexId {
        let id = self.next_id;
        self.slots.push(Some(normalized.clone()));
        self.ids.insert(normalized, id);
        self.next_id = id.next();
        debug_assert_eq!(self.slots.len(), self.next_id.index());
        id
    }
}
