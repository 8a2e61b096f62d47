//! Open-document tracking for editor hosts.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::base::FileId;
use super::DocumentText;

/// Tracks the documents a host currently has open.
///
/// Assigns a stable [`FileId`] per path and keeps the latest content
/// snapshot for each document. Hosts update contents on every edit; the
/// resolver side only ever reads immutable [`DocumentText`] snapshots, so
/// a recomputation is never affected by edits that land mid-flight.
#[derive(Debug, Default)]
pub struct DocumentStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Path → FileId mapping
    path_to_id: IndexMap<PathBuf, FileId>,
    /// FileId → Path mapping (reverse lookup)
    id_to_path: IndexMap<FileId, PathBuf>,
    /// FileId → Contents
    contents: IndexMap<FileId, Arc<str>>,
    /// Next FileId to assign
    next_id: u32,
}

impl DocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the FileId for a path.
    ///
    /// If the path already has a FileId, returns it. Otherwise assigns a
    /// fresh one.
    pub fn file_id(&self, path: &Path) -> FileId {
        // Fast path: read lock
        {
            let inner = self.inner.read();
            if let Some(&id) = inner.path_to_id.get(path) {
                return id;
            }
        }

        // Slow path: write lock
        let mut inner = self.inner.write();

        // Double-check
        if let Some(&id) = inner.path_to_id.get(path) {
            return id;
        }

        let id = FileId::new(inner.next_id);
        inner.next_id += 1;
        inner.path_to_id.insert(path.to_owned(), id);
        inner.id_to_path.insert(id, path.to_owned());
        id
    }

    /// Get the path of a document.
    pub fn path(&self, file: FileId) -> Option<PathBuf> {
        self.inner.read().id_to_path.get(&file).cloned()
    }

    /// Record the latest contents of a document.
    pub fn set_contents(&self, file: FileId, contents: impl Into<Arc<str>>) {
        self.inner.write().contents.insert(file, contents.into());
    }

    /// Get the latest contents of a document.
    pub fn contents(&self, file: FileId) -> Option<Arc<str>> {
        self.inner.read().contents.get(&file).cloned()
    }

    /// Build an immutable [`DocumentText`] snapshot of a document.
    ///
    /// Returns `None` if no contents have been recorded for it.
    pub fn snapshot(&self, file: FileId) -> Option<DocumentText> {
        self.contents(file).map(DocumentText::new)
    }

    /// Forget a document that the host has closed.
    ///
    /// Its FileId is not reused for later documents.
    pub fn close(&self, file: FileId) {
        let mut inner = self.inner.write();
        if let Some(path) = inner.id_to_path.swap_remove(&file) {
            inner.path_to_id.swap_remove(&path);
        }
        inner.contents.swap_remove(&file);
    }

    /// Number of tracked documents.
    pub fn len(&self) -> usize {
        self.inner.read().path_to_id.len()
    }

    /// Check if no documents are tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// FileIds of all tracked documents, in open order.
    pub fn documents(&self) -> Vec<FileId> {
        self.inner.read().path_to_id.values().copied().collect()
    }
}
