//! Identifiers for tracking open documents.

use std::fmt;

/// An interned identifier for one open document.
///
/// `FileId` is a lightweight handle (just a u32) that uniquely identifies a
/// document for the duration of a host session. The path or URI it stands
/// for is tracked by the document store; the resolver and the provider
/// boundary only ever see the handle.
///
/// Hosts may discard and recreate symbol trees on every edit, but the
/// `FileId` of a document stays stable until the document is closed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FileId(pub u32);

impl FileId {
    /// Create a new FileId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

impl From<u32> for FileId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<FileId> for u32 {
    #[inline]
    fn from(id: FileId) -> Self {
        id.0
    }
}
