//! # docfold-base
//!
//! Core library for locating foldable docstring regions in document symbol
//! trees, for editor hosts that want to collapse or expand exactly those
//! regions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide      → editor features (docstring resolution, fold commands)
//!   ↓
//! outline  → document symbol model (kinds, tree nodes, provider boundary)
//!   ↓
//! document → document text addressing and open-document tracking
//!   ↓
//! base     → primitives (FileId, LineCol, LineIndex, Span)
//! ```
//!
//! The crate performs no I/O and owns no editor state: symbol trees come
//! from a host-supplied [`outline::SymbolProvider`], fold operations go out
//! through a host-supplied [`ide::FoldHandler`]. Everything in between is
//! pure functions over borrowed inputs.

/// Foundation types: FileId, positions, line indexing
pub mod base;

/// Document text snapshots and open-document tracking
pub mod document;

/// Document symbol model and the provider boundary
pub mod outline;

/// Editor features: docstring fold resolution and commands
pub mod ide;

// Re-export commonly needed items
pub use base::{FileId, LineCol, LineIndex, Span};
pub use document::DocumentText;
pub use ide::{docstring_start_lines, fold_docstrings, unfold_docstrings};
pub use outline::{DocumentSymbol, SymbolKind};
