//! The inbound symbol-tree boundary.

use thiserror::Error;

use crate::base::FileId;
use super::DocumentSymbol;

/// The provider returned no symbol tree for the document.
///
/// Typical while a language service is still warming up. Transient: the
/// user retries by re-invoking the action, so the display text is written
/// for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("document symbols are unavailable currently, try again shortly")]
pub struct SymbolsUnavailable;

/// Supplies the symbol outline of a document.
///
/// Implemented by host shims on top of whatever actually computes symbols
/// (a language server, tree-sitter, an index). The returned tree is a
/// snapshot: callers must not assume it stays valid across edits.
pub trait SymbolProvider {
    /// Top-level symbols of the document, in document order.
    fn document_symbols(
        &self,
        file: FileId,
    ) -> Result<Vec<DocumentSymbol>, SymbolsUnavailable>;
}
