//! User-invokable fold actions.
//!
//! Two actions, "fold docstrings" and "unfold docstrings", both running
//! against the host's active document. The host supplies the document and
//! its symbol outline and applies the resulting fold operation; everything
//! in between happens here.

use thiserror::Error;
use tracing::debug;

use crate::base::FileId;
use crate::document::DocumentText;
use crate::outline::{SymbolProvider, SymbolsUnavailable};
use super::docstring::docstring_start_lines;
use super::folding::{FoldHandler, FoldRequest, FoldingArguments};

/// The document an action runs against.
#[derive(Debug, Clone)]
pub struct ActiveDocument {
    /// Identity of the focused document.
    pub file: FileId,
    /// Snapshot of its text at invocation time.
    pub text: DocumentText,
}

/// What an action needs from the editor it runs inside.
///
/// Combines the two boundary traits with access to the focused document.
/// `active_document` returning `None` is not an error — the action simply
/// has no target and does nothing.
pub trait EditorHost: SymbolProvider + FoldHandler {
    /// The focused document, if any.
    fn active_document(&self) -> Option<ActiveDocument>;
}

/// Failure of a fold action.
///
/// Absence of an active document or of docstrings is not a failure; the
/// only error case is the symbol provider having nothing for us yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    SymbolsUnavailable(#[from] SymbolsUnavailable),
}

/// Collapse every multi-line docstring in the active document.
pub fn fold_docstrings<H: EditorHost + ?Sized>(host: &mut H) -> Result<(), CommandError> {
    execute(host, FoldRequest::Fold)
}

/// Expand every multi-line docstring in the active document.
pub fn unfold_docstrings<H: EditorHost + ?Sized>(host: &mut H) -> Result<(), CommandError> {
    execute(host, FoldRequest::Unfold)
}

fn execute<H: EditorHost + ?Sized>(
    host: &mut H,
    request: FoldRequest,
) -> Result<(), CommandError> {
    let Some(doc) = host.active_document() else {
        // Nothing focused, nothing to do.
        debug!("{:?} requested with no active document", request);
        return Ok(());
    };

    let symbols = host.document_symbols(doc.file)?;
    let lines = docstring_start_lines(&symbols, &doc.text);
    debug!(
        "{:?}: resolved {} docstring line(s) in {}",
        request,
        lines.len(),
        doc.file
    );

    host.apply_fold(request, &FoldingArguments::docstrings(lines));
    Ok(())
}
