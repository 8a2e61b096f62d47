//! Editor features — high-level APIs for host shims.
//!
//! This module sits between the symbol outline and the editor host. Each
//! public function corresponds to one host-visible capability.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No host types**: Uses our own types, converted at the host boundary
//! 3. **Boundaries as traits**: Hosts implement [`EditorHost`] and the
//!    outbound [`FoldHandler`]; nothing here calls into an editor directly
//!
//! ## Usage
//!
//! ```ignore
//! use docfold::ide::{docstring_start_lines, fold_docstrings};
//!
//! // Pure resolution:
//! let lines = docstring_start_lines(&symbols, &document);
//!
//! // Or the full action against a host:
//! fold_docstrings(&mut host)?;
//! ```

mod commands;
mod docstring;
mod folding;

pub use commands::{ActiveDocument, CommandError, EditorHost, fold_docstrings, unfold_docstrings};
pub use docstring::docstring_start_lines;
pub use folding::{FoldDirection, FoldHandler, FoldRequest, FoldingArguments};
