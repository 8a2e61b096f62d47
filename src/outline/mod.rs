//! Document symbol model — the hierarchical outline of one document.
//!
//! Symbols arrive from an external provider (a language server, an indexer)
//! as a tree: functions, classes, methods, and anything else the provider
//! reports, each with its full source extent and nested children. This
//! module owns the model types and the inbound provider boundary; it knows
//! nothing about folding.

mod provider;
mod symbols;

pub use provider::{SymbolProvider, SymbolsUnavailable};
pub use symbols::{DocumentSymbol, SymbolKind};
