//! Property-based tests for the docstring resolver.
//!
//! Uses proptest to generate symbol trees and synthetic documents, then
//! checks the resolver's contract: idempotence, body containment of every
//! emitted line, and that only documentable symbol kinds ever contribute.
//! Spans are generated independently of the text, the same as a confused
//! or stale provider would report them, so the properties must hold for
//! ranges that point at blank lines, at literals, or past the document.
#![cfg(feature = "proptest")]

use proptest::prelude::*;

use docfold::base::Span;
use docfold::document::DocumentText;
use docfold::ide::docstring_start_lines;
use docfold::outline::{DocumentSymbol, SymbolKind};

const MAX_LINE: u32 = 24;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Strategy over a mix of documentable and non-documentable kinds.
fn arb_kind() -> impl Strategy<Value = SymbolKind> + Clone {
    prop_oneof![
        Just(SymbolKind::Function),
        Just(SymbolKind::Method),
        Just(SymbolKind::Class),
        Just(SymbolKind::Variable),
        Just(SymbolKind::Module),
        Just(SymbolKind::Constant),
    ]
}

/// Strategy for kinds that never carry a docstring of their own.
fn arb_non_documentable_kind() -> impl Strategy<Value = SymbolKind> + Clone {
    prop_oneof![
        Just(SymbolKind::Variable),
        Just(SymbolKind::Module),
        Just(SymbolKind::Constant),
        Just(SymbolKind::String),
    ]
}

/// Strategy for spans with ordered lines and a small end column.
fn arb_span() -> impl Strategy<Value = Span> {
    (0..MAX_LINE, 0..MAX_LINE, 0..8u32).prop_map(|(a, b, end_col)| {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Span::from_lines(start, 0, end, end_col)
    })
}

/// Strategy for symbol trees up to three levels deep.
fn arb_symbol(
    kind: impl Strategy<Value = SymbolKind> + Clone + 'static,
) -> impl Strategy<Value = DocumentSymbol> {
    let leaf = (kind.clone(), arb_span())
        .prop_map(|(kind, span)| DocumentSymbol::new("sym", kind, span));
    leaf.prop_recursive(3, 12, 3, move |inner| {
        (kind.clone(), arb_span(), prop::collection::vec(inner, 0..3)).prop_map(
            |(kind, span, children)| {
                DocumentSymbol::new("sym", kind, span).with_children(children)
            },
        )
    })
}

fn arb_symbols() -> impl Strategy<Value = Vec<DocumentSymbol>> {
    prop::collection::vec(arb_symbol(arb_kind()), 0..4)
}

/// Strategy for documents assembled from docstring-shaped line fragments.
fn arb_document() -> impl Strategy<Value = DocumentText> {
    prop::collection::vec(
        prop_oneof![
            Just(""),
            Just("    pass"),
            Just("def f():"),
            Just("    \"\"\""),
            Just("    \"\"\"one line\"\"\""),
            Just("    \"\"\"opens here"),
            Just("    closes\"\"\""),
        ],
        1..(MAX_LINE as usize),
    )
    .prop_map(|lines| DocumentText::new(lines.join("\n")))
}

/// Flatten a tree into all of its symbols.
fn all_symbols(symbols: &[DocumentSymbol]) -> Vec<&DocumentSymbol> {
    let mut all = Vec::new();
    let mut stack: Vec<&DocumentSymbol> = symbols.iter().collect();
    while let Some(sym) = stack.pop() {
        all.push(sym);
        stack.extend(sym.children.iter());
    }
    all
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn resolve_is_idempotent(symbols in arb_symbols(), document in arb_document()) {
        let first = docstring_start_lines(&symbols, &document);
        let second = docstring_start_lines(&symbols, &document);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn emitted_lines_lie_in_a_documentable_body(
        symbols in arb_symbols(),
        document in arb_document(),
    ) {
        let lines = docstring_start_lines(&symbols, &document);
        let all = all_symbols(&symbols);

        for line in lines {
            prop_assert!(
                all.iter().any(|sym| {
                    sym.kind.is_documentable()
                        && sym.span.start.line + 1 == line
                        && line <= sym.span.end.line
                }),
                "line {} escapes every documentable symbol body",
                line
            );
        }
    }

    #[test]
    fn at_most_one_entry_per_documentable_symbol(
        symbols in arb_symbols(),
        document in arb_document(),
    ) {
        let lines = docstring_start_lines(&symbols, &document);
        let documentable = all_symbols(&symbols)
            .iter()
            .filter(|sym| sym.kind.is_documentable())
            .count();
        prop_assert!(lines.len() <= documentable);
    }

    #[test]
    fn non_documentable_trees_emit_nothing(
        symbols in prop::collection::vec(arb_symbol(arb_non_documentable_kind()), 0..4),
        document in arb_document(),
    ) {
        prop_assert!(docstring_start_lines(&symbols, &document).is_empty());
    }
}
