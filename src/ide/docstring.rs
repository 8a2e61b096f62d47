//! Docstring range resolution — where foldable docstrings begin.
//!
//! This module walks a document's symbol outline and finds every function,
//! method, or class whose body opens with a multi-line triple-quoted
//! docstring. Single-line docstrings are skipped: collapsing them would
//! save no vertical space.

use tracing::trace;

use crate::base::LineCol;
use crate::document::DocumentText;
use crate::outline::DocumentSymbol;

const TRIPLE_QUOTE: &str = "\"\"\"";

/// A docstring literal found at the start of a symbol body.
#[derive(Debug, Clone, Copy)]
struct DocstringMatch<'a> {
    /// The matched literal, delimiters included.
    literal: &'a str,
    /// Number of lines the literal spans.
    line_count: u32,
}

/// Find the start lines of all foldable docstrings under `symbols`.
///
/// Walks the symbol tree in pre-order (parent before children, children in
/// given order) and, for every function, method, or class, checks whether
/// its body opens with a triple-quoted docstring. A docstring spanning more
/// than one line contributes the symbol's first body line to the result;
/// single-line docstrings and docstring-less symbols contribute nothing.
/// Symbols of other kinds are never scanned themselves, but their children
/// are still visited.
///
/// Every returned line lies strictly inside the span of the symbol that
/// produced it, at or after its first body line. The function reads its
/// inputs and nothing else; calling it twice yields the same result.
pub fn docstring_start_lines(symbols: &[DocumentSymbol], document: &DocumentText) -> Vec<u32> {
    let mut lines = Vec::new();

    // Walk with an explicit stack rather than recursion: the tree comes
    // from an external provider, so its nesting depth is untrusted.
    let mut stack: Vec<&DocumentSymbol> = symbols.iter().rev().collect();
    while let Some(symbol) = stack.pop() {
        if symbol.kind.is_documentable() {
            if let Some(found) = body_docstring(symbol, document) {
                trace!(
                    "docstring under {:?} spans {} line(s), {} byte(s)",
                    symbol.name,
                    found.line_count,
                    found.literal.len(),
                );
                if found.line_count > 1 {
                    lines.push(first_body_line(symbol));
                }
            }
        }
        stack.extend(symbol.children.iter().rev());
    }

    lines
}

/// First line of a symbol's body: the line after its signature opens.
fn first_body_line(symbol: &DocumentSymbol) -> u32 {
    symbol.span.start.line + 1
}

/// Scan one symbol's body for an opening docstring.
///
/// The scan is anchored to the first body line rather than the whole
/// symbol text, so triple-quoted literals used as ordinary values deeper
/// in the body are never mistaken for documentation.
fn body_docstring<'d>(
    symbol: &DocumentSymbol,
    document: &'d DocumentText,
) -> Option<DocstringMatch<'d>> {
    let body_start = LineCol::new(first_body_line(symbol), 0);
    let body = document.slice(body_start, symbol.span.end)?;
    scan_docstring(body)
}

/// Lexical docstring scan over a symbol body.
///
/// The docstring must be the first non-whitespace content of the body
/// (newlines count as whitespace). The literal ends at the first closing
/// triple quote, with at least one character between the delimiters; an
/// unterminated literal is no match.
fn scan_docstring(body: &str) -> Option<DocstringMatch<'_>> {
    let opened = body.trim_start();
    let after_open = opened.strip_prefix(TRIPLE_QUOTE)?;
    let first = after_open.chars().next()?;
    let close = after_open[first.len_utf8()..].find(TRIPLE_QUOTE)? + first.len_utf8();
    let literal = &opened[..TRIPLE_QUOTE.len() + close + TRIPLE_QUOTE.len()];
    let line_count = literal.bytes().filter(|&b| b == b'\n').count() as u32 + 1;

    Some(DocstringMatch { literal, line_count })
}
