//! Immutable document text snapshots.

use std::sync::Arc;

use crate::base::{LineCol, LineIndex, TextSize};

/// An immutable snapshot of one document's text, addressable by
/// line/column position.
///
/// The snapshot owns its text (`Arc<str>`, so clones are cheap) and a
/// [`LineIndex`] built once at construction. Positions use 0-indexed lines
/// and UTF-8 byte columns, matching the rest of the crate.
#[derive(Clone, Debug)]
pub struct DocumentText {
    text: Arc<str>,
    index: LineIndex,
}

impl DocumentText {
    /// Create a snapshot from document text.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let index = LineIndex::new(&text);
        Self { text, index }
    }

    /// The full text of the document.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.index.len()
    }

    /// Convert a position to a byte offset.
    ///
    /// Returns `None` if the position's line does not exist.
    pub fn offset(&self, pos: LineCol) -> Option<TextSize> {
        self.index.offset(pos)
    }

    /// Extract the text between two positions (`end` exclusive).
    ///
    /// Returns `None` if `start`'s line lies outside the document; an `end`
    /// line past the document reaches to the end of the text. Columns are
    /// clamped into their own line, and offsets that land inside a
    /// multi-byte character are snapped back to the previous character
    /// boundary, so an over-long position never panics and never leaks
    /// text from lines outside the range.
    pub fn slice(&self, start: LineCol, end: LineCol) -> Option<&str> {
        let start = self.clamped_offset(start)?;
        let end = self.clamped_offset(end).unwrap_or(self.text.len());

        let start = floor_char_boundary(&self.text, start);
        let end = floor_char_boundary(&self.text, end);
        if end <= start {
            return Some("");
        }
        Some(&self.text[start..end])
    }

    /// Byte offset of a position with the column clamped into its line.
    fn clamped_offset(&self, pos: LineCol) -> Option<usize> {
        let line_start = usize::from(self.offset(LineCol::new(pos.line, 0))?);
        let next_line = self
            .offset(LineCol::new(pos.line + 1, 0))
            .map_or(self.text.len(), usize::from);
        Some((line_start + pos.col as usize).min(next_line).min(self.text.len()))
    }
}

/// Largest index `<= i` that is a char boundary of `text`.
fn floor_char_boundary(text: &str, mut i: usize) -> usize {
    while i > 0 && !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}
