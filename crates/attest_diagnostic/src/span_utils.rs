//! Span utility functions for rendering.
//!
//! The terminal emitter underlines a label's span inside the invocation
//! text, which may span several lines when an operand is a block or
//! closure. [`LineOffsetTable`] pre-computes line starts so every lookup is a
//! binary search.

use attest_ir::Span;

/// Pre-computed line offset table for line lookups within one text.
///
/// # Example
///
/// ```
/// use attest_diagnostic::span_utils::LineOffsetTable;
///
/// let text = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(text);
///
/// assert_eq!(table.line_index(0), 0);
/// assert_eq!(table.line_index(6), 1);
/// assert_eq!(table.line_text(text, 2), Some("line3"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start (0-indexed lines).
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from text.
    pub fn build(text: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 0-based index of the line containing `offset`.
    #[inline]
    pub fn line_index(&self, offset: u32) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        }
    }

    /// Byte offset where the 0-based line starts.
    pub fn line_start(&self, index: usize) -> Option<u32> {
        self.offsets.get(index).copied()
    }

    /// Text of the 0-based line, without its trailing newline.
    pub fn line_text<'a>(&self, text: &'a str, index: usize) -> Option<&'a str> {
        let start = self.line_start(index)? as usize;
        let end = self
            .line_start(index + 1)
            .map_or(text.len(), |next| (next as usize).saturating_sub(1));
        text.get(start..end)
    }

    /// 0-based first and last line indices touched by `span`.
    pub fn line_span(&self, span: Span) -> (usize, usize) {
        let first = self.line_index(span.start);
        // An exclusive end sitting at a line start belongs to the previous line.
        let last_offset = if span.is_empty() {
            span.end
        } else {
            span.end - 1
        };
        (first, self.line_index(last_offset).max(first))
    }
}

/// Character column (0-based) of `offset` within the line starting at
/// `line_start`.
pub fn char_column(text: &str, line_start: u32, offset: u32) -> usize {
    let start = (line_start as usize).min(text.len());
    let end = (offset as usize).clamp(start, text.len());
    text.get(start..end).map_or(0, |s| s.chars().count())
}

/// Number of decimal digits needed to print `n`.
pub fn digit_count(n: u32) -> usize {
    let mut digits = 1;
    let mut rest = n / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}
