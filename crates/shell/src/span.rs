// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for the command parser.

use serde::{Deserialize, Serialize};

/// A span representing a range in the source text.
///
/// Spans use byte offsets into the slurped input buffer.
///
/// # Examples
///
/// ```
/// use cmdstream_shell::Span;
///
/// let source = "echo hello";
/// let span = Span::new(5, 10);
/// assert_eq!(&source[span.start..span.end], "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start to end byte positions.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Create a one-byte span at a position.
    #[inline]
    pub fn at(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// 1-based line number of a byte offset.
///
/// Counts the newlines strictly before `offset`. Offsets past the end of the
/// buffer count every newline in it.
///
/// ```
/// use cmdstream_shell::line_at;
///
/// assert_eq!(line_at(b"a\nb\nc", 0), 1);
/// assert_eq!(line_at(b"a\nb\nc", 4), 3);
/// ```
pub fn line_at(source: &[u8], offset: usize) -> usize {
    let end = offset.min(source.len());
    1 + source[..end].iter().filter(|&&b| b == b'\n').count()
}

/// Generate a context snippet showing the error location in source text.
///
/// Returns a formatted string with the relevant portion of input and carets
/// pointing to the span location.
///
/// ```text
/// a | | b
///     ^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let at = span.start.min(input.len());
    let start = input[..at]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(at);

    let end = input[at..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| at + i + c.len_utf8())
        .unwrap_or(input.len());

    let snippet = &input[start..end];
    let caret_pos = at - start;
    let caret_len = span.len().max(1);

    format!(
        "{}\n{}{}",
        snippet,
        " ".repeat(caret_pos),
        "^".repeat(caret_len)
    )
}

/// Locate a span in source, returning (line_number, column, line_content).
///
/// Line numbers are 1-indexed. Column is 0-indexed from line start.
///
/// ```
/// use cmdstream_shell::{Span, locate_span};
///
/// let source = "echo hello\necho world";
/// let (line, col, content) = locate_span(source, Span::new(11, 15));
/// assert_eq!(line, 2);
/// assert_eq!(col, 0);
/// assert_eq!(content, "echo world");
/// ```
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, ch) in source.char_indices() {
        if i >= span.start {
            break;
        }
        if ch == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let effective_start = span.start.min(source.len());
    let col = if effective_start >= line_start {
        source[line_start..effective_start].chars().count()
    } else {
        0
    };

    (line_num, col, &source[line_start..line_end])
}

/// Generate a rich diagnostic message with line/column info.
///
/// ```text
/// error: unexpected '|', expected a command or '('
///   --> line 3, column 1
///    |
///  3 | | bad
///    | ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line_content) = locate_span(source, span);
    let span_len = span.len().max(1);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line_content,
        " ".repeat(col),
        "^".repeat(span_len)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
