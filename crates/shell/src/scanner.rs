// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte cursor and word scanner.
//!
//! The scanner works directly on the slurped input. A word is a maximal run
//! of characters from a fixed whitelist; everything else (spaces, operators,
//! parentheses, newlines) is left for the parser to inspect.

use crate::span::{line_at, Span};

/// Returns true for bytes that may appear inside a word.
///
/// ASCII letters and digits plus `! % + , - . / : @ ^ _`.
#[inline]
pub fn is_word_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'%' | b'+' | b',' | b'-' | b'.' | b'/' | b':' | b'@' | b'^' | b'_'
        )
}

/// A monotonically advancing position in the input buffer.
///
/// Recursive subshell parses borrow the same cursor mutably, so the caller
/// resumes exactly where the nested parse stopped.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `text`.
    ///
    /// A NUL byte terminates the input; anything after it is never scanned.
    pub fn new(text: &'a [u8]) -> Self {
        let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
        Self {
            text: &text[..end],
            pos: 0,
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The scanned input, excluding anything past a NUL terminator.
    #[inline]
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// 1-based line of the current position.
    pub fn line(&self) -> usize {
        line_at(self.text, self.pos)
    }

    /// One-byte span at the current position (empty at end of input).
    pub fn span_here(&self) -> Span {
        if self.at_end() {
            Span::empty(self.pos)
        } else {
            Span::at(self.pos)
        }
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// The byte at the cursor, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    /// The character starting at the cursor.
    ///
    /// `Err` carries the byte when it does not begin a valid UTF-8 sequence.
    pub fn peek_char(&self) -> Option<Result<char, u8>> {
        let rest = self.text.get(self.pos..)?;
        let first = *rest.first()?;
        let head = rest.get(..rest.len().min(4)).unwrap_or(rest);
        let valid = match std::str::from_utf8(head) {
            Ok(s) => s,
            Err(e) => std::str::from_utf8(&head[..e.valid_up_to()]).unwrap_or_default(),
        };
        Some(valid.chars().next().ok_or(first))
    }

    /// The byte after the cursor.
    #[inline]
    pub fn peek_next(&self) -> Option<u8> {
        self.text.get(self.pos + 1).copied()
    }

    /// Consume and return the byte at the cursor.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consume the byte at the cursor if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip space characters. Tabs are not spaces.
    pub fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    /// If positioned on `#`, skip to the end of the line.
    ///
    /// The terminating newline is not consumed. Returns true if a comment
    /// was skipped.
    pub fn skip_comment(&mut self) -> bool {
        if self.peek() != Some(b'#') {
            return false;
        }
        while let Some(b) = self.peek() {
            if b == b'\n' {
                break;
            }
            self.pos += 1;
        }
        true
    }

    /// Skip spaces, newlines and whole comment lines.
    pub fn skip_blank(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\n') => self.pos += 1,
                Some(b'#') => {
                    self.skip_comment();
                }
                _ => break,
            }
        }
    }

    /// Scan one word into `out`, returning the number of bytes appended.
    ///
    /// Leading spaces are skipped. A `#` where the word would start is a
    /// comment: the rest of the line is consumed and nothing is appended.
    /// Zero means no word starts here; the cursor is left on whatever byte
    /// stopped the scan.
    pub fn scan_word(&mut self, out: &mut String) -> usize {
        self.skip_spaces();
        if self.skip_comment() {
            return 0;
        }

        let start = self.pos;
        while self.peek().is_some_and(is_word_char) {
            self.pos += 1;
        }
        // Word bytes are ASCII by construction.
        out.extend(self.text[start..self.pos].iter().map(|&b| char::from(b)));
        self.pos - start
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
