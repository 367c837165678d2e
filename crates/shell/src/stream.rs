// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command stream: slurp a byte source, parse it, hand out trees in order.
//!
//! Building is two-phase. The whole source is read into memory first, then
//! parsed one top-level statement list at a time. Either every list parses
//! and the stream holds one tree per list, or the build fails and nothing
//! is returned.
//!
//! ```
//! use cmdstream_shell::CommandStream;
//!
//! let mut stream = CommandStream::parse("make && make test\n\nmake install")?;
//! assert_eq!(stream.next().map(|c| c.to_string()).as_deref(), Some("make && make test"));
//! assert_eq!(stream.next().map(|c| c.to_string()).as_deref(), Some("make install"));
//! assert!(stream.next().is_none());
//! # Ok::<(), cmdstream_shell::StreamError>(())
//! ```

use std::collections::VecDeque;
use std::io::{self, BufReader, Read};

use tracing::debug;

use crate::ast::Command;
use crate::error::StreamError;
use crate::parser::Parser;
use crate::span::line_at;

/// Initial input buffer size.
const INITIAL_BUFFER_SIZE: usize = 1024;

/// A pull-based source of input bytes.
///
/// `Ok(None)` signals end of data. The stream reads until then and never
/// rewinds.
pub trait ByteSource {
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Any `FnMut() -> Option<u8>` is an infallible byte source.
impl<F> ByteSource for F
where
    F: FnMut() -> Option<u8>,
{
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self())
    }
}

/// Byte source over any [`Read`], buffered.
#[derive(Debug)]
pub struct ReadSource<R> {
    bytes: io::Bytes<BufReader<R>>,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }
}

/// An ordered queue of parsed command trees, one per top-level statement list.
///
/// Trees are removed from the front with [`Iterator::next`], which hands
/// ownership to the caller. An exhausted stream keeps returning `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStream {
    trees: VecDeque<Command>,
}

impl CommandStream {
    /// Read `source` to the end and parse it.
    pub fn from_source<S: ByteSource>(mut source: S) -> Result<Self, StreamError> {
        let mut buffer = Vec::with_capacity(INITIAL_BUFFER_SIZE);
        while let Some(b) = source.next_byte()? {
            buffer.push(b);
        }
        debug!(bytes = buffer.len(), "read command input");
        Self::from_bytes(&buffer)
    }

    /// Read everything from `reader` and parse it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StreamError> {
        Self::from_source(ReadSource::new(reader))
    }

    /// Parse command text.
    pub fn parse(input: &str) -> Result<Self, StreamError> {
        Self::from_bytes(input.as_bytes())
    }

    /// Parse an already materialized buffer.
    ///
    /// Fails with [`StreamError::Syntax`] (carrying the 1-based line of the
    /// failure) on the first malformed statement list, or with
    /// [`StreamError::NoCommands`] when the input holds no commands.
    pub fn from_bytes(text: &[u8]) -> Result<Self, StreamError> {
        let mut parser = Parser::new(text);
        let mut trees = VecDeque::new();

        loop {
            match parser.next_statement_list() {
                Ok(Some(tree)) => trees.push_back(tree),
                Ok(None) => break,
                Err(source) => {
                    let line = line_at(text, source.span().start);
                    debug!(line, error = %source, "syntax error");
                    return Err(StreamError::Syntax { line, source });
                }
            }
        }

        if trees.is_empty() {
            return Err(StreamError::NoCommands);
        }
        debug!(trees = trees.len(), "built command stream");
        Ok(Self { trees })
    }

    /// Number of trees not yet taken.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl Iterator for CommandStream {
    type Item = Command;

    /// Remove and return the next tree in source order.
    fn next(&mut self) -> Option<Command> {
        self.trees.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.trees.len(), Some(self.trees.len()))
    }
}

impl ExactSizeIterator for CommandStream {}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
