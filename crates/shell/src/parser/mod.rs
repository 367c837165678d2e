// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-precedence parser that turns command text into command trees.

mod precedence;
mod simple;

use tracing::debug;

use self::precedence::PendingList;
use crate::ast::{Command, Operator};
use crate::parse_error::ParseError;
use crate::scanner::Cursor;
use crate::span::Span;

/// Parser over a fully materialized input buffer.
///
/// Each call to [`Parser::next_statement_list`] parses one top-level
/// statement list: leaves (simple commands or parenthesized subshells)
/// joined by `|`, `&&`, `||`, `;` or single newlines, ended by a blank line
/// or end of input. Operators are combined with an operand stack and an
/// operator stack; `|` binds tighter than `&&`/`||`, which bind tighter than
/// `;`, and equal tiers associate left.
///
/// # Examples
///
/// ```
/// use cmdstream_shell::{Command, Operator, Parser};
///
/// let trees = Parser::parse("a | b && c")?;
/// let expected = Command::binary(
///     Operator::And,
///     Command::binary(Operator::Pipe, Command::simple(["a"]), Command::simple(["b"])),
///     Command::simple(["c"]),
/// );
/// assert_eq!(trees, vec![expected]);
/// # Ok::<(), cmdstream_shell::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Subshells currently open around the cursor.
    nesting: usize,
}

/// Deepest subshell nesting accepted. Each level is one recursive parse.
pub const MAX_SUBSHELL_NESTING: usize = 256;

impl<'a> Parser<'a> {
    /// Create a parser positioned at the start of `text`.
    pub fn new(text: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(text),
            nesting: 0,
        }
    }

    /// Parse every statement list in `input`.
    ///
    /// Returns an empty vector for input with no commands. For line-numbered
    /// errors and a consumable queue, use [`crate::CommandStream`].
    pub fn parse(input: &str) -> Result<Vec<Command>, ParseError> {
        let mut parser = Parser::new(input.as_bytes());
        let mut trees = Vec::new();
        while let Some(tree) = parser.next_statement_list()? {
            trees.push(tree);
        }
        Ok(trees)
    }

    /// Parse the next top-level statement list.
    ///
    /// Returns `Ok(None)` once only blank lines and comments remain.
    pub fn next_statement_list(&mut self) -> Result<Option<Command>, ParseError> {
        let tree = self.parse_command_list(true)?;
        if let Some(tree) = &tree {
            debug!(
                line = self.cursor.line(),
                commands = tree.count_simple_commands(),
                "parsed statement list"
            );
        }
        Ok(tree)
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// 1-based line of the current position.
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Parse a command list.
    ///
    /// At top level the list ends at a blank line or end of input. Inside a
    /// subshell (`top_level == false`) it must end at `)`, which is consumed
    /// along with any spaces after it.
    fn parse_command_list(&mut self, top_level: bool) -> Result<Option<Command>, ParseError> {
        self.cursor.skip_blank();
        if self.cursor.at_end() {
            return Ok(None);
        }

        let mut pending = PendingList::new();
        pending.push_operand(self.parse_leaf()?);

        loop {
            self.cursor.skip_comment();
            let span = self.cursor.span_here();
            let Some(op) = self.parse_operator(top_level)? else {
                break;
            };
            pending.push_operator(op, span)?;

            self.cursor.skip_blank();
            pending.push_operand(self.parse_leaf()?);
        }

        pending.finish(self.cursor.span_here()).map(Some)
    }

    /// Parse a leaf: a simple command, or `(` command list `)`.
    fn parse_leaf(&mut self) -> Result<Command, ParseError> {
        if let Some(cmd) = self.parse_simple_command()? {
            return Ok(Command::Simple(cmd));
        }

        let open = self.cursor.span_here();
        if !self.cursor.eat(b'(') {
            return Err(self.unexpected("a command or '('"));
        }
        if self.nesting == MAX_SUBSHELL_NESTING {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_SUBSHELL_NESTING,
                span: open,
            });
        }

        self.nesting += 1;
        let body = self.parse_command_list(false);
        self.nesting -= 1;
        match body? {
            Some(body) => Ok(Command::subshell(body)),
            None => Err(ParseError::UnexpectedEof {
                expected: "a command list after '('".to_string(),
                span: self.cursor.span_here(),
            }),
        }
    }

    /// Consume the operator after a leaf.
    ///
    /// Returns `Ok(None)` when the list ends here: a blank line or end of
    /// input at top level, or `)` inside a subshell.
    fn parse_operator(&mut self, top_level: bool) -> Result<Option<Operator>, ParseError> {
        let span = self.cursor.span_here();
        let op = match self.cursor.peek() {
            Some(b'&') => {
                self.cursor.bump();
                if !self.cursor.eat(b'&') {
                    return Err(self.lone_ampersand());
                }
                Operator::And
            }
            Some(b'|') => {
                self.cursor.bump();
                if self.cursor.eat(b'|') {
                    Operator::Or
                } else {
                    Operator::Pipe
                }
            }
            Some(b';') => {
                self.cursor.bump();
                Operator::Sequence
            }
            Some(b'\n') => {
                self.cursor.bump();
                self.cursor.skip_spaces();
                self.cursor.skip_comment();
                if matches!(self.cursor.peek(), None | Some(b'\n')) {
                    if !top_level {
                        return Err(ParseError::UnterminatedSubshell {
                            span: self.cursor.span_here(),
                        });
                    }
                    return Ok(None);
                }
                Operator::Sequence
            }
            Some(b')') => {
                if top_level {
                    return Err(ParseError::UnexpectedCloseParen { span });
                }
                self.cursor.bump();
                self.cursor.skip_spaces();
                return Ok(None);
            }
            None => {
                if !top_level {
                    return Err(ParseError::UnterminatedSubshell { span });
                }
                return Ok(None);
            }
            Some(_) => {
                let expected = if top_level {
                    "an operator, newline, or end of input"
                } else {
                    "an operator, newline, or ')'"
                };
                return Err(self.unexpected(expected));
            }
        };
        Ok(Some(op))
    }

    /// Create an error for the character at the cursor.
    fn unexpected(&self, expected: &str) -> ParseError {
        let span = self.cursor.span_here();
        let expected = expected.to_string();
        match self.cursor.peek_char() {
            Some(Ok(found)) => ParseError::UnexpectedChar {
                found,
                expected,
                span,
            },
            Some(Err(byte)) => ParseError::InvalidByte {
                byte,
                expected,
                span,
            },
            None => ParseError::UnexpectedEof { expected, span },
        }
    }

    /// Error for a `&` not followed by another `&`.
    ///
    /// The byte after the `&` is consumed, so when it is a newline the error
    /// is reported on the following line.
    fn lone_ampersand(&mut self) -> ParseError {
        let err = self.unexpected("'&&'");
        if !self.cursor.eat(b'\n') {
            return err;
        }
        ParseError::UnexpectedChar {
            found: '\n',
            expected: "'&&'".to_string(),
            span: Span::empty(self.cursor.pos()),
        }
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
