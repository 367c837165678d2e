// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::ast::{Operator, RedirectKind};
use crate::span::{context_snippet, diagnostic_context, Span};
use thiserror::Error;

/// Syntax errors raised while building a command tree.
///
/// Every variant carries the span of the byte where the problem was
/// detected; at end of input the span is empty. Any syntax error aborts the
/// whole parse.
///
/// # Examples
///
/// ```
/// use cmdstream_shell::{Parser, ParseError};
///
/// let result = Parser::parse("a &&");
/// assert!(matches!(result, Err(ParseError::UnexpectedEof { .. })));
///
/// let result = Parser::parse("a | | b");
/// assert!(matches!(result, Err(ParseError::UnexpectedChar { found: '|', .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A byte that does not fit the grammar at this point.
    #[error("unexpected {found:?}, expected {expected}")]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// Description of what was expected.
        expected: String,
        /// Source location of the character.
        span: Span,
    },

    /// A byte that does not start a valid UTF-8 character.
    #[error("unexpected byte 0x{byte:02x}, expected {expected}")]
    InvalidByte {
        byte: u8,
        expected: String,
        span: Span,
    },

    /// Input ended where more was required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
        /// Empty span at the end of input.
        span: Span,
    },

    /// `)` outside of any subshell.
    #[error("unmatched ')'")]
    UnexpectedCloseParen { span: Span },

    /// A subshell body ended with a blank line or end of input instead of `)`.
    #[error("subshell not closed, expected ')'")]
    UnterminatedSubshell { span: Span },

    /// `<` or `>` before the first word of a command.
    #[error("{kind} redirection before command")]
    RedirectionBeforeCommand { kind: RedirectKind, span: Span },

    /// `<` or `>` without a file name after it.
    #[error("missing {kind} file name after '{}'", kind.symbol())]
    MissingRedirectTarget { kind: RedirectKind, span: Span },

    /// Subshells nested deeper than the parser accepts.
    #[error("subshells nested more than {limit} deep")]
    NestingTooDeep { limit: usize, span: Span },

    /// An operator was reduced with fewer than two operands on the stack.
    #[error("operator '{operator}' is missing an operand")]
    MissingOperand { operator: Operator, span: Span },

    /// The operand and operator stacks did not collapse to one command.
    #[error("unbalanced command list ({operands} operands, {operators} operators left)")]
    Unbalanced {
        operands: usize,
        operators: usize,
        span: Span,
    },
}

impl ParseError {
    /// The span where the error was detected.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedChar { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::UnexpectedCloseParen { span }
            | ParseError::UnterminatedSubshell { span }
            | ParseError::RedirectionBeforeCommand { span, .. }
            | ParseError::MissingRedirectTarget { span, .. }
            | ParseError::InvalidByte { span, .. }
            | ParseError::NestingTooDeep { span, .. }
            | ParseError::MissingOperand { span, .. }
            | ParseError::Unbalanced { span, .. } => *span,
        }
    }

    /// Generate a context snippet showing where the error occurred.
    ///
    /// ```text
    /// a | | b
    ///     ^
    /// ```
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }

    /// Generate a rich diagnostic with line/column info.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}
