// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from building a command stream.

use thiserror::Error;

use crate::parse_error::ParseError;

/// Why a command stream could not be built.
///
/// Every variant is fatal: no partial stream is returned.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The input is malformed. `line` is 1-based.
    #[error("{line}: syntax error: {source}")]
    Syntax {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// The input contained no commands at all.
    #[error("no commands found")]
    NoCommands,

    /// The byte source failed while being read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl StreamError {
    /// Line number of a syntax error.
    pub fn line(&self) -> Option<usize> {
        match self {
            StreamError::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The underlying syntax error, if any.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            StreamError::Syntax { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Rich diagnostic for syntax errors, pointing into `input`.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        self.parse_error().map(|e| e.diagnostic(input))
    }
}
