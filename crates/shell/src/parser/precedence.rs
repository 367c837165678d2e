// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operand and operator stacks for one command list.

use tracing::trace;

use crate::ast::{Command, Operator};
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::stack::Stack;

/// A command list under construction.
///
/// Operands are finished command trees; operators wait until an operator of
/// equal or lower tier arrives (or the list ends) before being folded into a
/// binary node with the two operands below them.
#[derive(Debug, Default)]
pub(super) struct PendingList {
    operands: Stack<Command>,
    operators: Stack<Operator>,
}

impl PendingList {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push_operand(&mut self, command: Command) {
        self.operands.push(command);
    }

    /// Reduce every pending operator that binds at least as tightly as `op`,
    /// then push `op`.
    pub(super) fn push_operator(&mut self, op: Operator, span: Span) -> Result<(), ParseError> {
        while self
            .operators
            .top()
            .is_some_and(|top| top.precedence() >= op.precedence())
        {
            self.reduce(span)?;
        }
        self.operators.push(op);
        Ok(())
    }

    /// Drain the operator stack and return the single remaining tree.
    pub(super) fn finish(mut self, span: Span) -> Result<Command, ParseError> {
        while !self.operators.is_empty() {
            self.reduce(span)?;
        }
        if self.operands.len() != 1 {
            return Err(ParseError::Unbalanced {
                operands: self.operands.len(),
                operators: self.operators.len(),
                span,
            });
        }
        self.operands.pop().ok_or(ParseError::Unbalanced {
            operands: 0,
            operators: 0,
            span,
        })
    }

    /// Fold the top operator and the top two operands into one operand.
    fn reduce(&mut self, span: Span) -> Result<(), ParseError> {
        let Some(op) = self.operators.pop() else {
            return Ok(());
        };
        let (left, right) = self
            .operands
            .pop_pair()
            .ok_or(ParseError::MissingOperand { operator: op, span })?;
        trace!(operator = %op, "reduce");
        self.operands.push(Command::binary(op, left, right));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../parser_tests/precedence.rs"]
mod tests;
