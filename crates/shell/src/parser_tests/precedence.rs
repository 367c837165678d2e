// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::PendingList;
use crate::ast::{Command, Operator};
use crate::parse_error::ParseError;
use crate::span::Span;

fn leaf(name: &str) -> Command {
    Command::simple([name])
}

#[test]
fn single_operand_finishes_as_itself() {
    let mut list = PendingList::new();
    list.push_operand(leaf("a"));
    assert_eq!(list.finish(Span::empty(0)).unwrap(), leaf("a"));
}

#[test]
fn equal_tier_reduces_before_push() {
    let mut list = PendingList::new();
    list.push_operand(leaf("a"));
    list.push_operator(Operator::And, Span::empty(0)).unwrap();
    list.push_operand(leaf("b"));
    list.push_operator(Operator::Or, Span::empty(0)).unwrap();
    assert_eq!(list.operators.len(), 1);
    assert_eq!(list.operands.len(), 1);

    list.push_operand(leaf("c"));
    let tree = list.finish(Span::empty(0)).unwrap();
    let expected = Command::binary(
        Operator::Or,
        Command::binary(Operator::And, leaf("a"), leaf("b")),
        leaf("c"),
    );
    assert_eq!(tree, expected);
}

#[test]
fn tighter_operator_waits_on_stack() {
    let mut list = PendingList::new();
    list.push_operand(leaf("a"));
    list.push_operator(Operator::Sequence, Span::empty(0)).unwrap();
    list.push_operand(leaf("b"));
    list.push_operator(Operator::Pipe, Span::empty(0)).unwrap();
    assert_eq!(list.operators.len(), 2);
    assert_eq!(list.operands.len(), 2);
}

#[test]
fn operator_without_operands_is_fatal() {
    let mut list = PendingList::new();
    list.push_operand(leaf("a"));
    list.push_operator(Operator::Pipe, Span::at(2)).unwrap();
    list.push_operator(Operator::And, Span::at(5)).unwrap_err();

    let mut list = PendingList::new();
    list.push_operand(leaf("a"));
    list.push_operator(Operator::Pipe, Span::at(2)).unwrap();
    assert_eq!(
        list.finish(Span::at(3)),
        Err(ParseError::MissingOperand {
            operator: Operator::Pipe,
            span: Span::at(3),
        })
    );
}

#[test]
fn leftover_operands_are_unbalanced() {
    let mut list = PendingList::new();
    list.push_operand(leaf("a"));
    list.push_operand(leaf("b"));
    assert_eq!(
        list.finish(Span::empty(3)),
        Err(ParseError::Unbalanced {
            operands: 2,
            operators: 0,
            span: Span::empty(3),
        })
    );
}

#[test]
fn empty_list_is_unbalanced() {
    let list = PendingList::new();
    assert!(matches!(
        list.finish(Span::empty(0)),
        Err(ParseError::Unbalanced { operands: 0, .. })
    ));
}
