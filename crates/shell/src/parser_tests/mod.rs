// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod errors;
mod operators;
mod simple;
mod statements;
mod subshell;

use crate::ast::{Command, Operator, SimpleCommand};
use crate::parser::Parser;

/// Parse input that must contain exactly one statement list.
pub(super) fn parse_one(input: &str) -> Command {
    let mut trees = Parser::parse(input).unwrap();
    assert_eq!(trees.len(), 1, "expected one statement list in {input:?}");
    trees.remove(0)
}

/// Parse input expected to be a single simple command.
pub(super) fn parse_simple(input: &str) -> SimpleCommand {
    match parse_one(input) {
        Command::Simple(ref cmd) => cmd.clone(),
        other => panic!("expected simple command, got {other:?}"),
    }
}

pub(super) fn cmd(words: &[&str]) -> Command {
    Command::simple(words.iter().copied())
}

pub(super) fn pipe(left: Command, right: Command) -> Command {
    Command::binary(Operator::Pipe, left, right)
}

pub(super) fn and(left: Command, right: Command) -> Command {
    Command::binary(Operator::And, left, right)
}

pub(super) fn or(left: Command, right: Command) -> Command {
    Command::binary(Operator::Or, left, right)
}

pub(super) fn seq(left: Command, right: Command) -> Command {
    Command::binary(Operator::Sequence, left, right)
}

pub(super) fn sub(body: Command) -> Command {
    Command::subshell(body)
}
