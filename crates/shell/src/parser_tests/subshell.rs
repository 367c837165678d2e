// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parenthesized subshells.

use super::{and, cmd, parse_one, pipe, seq, sub};
use crate::ast::{Command, SimpleCommand};

#[test]
fn subshell_in_pipeline() {
    let tree = parse_one("(a ; b) | c");
    assert_eq!(tree, pipe(sub(seq(cmd(&["a"]), cmd(&["b"]))), cmd(&["c"])));
}

#[test]
fn subshell_overrides_precedence() {
    let tree = parse_one("a | (b && c)");
    assert_eq!(tree, pipe(cmd(&["a"]), sub(and(cmd(&["b"]), cmd(&["c"])))));
}

#[test]
fn nested_subshells() {
    let tree = parse_one("((a) ; (b | (c)))");
    let expected = sub(seq(
        sub(cmd(&["a"])),
        sub(pipe(cmd(&["b"]), sub(cmd(&["c"])))),
    ));
    assert_eq!(tree, expected);
    assert_eq!(tree.max_nesting_depth(), 3);
}

#[test]
fn subshell_body_spans_lines() {
    let tree = parse_one("(\n  a\n  b) && c");
    assert_eq!(tree, and(sub(seq(cmd(&["a"]), cmd(&["b"]))), cmd(&["c"])));
}

#[test]
fn spaces_inside_and_after_parens() {
    let tree = parse_one("(  a  )   |   b");
    assert_eq!(tree, pipe(sub(cmd(&["a"])), cmd(&["b"])));
}

#[test]
fn redirections_inside_subshell() {
    let tree = parse_one("(sort < in > out)");
    let inner = SimpleCommand::new(["sort"])
        .with_input("in")
        .with_output("out");
    assert_eq!(tree, sub(Command::Simple(inner)));
}

#[test]
fn subshell_as_whole_statement() {
    let tree = parse_one("(a)");
    assert_eq!(tree, sub(cmd(&["a"])));
}
