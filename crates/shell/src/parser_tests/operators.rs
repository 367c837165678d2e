// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator precedence and associativity.

use super::{and, cmd, or, parse_one, pipe, seq};

#[test]
fn pipeline_is_left_associative() {
    let tree = parse_one("a | b | c");
    assert_eq!(tree, pipe(pipe(cmd(&["a"]), cmd(&["b"])), cmd(&["c"])));
}

#[test]
fn and_or_share_a_tier() {
    let tree = parse_one("a && b || c");
    assert_eq!(tree, or(and(cmd(&["a"]), cmd(&["b"])), cmd(&["c"])));

    let tree = parse_one("a || b && c");
    assert_eq!(tree, and(or(cmd(&["a"]), cmd(&["b"])), cmd(&["c"])));
}

#[test]
fn pipe_binds_tighter_than_and() {
    let tree = parse_one("a | b && c");
    assert_eq!(tree, and(pipe(cmd(&["a"]), cmd(&["b"])), cmd(&["c"])));

    let tree = parse_one("a && b | c");
    assert_eq!(tree, and(cmd(&["a"]), pipe(cmd(&["b"]), cmd(&["c"]))));
}

#[test]
fn sequence_is_loosest() {
    let tree = parse_one("a ; b && c | d");
    assert_eq!(
        tree,
        seq(
            cmd(&["a"]),
            and(cmd(&["b"]), pipe(cmd(&["c"]), cmd(&["d"])))
        )
    );

    let tree = parse_one("a | b || c ; d");
    assert_eq!(
        tree,
        seq(or(pipe(cmd(&["a"]), cmd(&["b"])), cmd(&["c"])), cmd(&["d"]))
    );
}

#[test]
fn sequence_is_left_associative() {
    let tree = parse_one("a ; b ; c");
    assert_eq!(tree, seq(seq(cmd(&["a"]), cmd(&["b"])), cmd(&["c"])));
}

#[test]
fn semicolon_and_newline_are_equivalent() {
    let expected = seq(cmd(&["a"]), cmd(&["b"]));
    assert_eq!(parse_one("a ; b"), expected);
    assert_eq!(parse_one("a;b"), expected);
    assert_eq!(parse_one("a\nb"), expected);
    assert_eq!(parse_one("a\n   b\n"), expected);
}

#[test]
fn operators_without_spaces() {
    let tree = parse_one("a|b&&c||d");
    assert_eq!(
        tree,
        or(and(pipe(cmd(&["a"]), cmd(&["b"])), cmd(&["c"])), cmd(&["d"]))
    );
}

#[test]
fn operand_may_follow_on_later_lines() {
    let expected = and(cmd(&["a"]), cmd(&["b"]));
    assert_eq!(parse_one("a &&\n  b"), expected);
    assert_eq!(parse_one("a &&\n\n# why\n\nb"), expected);
}

#[test]
fn semicolon_swallows_blank_lines() {
    let tree = parse_one("a ;\n\nb");
    assert_eq!(tree, seq(cmd(&["a"]), cmd(&["b"])));
}

#[test]
fn comment_between_operator_and_operand() {
    let tree = parse_one("a | # feed\n b");
    assert_eq!(tree, pipe(cmd(&["a"]), cmd(&["b"])));
}

#[test]
fn long_mixed_chain() {
    let tree = parse_one("a | b && c | d || e ; f | g");
    let expected = seq(
        or(
            and(pipe(cmd(&["a"]), cmd(&["b"])), pipe(cmd(&["c"]), cmd(&["d"]))),
            cmd(&["e"]),
        ),
        pipe(cmd(&["f"]), cmd(&["g"])),
    );
    assert_eq!(tree, expected);
}
