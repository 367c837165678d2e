// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::ast::{Command, Operator, SimpleCommand};
use crate::parser::Parser;
use proptest::prelude::*;

#[test]
fn simple_with_redirections() {
    let cmd = SimpleCommand::new(["sort", "-u"])
        .with_input("in.txt")
        .with_output("out.txt");
    assert_eq!(cmd.to_string(), "sort -u <in.txt >out.txt");
}

#[test]
fn binary_operators_are_spaced() {
    let cmd = Command::binary(
        Operator::Or,
        Command::binary(Operator::And, Command::simple(["a"]), Command::simple(["b"])),
        Command::simple(["c"]),
    );
    assert_eq!(cmd.to_string(), "a && b || c");
}

#[test]
fn subshell_is_parenthesized() {
    let cmd = Command::binary(
        Operator::Pipe,
        Command::subshell(Command::binary(
            Operator::Sequence,
            Command::simple(["a"]),
            Command::simple(["b"]),
        )),
        Command::simple(["c"]),
    );
    assert_eq!(cmd.to_string(), "(a ; b) | c");
}

#[yare::parameterized(
    pipeline      = { "a | b | c" },
    mixed_tiers   = { "a ; b | c && d || e ; f" },
    redirections  = { "a <in >out | b x y >z" },
    newlines      = { "a\nb && c # note\nd" },
    nested        = { "(a | (b ; c)) && (d)" },
    comments      = { "a # trailing\n(b\nc) | d" },
)]
fn rendering_reparses_to_same_tree(source: &str) {
    let trees = Parser::parse(source).unwrap();
    assert_eq!(trees.len(), 1);
    let rendered = trees[0].to_string();
    let reparsed = Parser::parse(&rendered).unwrap();
    assert_eq!(reparsed, trees, "rendered as {rendered:?}");
}

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!%+,./:@^_-]{1,6}"
}

fn leaf() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word(), 1..4),
        prop::option::of(word()),
        prop::option::of(word()),
    )
        .prop_map(|(words, input, output)| {
            let mut s = words.join(" ");
            if let Some(input) = input {
                s.push_str(&format!(" < {input}"));
            }
            if let Some(output) = output {
                s.push_str(&format!(" > {output}"));
            }
            s
        })
}

fn operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" | ", " && ", " || ", " ; ", "\n"])
}

proptest! {
    #[test]
    fn flat_lists_round_trip(
        first in leaf(),
        rest in prop::collection::vec((operator(), leaf()), 0..6),
    ) {
        let mut source = first;
        for (op, leaf) in rest {
            source.push_str(op);
            source.push_str(&leaf);
        }
        let trees = Parser::parse(&source).unwrap();
        prop_assert_eq!(trees.len(), 1);
        let reparsed = Parser::parse(&trees[0].to_string()).unwrap();
        prop_assert_eq!(reparsed, trees);
    }
}
