// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simple commands: words and redirections.

use super::{parse_one, parse_simple};
use crate::ast::{Command, SimpleCommand};
use crate::parser::Parser;
use proptest::prelude::*;

#[test]
fn single_word() {
    let cmd = parse_simple("ls");
    assert_eq!(cmd, SimpleCommand::new(["ls"]));
}

#[test]
fn words_in_order() {
    let cmd = parse_simple("  cp -r src/a dst/b  ");
    assert_eq!(cmd.words, vec!["cp", "-r", "src/a", "dst/b"]);
    assert_eq!(cmd.input, None);
    assert_eq!(cmd.output, None);
}

#[test]
fn punctuation_words() {
    let cmd = parse_simple("echo a!b %c +d ,e -f .g /h :i @j ^k _l");
    assert_eq!(cmd.words.len(), 12);
    assert_eq!(cmd.words[1], "a!b");
}

#[test]
fn input_redirection() {
    let cmd = parse_simple("a < in.txt");
    assert_eq!(cmd, SimpleCommand::new(["a"]).with_input("in.txt"));
}

#[test]
fn output_redirection_without_spaces() {
    let cmd = parse_simple("sort>out.txt");
    assert_eq!(cmd, SimpleCommand::new(["sort"]).with_output("out.txt"));
}

#[test]
fn redirection_order_does_not_matter() {
    let a = parse_one("a > out.txt < in.txt");
    let b = parse_one("a < in.txt > out.txt");
    assert_eq!(a, b);
    assert_eq!(
        a,
        Command::Simple(
            SimpleCommand::new(["a"])
                .with_input("in.txt")
                .with_output("out.txt")
        )
    );
}

#[test]
fn words_after_redirection_are_arguments() {
    let cmd = parse_simple("grep <in pattern -n >out file");
    assert_eq!(cmd.words, vec!["grep", "pattern", "-n", "file"]);
    assert_eq!(cmd.input.as_deref(), Some("in"));
    assert_eq!(cmd.output.as_deref(), Some("out"));
}

#[test]
fn repeated_redirection_keeps_last_target() {
    let cmd = parse_simple("a < first < second > x > y");
    assert_eq!(cmd.input.as_deref(), Some("second"));
    assert_eq!(cmd.output.as_deref(), Some("y"));
}

#[test]
fn trailing_comment_is_ignored() {
    let cmd = parse_simple("echo hi # not a word | either");
    assert_eq!(cmd.words, vec!["echo", "hi"]);
}

#[test]
fn comment_before_command() {
    let cmd = parse_simple("# heading\necho hi");
    assert_eq!(cmd.words, vec!["echo", "hi"]);
}

#[test]
fn no_words_yields_no_command() {
    let mut parser = Parser::new(b"  ( a )");
    assert_eq!(parser.parse_simple_command().unwrap(), None);
    assert_eq!(parser.cursor.peek(), Some(b'('));
}

#[test]
fn stops_before_operator() {
    let mut parser = Parser::new(b"a b|c");
    let cmd = parser.parse_simple_command().unwrap().unwrap();
    assert_eq!(cmd.words, vec!["a", "b"]);
    assert_eq!(parser.cursor.peek(), Some(b'|'));
}

proptest! {
    #[test]
    fn plain_words_parse_to_one_simple_command(
        words in prop::collection::vec("[a-zA-Z0-9!%+,./:@^_-]{1,8}", 1..10),
        gaps in prop::collection::vec(1usize..4, 10),
    ) {
        let mut source = String::new();
        for (word, gap) in words.iter().zip(&gaps) {
            source.push_str(word);
            source.push_str(&" ".repeat(*gap));
        }
        let trees = Parser::parse(&source).unwrap();
        prop_assert_eq!(trees, vec![Command::Simple(SimpleCommand::new(words))]);
    }
}
