// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level statement list segmentation.

use super::{and, cmd, pipe, seq};
use crate::parser::Parser;

#[test]
fn blank_line_separates_statement_lists() {
    let trees = Parser::parse("a | b\n\nc && d").unwrap();
    assert_eq!(
        trees,
        vec![
            pipe(cmd(&["a"]), cmd(&["b"])),
            and(cmd(&["c"]), cmd(&["d"])),
        ]
    );
}

#[test]
fn many_blank_lines_and_comments_between_lists() {
    let trees = Parser::parse("\n\n# header\na\n\n\n   \n# middle\n\nb\nc\n\n").unwrap();
    assert_eq!(trees, vec![cmd(&["a"]), seq(cmd(&["b"]), cmd(&["c"]))]);
}

#[test]
fn comment_line_ends_a_list() {
    // After a newline, a comment line counts as the blank line.
    let trees = Parser::parse("a\n# note\nb").unwrap();
    assert_eq!(trees, vec![cmd(&["a"]), cmd(&["b"])]);
}

#[test]
fn line_of_spaces_is_not_blank() {
    // Spaces are skipped, then the next newline ends the list.
    let trees = Parser::parse("a\n    \nb").unwrap();
    assert_eq!(trees, vec![cmd(&["a"]), cmd(&["b"])]);
}

#[test]
fn empty_input_has_no_lists() {
    assert_eq!(Parser::parse("").unwrap(), vec![]);
    assert_eq!(Parser::parse("\n \n# only comments\n").unwrap(), vec![]);
}

#[test]
fn next_statement_list_advances_cursor() {
    let mut parser = Parser::new(b"a\n\nb ; c\n");
    assert_eq!(parser.next_statement_list().unwrap(), Some(cmd(&["a"])));
    assert_eq!(parser.line(), 2);
    assert_eq!(
        parser.next_statement_list().unwrap(),
        Some(seq(cmd(&["b"]), cmd(&["c"])))
    );
    assert_eq!(parser.next_statement_list().unwrap(), None);
    assert_eq!(parser.position(), 9);
    assert_eq!(parser.next_statement_list().unwrap(), None);
}

#[test]
fn nul_byte_ends_input() {
    let mut parser = Parser::new(b"a | b\0 && c");
    assert_eq!(
        parser.next_statement_list().unwrap(),
        Some(pipe(cmd(&["a"]), cmd(&["b"])))
    );
    assert_eq!(parser.next_statement_list().unwrap(), None);
}

#[test]
fn parsing_twice_gives_equal_independent_trees() {
    let source = "a < x | (b ; c) && d > y\n\ne";
    let first = Parser::parse(source).unwrap();
    let mut second = Parser::parse(source).unwrap();
    assert_eq!(first, second);

    second.pop();
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
}
