// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax errors and where they are reported.

use crate::ast::RedirectKind;
use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::span::Span;

fn parse_err(input: &str) -> ParseError {
    match Parser::parse(input) {
        Ok(trees) => panic!("expected error for {input:?}, got {trees:?}"),
        Err(e) => e,
    }
}

#[yare::parameterized(
    and_at_end        = { "a &&", 4 },
    or_at_end         = { "a ||", 4 },
    pipe_at_end       = { "a |", 3 },
    semicolon_at_end  = { "a ; ", 4 },
    open_paren_only   = { "(", 1 },
    operator_at_eol   = { "a &&\n\n", 6 },
)]
fn missing_operand_at_end(input: &str, pos: usize) {
    let err = parse_err(input);
    assert!(
        matches!(err, ParseError::UnexpectedEof { .. }),
        "got {err:?}"
    );
    assert_eq!(err.span(), Span::empty(pos));
}

#[yare::parameterized(
    double_pipe_gap  = { "a | | b", '|', 4 },
    leading_pipe     = { "| a", '|', 0 },
    leading_and      = { "&& a", '&', 0 },
    single_amp       = { "a & b", ' ', 3 },
    empty_subshell   = { "()", ')', 1 },
    tab_separator    = { "a\tb", '\t', 1 },
    dollar           = { "echo $HOME", '$', 5 },
    quote            = { "echo 'x'", '\'', 5 },
    word_after_paren = { "(a) b", 'b', 4 },
    redirect_paren   = { "(a) > out", '>', 4 },
    newline_close    = { "(a\n)", ')', 3 },
)]
fn unexpected_characters(input: &str, found: char, pos: usize) {
    match parse_err(input) {
        ParseError::UnexpectedChar {
            found: actual,
            span,
            ..
        } => {
            assert_eq!(actual, found);
            assert_eq!(span, Span::at(pos));
        }
        other => panic!("expected UnexpectedChar, got {other:?}"),
    }
}

#[test]
fn unclosed_subshell() {
    assert_eq!(
        parse_err("(a"),
        ParseError::UnterminatedSubshell {
            span: Span::empty(2)
        }
    );
    assert_eq!(
        parse_err("(a | (b)"),
        ParseError::UnterminatedSubshell {
            span: Span::empty(8)
        }
    );
}

#[test]
fn blank_line_inside_subshell() {
    assert_eq!(
        parse_err("(a\n\nb)"),
        ParseError::UnterminatedSubshell { span: Span::at(3) }
    );
}

#[test]
fn close_paren_at_top_level() {
    assert_eq!(
        parse_err("a)"),
        ParseError::UnexpectedCloseParen { span: Span::at(1) }
    );
    assert_eq!(
        parse_err("(a))"),
        ParseError::UnexpectedCloseParen { span: Span::at(3) }
    );
}

#[yare::parameterized(
    input_at_eof      = { "a <", RedirectKind::Input, Span::empty(3) },
    input_then_space  = { "a < ", RedirectKind::Input, Span::empty(4) },
    output_at_eof     = { "a >", RedirectKind::Output, Span::empty(3) },
    output_before_op  = { "a > | b", RedirectKind::Output, Span::at(4) },
    input_before_nl   = { "a <\nb", RedirectKind::Input, Span::at(3) },
    output_comment    = { "a > # out", RedirectKind::Output, Span::empty(9) },
)]
fn missing_redirect_target(input: &str, kind: RedirectKind, span: Span) {
    assert_eq!(
        parse_err(input),
        ParseError::MissingRedirectTarget { kind, span }
    );
}

#[yare::parameterized(
    input_first  = { "< in a", RedirectKind::Input, 0 },
    output_first = { "  > out a", RedirectKind::Output, 2 },
    after_pipe   = { "a | <in b", RedirectKind::Input, 4 },
)]
fn redirection_before_command(input: &str, kind: RedirectKind, pos: usize) {
    assert_eq!(
        parse_err(input),
        ParseError::RedirectionBeforeCommand {
            kind,
            span: Span::at(pos)
        }
    );
}

#[test]
fn error_in_later_statement_list_aborts() {
    let err = parse_err("a\n\nb |");
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn messages() {
    assert_eq!(
        parse_err("a | | b").to_string(),
        "unexpected '|', expected a command or '('"
    );
    assert_eq!(
        parse_err("a <").to_string(),
        "missing input file name after '<'"
    );
    assert_eq!(
        parse_err("> x").to_string(),
        "output redirection before command"
    );
    assert_eq!(parse_err("a)").to_string(), "unmatched ')'");
    assert_eq!(
        parse_err("a &&").to_string(),
        "unexpected end of input, expected a command or '('"
    );
}

#[test]
fn diagnostic_points_at_line() {
    let input = "a\n\nb | | c";
    let diag = parse_err(input).diagnostic(input);
    assert!(diag.contains("line 3, column 5"), "{diag}");
    assert!(diag.contains("  3 | b | | c"), "{diag}");
}

#[test]
fn context_snippet_marks_error() {
    let input = "a | | b";
    assert_eq!(parse_err(input).context(input, 20), "a | | b\n    ^");
}

#[test]
fn lone_ampersand_consumes_following_newline() {
    assert_eq!(
        parse_err("a &\nb"),
        ParseError::UnexpectedChar {
            found: '\n',
            expected: "'&&'".to_string(),
            span: Span::empty(4),
        }
    );
    assert_eq!(
        parse_err("a &").span(),
        Span::empty(3),
        "nothing to consume at end of input"
    );
}

#[test]
fn non_ascii_character_is_reported_whole() {
    let err = parse_err("echo é");
    assert_eq!(
        err,
        ParseError::UnexpectedChar {
            found: 'é',
            expected: "an operator, newline, or end of input".to_string(),
            span: Span::at(5),
        }
    );
    assert_eq!(
        err.to_string(),
        "unexpected 'é', expected an operator, newline, or end of input"
    );
}

#[test]
fn invalid_utf8_byte_is_reported_in_hex() {
    let err = Parser::new(b"a \xff b").next_statement_list().unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidByte {
            byte: 0xff,
            expected: "an operator, newline, or end of input".to_string(),
            span: Span::at(2),
        }
    );
    assert_eq!(
        err.to_string(),
        "unexpected byte 0xff, expected an operator, newline, or end of input"
    );
}

#[test]
fn subshell_nesting_is_bounded() {
    use crate::parser::MAX_SUBSHELL_NESTING;

    let nested = |depth: usize| format!("{}a{}", "(".repeat(depth), ")".repeat(depth));

    let trees = Parser::parse(&nested(MAX_SUBSHELL_NESTING)).unwrap();
    assert_eq!(trees[0].max_nesting_depth(), MAX_SUBSHELL_NESTING);

    assert_eq!(
        parse_err(&nested(MAX_SUBSHELL_NESTING + 1)),
        ParseError::NestingTooDeep {
            limit: MAX_SUBSHELL_NESTING,
            span: Span::at(MAX_SUBSHELL_NESTING),
        }
    );
}
