//! CLI error handling specs
//!
//! Every failure prints a single `Error:` line (plus a source excerpt for
//! syntax errors) and exits with status 1. Nothing is printed on stdout.

use crate::prelude::*;

#[test]
fn dangling_operator_reports_line() {
    cli()
        .stdin("a &&")
        .fails()
        .code(1)
        .stdout_eq("")
        .stderr_has("Error: 1: syntax error: unexpected end of input, expected a command or '('");
}

#[test]
fn error_in_later_statement_list_reports_its_line() {
    let script = Script::new("cd src\nmake\n\nmake test | | tee log\n\necho done\n");
    script
        .cmdstream()
        .fails()
        .stdout_eq("")
        .stderr_has("Error: 4: syntax error")
        .stderr_has("--> line 4");
}

#[test]
fn syntax_error_shows_source_excerpt() {
    cli()
        .stdin("a\nb | | c\n")
        .fails()
        .stderr_eq(
            "Error: 2: syntax error: unexpected '|', expected a command or '('\n\
             \x20 --> line 2, column 5\n\
             \x20  |\n\
             \x20 2 | b | | c\n\
             \x20  |     ^\n",
        );
}

#[test]
fn missing_redirect_target() {
    cli()
        .stdin("sort <\n")
        .fails()
        .stderr_has("Error: 1: syntax error: missing input file name after '<'");
}

#[test]
fn unclosed_subshell() {
    cli()
        .stdin("(a ; b\n")
        .fails()
        .stderr_has("subshell not closed, expected ')'");
}

#[test]
fn stray_close_paren() {
    cli()
        .stdin("a )")
        .fails()
        .stderr_has("Error: 1: syntax error: unmatched ')'");
}

#[test]
fn empty_input_has_no_commands() {
    cli()
        .stdin("\n# nothing to do\n\n")
        .fails()
        .code(1)
        .stderr_eq("Error: no commands found\n");
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.sh");
    cli()
        .arg_path(&path)
        .fails()
        .code(1)
        .stderr_has("Error: failed to read ")
        .stderr_has("missing.sh")
        .stderr_has("Caused by:");
}

#[test]
fn invalid_utf8_still_reports_line() {
    let script = Script::bytes(b"a\n\nb \xff\n");
    script
        .cmdstream()
        .fails()
        .stderr_has("Error: 3: syntax error")
        .stderr_lacks("-->");
}
