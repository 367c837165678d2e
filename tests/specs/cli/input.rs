//! Input selection specs
//!
//! Scripts come from a file argument, or stdin when the argument is omitted
//! or `-`.

use crate::prelude::*;

#[test]
fn reads_script_file() {
    let script = Script::new("make && make test\n");
    script
        .cmdstream()
        .passes()
        .stdout_eq("# 1\n  make && make test\n");
}

#[test]
fn reads_stdin_without_argument() {
    cli()
        .stdin("ls | wc -l\n")
        .passes()
        .stdout_eq("# 1\n  ls | wc -l\n");
}

#[test]
fn dash_reads_stdin() {
    cli()
        .args(&["-"])
        .stdin("a ; b")
        .passes()
        .stdout_eq("# 1\n  a ; b\n");
}

#[test]
fn check_prints_nothing_for_valid_script() {
    let script = Script::new("a | b\n\nc\n");
    script.cmdstream().args(&["--check"]).passes().stdout_eq("");
}

#[test]
fn check_still_reports_syntax_errors() {
    let script = Script::new("a | b\n\nc | | d\n");
    script
        .cmdstream()
        .args(&["--check"])
        .fails()
        .code(1)
        .stderr_has("Error: 3: syntax error");
}

#[test]
fn nul_byte_ends_the_script() {
    let script = Script::bytes(b"a | b\0 this ( is ignored");
    script.cmdstream().passes().stdout_eq("# 1\n  a | b\n");
}

#[test]
fn long_newline_script_is_handled() {
    let script = Script::new(&"make\n".repeat(300_000));
    script.cmdstream().args(&["--check"]).passes().stdout_eq("");

    let stdout = script.cmdstream().passes().stdout();
    assert!(stdout.starts_with("# 1\n  make ; make ; make"));
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn json_refuses_very_deep_trees() {
    let script = Script::new(&"make\n".repeat(300_000));
    script
        .cmdstream()
        .args(&["-o", "json"])
        .fails()
        .code(1)
        .stdout_eq("")
        .stderr_has("Error: statement list 1 is 300000 levels deep");
}
