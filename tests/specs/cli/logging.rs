//! Logging specs
//!
//! Logs go to stderr. The filter comes from CMDSTREAM_LOG, then RUST_LOG,
//! and defaults to warnings only.

use crate::prelude::*;

#[test]
fn overridden_redirection_warns_by_default() {
    cli()
        .stdin("a > x > y")
        .passes()
        .stdout_eq("# 1\n  a >y\n")
        .stderr_has("WARN")
        .stderr_has("redirection target overridden");
}

#[test]
fn quiet_by_default_for_clean_scripts() {
    cli().stdin("a | b").passes().stderr_eq("");
}

#[test]
fn own_variable_raises_verbosity() {
    cli()
        .env("CMDSTREAM_LOG", "debug")
        .stdin("a | b")
        .passes()
        .stderr_has("built command stream");
}

#[test]
fn own_variable_wins_over_rust_log() {
    cli()
        .env("RUST_LOG", "debug")
        .env("CMDSTREAM_LOG", "error")
        .stdin("a > x > y")
        .passes()
        .stderr_eq("");
}

#[test]
fn rust_log_is_honored() {
    cli()
        .env("RUST_LOG", "trace")
        .stdin("a | b")
        .passes()
        .stderr_has("reduce");
}
