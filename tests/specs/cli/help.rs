//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage_and_options() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--output")
        .stdout_has("--check")
        .stdout_has("Statement lists are separated by blank lines");
}

#[test]
fn version_prints_package_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    cli()
        .args(&["--frobnicate"])
        .fails()
        .code(2)
        .stderr_has("--frobnicate");
}
