// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{resolve_log_filter, DEFAULT_LOG_FILTER};

#[yare::parameterized(
    neither          = { None,               None,                 DEFAULT_LOG_FILTER },
    own_only         = { Some("debug"),      None,                 "debug" },
    rust_log_only    = { None,               Some("trace"),        "trace" },
    own_wins         = { Some("info"),       Some("trace"),        "info" },
    empty_own_skipped = { Some("  "),        Some("cmdstream=debug"), "cmdstream=debug" },
    both_empty       = { Some(""),           Some(""),             DEFAULT_LOG_FILTER },
)]
fn log_filter_precedence(own: Option<&str>, rust_log: Option<&str>, expected: &str) {
    let resolved = resolve_log_filter(own.map(String::from), rust_log.map(String::from));
    assert_eq!(resolved, expected);
}
