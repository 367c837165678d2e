// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

/// Filter used when no log variable is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// --- Logging ---

/// Resolve the log filter directive: CMDSTREAM_LOG > RUST_LOG > "warn"
pub fn log_filter() -> String {
    resolve_log_filter(
        std::env::var("CMDSTREAM_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
    )
}

fn resolve_log_filter(own: Option<String>, rust_log: Option<String>) -> String {
    own.filter(|s| !s.trim().is_empty())
        .or_else(|| rust_log.filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
