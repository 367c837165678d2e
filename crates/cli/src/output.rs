// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use anyhow::{bail, Result};
use clap::ValueEnum;
use cmdstream_shell::Command;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Deepest tree JSON output will serialize. Serialization recurses once per
/// level, and newline-joined scripts nest one level per line.
pub const MAX_JSON_DEPTH: usize = 1_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write command trees in the requested format.
///
/// Text output numbers each tree from 1 and prints its rendering indented
/// under a `# N` header. JSON output is a single array of trees, and fails
/// before writing anything if a tree is deeper than [`MAX_JSON_DEPTH`].
pub fn write_trees<W, I>(out: &mut W, format: OutputFormat, trees: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Command>,
{
    match format {
        OutputFormat::Text => {
            for (i, tree) in trees.into_iter().enumerate() {
                writeln!(out, "# {}", i + 1)?;
                writeln!(out, "  {}", tree)?;
            }
        }
        OutputFormat::Json => {
            let trees: Vec<Command> = trees.into_iter().collect();
            for (i, tree) in trees.iter().enumerate() {
                let depth = tree.depth();
                if depth > MAX_JSON_DEPTH {
                    bail!(
                        "statement list {} is {} levels deep, JSON output supports at most {}",
                        i + 1,
                        depth,
                        MAX_JSON_DEPTH
                    );
                }
            }
            serde_json::to_writer_pretty(&mut *out, &trees)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
