// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cmdstream - parse shell command scripts into command trees

mod env;
mod output;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cmdstream_shell::{CommandStream, StreamError};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "cmdstream",
    version,
    about = "Parse shell command scripts into command trees",
    after_help = "Statement lists are separated by blank lines. Each one is printed as a numbered tree."
)]
struct Cli {
    /// Script to parse (reads stdin when omitted or `-`)
    file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Only check the syntax, print nothing on success
    #[arg(long)]
    check: bool,
}

fn main() {
    setup_logging();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(!env::no_color())
                .with_target(false),
        )
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// When every cause already appears in the top-level message the chain is
/// dropped. Otherwise it is rendered like anyhow's Debug output.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run(cli: Cli) -> Result<()> {
    let input = read_input(cli.file.as_deref())?;
    let stream = parse_input(&input)?;
    tracing::debug!(trees = stream.len(), check = cli.check, "parsed input");

    if cli.check {
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_trees(&mut out, cli.output, stream)?;
    out.flush()?;
    Ok(())
}

/// Read the whole script from `file`, or from stdin for `None` and `-`.
fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Build the command stream, attaching a source excerpt to syntax errors.
fn parse_input(input: &[u8]) -> Result<CommandStream> {
    CommandStream::from_bytes(input).map_err(|err| match syntax_excerpt(&err, input) {
        Some(excerpt) => anyhow::anyhow!("{err}\n{excerpt}"),
        None => err.into(),
    })
}

/// The located source line under a syntax error, without the message line.
///
/// Only available for UTF-8 input, where byte spans line up with the text.
fn syntax_excerpt(err: &StreamError, input: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(input).ok()?;
    let diagnostic = err.diagnostic(text)?;
    diagnostic
        .split_once('\n')
        .map(|(_, location)| location.to_string())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
