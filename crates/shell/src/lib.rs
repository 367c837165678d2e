// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Parsing front end for a small shell.
//!
//! This crate turns a stream of bytes holding shell-like command text into a
//! queue of command trees, one per top-level statement list.
//!
//! # Quick Start
//!
//! ```
//! use cmdstream_shell::CommandStream;
//!
//! let stream = CommandStream::parse("sort < in.txt | uniq > out.txt\n\n(cd build ; make) && echo ok")?;
//! for tree in stream {
//!     println!("{tree}");
//! }
//! # Ok::<(), cmdstream_shell::StreamError>(())
//! ```
//!
//! # Syntax
//!
//! - **Words**: runs of ASCII letters, digits and `! % + , - . / : @ ^ _`
//! - **Redirections**: `< file` and `> file`, one of each per command
//! - **Operators**: `|` binds tightest, then `&&` and `||`, then `;` and newline
//! - **Subshells**: `( ... )` around any command list
//! - **Comments**: `#` to end of line
//! - **Statement lists**: separated by a blank line
//!
//! No quoting, escaping, globbing, here-documents or background jobs.
//!
//! # Tree Structure
//!
//! ```text
//! Command
//! ├── Simple(SimpleCommand)
//! │   ├── words: Vec<String>
//! │   ├── input: Option<String>
//! │   └── output: Option<String>
//! ├── Pipe / And / Or / Sequence { left, right }
//! └── Subshell { body }
//! ```
//!
//! # Errors
//!
//! Parsing is all or nothing. [`CommandStream`] construction fails with a
//! [`StreamError`] carrying the 1-based line of the first syntax error, or
//! [`StreamError::NoCommands`] for input without commands.

mod ast;
mod error;
mod parse_error;
mod parser;
pub mod scanner;
pub mod span;
pub mod stack;
mod stream;

// AST types
pub use ast::{AstVisitor, Command, Operator, RedirectKind, SimpleCommand};

// Errors
pub use error::StreamError;
pub use parse_error::ParseError;

// Parser
pub use parser::{Parser, MAX_SUBSHELL_NESTING};
pub use scanner::{is_word_char, Cursor};
pub use span::{context_snippet, diagnostic_context, line_at, locate_span, Span};
pub use stack::Stack;

// Command stream
pub use stream::{ByteSource, CommandStream, ReadSource};
