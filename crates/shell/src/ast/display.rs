// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical single-line rendering of command trees.
//!
//! Operators are written flat, without added parentheses. For trees built by
//! the parser this re-parses to the same tree: a right child always binds
//! tighter than its parent and a left child never binds looser.

use std::fmt;

use super::{Command, Operator, SimpleCommand};

impl fmt::Display for SimpleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))?;
        if let Some(input) = &self.input {
            write!(f, " <{input}")?;
        }
        if let Some(output) = &self.output {
            write!(f, " >{output}")?;
        }
        Ok(())
    }
}

/// Pending output while rendering a tree.
enum Piece<'a> {
    Node(&'a Command),
    Operator(Operator),
    Close,
}

/// Rendered from a worklist so that arbitrarily deep trees print without
/// recursion.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Command::Simple(cmd)) => fmt::Display::fmt(cmd, f)?,
                Piece::Node(Command::Subshell { body }) => {
                    f.write_str("(")?;
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(body));
                }
                Piece::Node(node) => {
                    if let Some((op, left, right)) = node.as_binary() {
                        pieces.push(Piece::Node(right));
                        pieces.push(Piece::Operator(op));
                        pieces.push(Piece::Node(left));
                    }
                }
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
