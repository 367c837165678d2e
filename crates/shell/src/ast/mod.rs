// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command tree types produced by the parser.
//!
//! ```text
//! Command
//! ├── Simple(SimpleCommand { words, input, output })
//! ├── Pipe / And / Or / Sequence { left, right }
//! └── Subshell { body }
//! ```
//!
//! Every node exclusively owns its children. Trees are built bottom-up by
//! the parser and never expose a partially populated node.

mod display;
mod utils;
mod visitor;

pub use visitor::AstVisitor;

use serde::{Deserialize, Serialize};

/// A binary operator joining two commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `|`
    Pipe,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `;` or a single newline
    Sequence,
}

impl Operator {
    /// Binding tier: higher binds tighter.
    ///
    /// `|` binds tightest, `&&` and `||` share a tier, `;` is loosest.
    #[inline]
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Pipe => 3,
            Operator::And | Operator::Or => 2,
            Operator::Sequence => 1,
        }
    }

    /// Source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Pipe => "|",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Sequence => ";",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a redirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectKind {
    /// `< file`
    Input,
    /// `> file`
    Output,
}

impl RedirectKind {
    pub fn symbol(self) -> char {
        match self {
            RedirectKind::Input => '<',
            RedirectKind::Output => '>',
        }
    }
}

impl std::fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedirectKind::Input => f.write_str("input"),
            RedirectKind::Output => f.write_str("output"),
        }
    }
}

/// A leaf command: words plus optional input and output targets.
///
/// `words` is never empty for a parser-produced command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCommand {
    /// Command name followed by its arguments.
    pub words: Vec<String>,
    /// Target of `<`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Target of `>`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl SimpleCommand {
    /// Build a simple command with no redirections.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            input: None,
            output: None,
        }
    }

    /// Set the input redirection target.
    pub fn with_input(mut self, path: impl Into<String>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Set the output redirection target.
    pub fn with_output(mut self, path: impl Into<String>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// The command name (first word).
    pub fn name(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Arguments after the command name.
    pub fn args(&self) -> &[String] {
        self.words.get(1..).unwrap_or(&[])
    }

    /// The redirection target for `kind`, if present.
    pub fn redirect(&self, kind: RedirectKind) -> Option<&str> {
        match kind {
            RedirectKind::Input => self.input.as_deref(),
            RedirectKind::Output => self.output.as_deref(),
        }
    }
}

/// A command tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// A leaf command.
    Simple(SimpleCommand),
    /// `left | right`
    Pipe {
        left: Box<Command>,
        right: Box<Command>,
    },
    /// `left && right`
    And {
        left: Box<Command>,
        right: Box<Command>,
    },
    /// `left || right`
    Or {
        left: Box<Command>,
        right: Box<Command>,
    },
    /// `left ; right`
    Sequence {
        left: Box<Command>,
        right: Box<Command>,
    },
    /// `( body )`
    Subshell { body: Box<Command> },
}

impl Command {
    /// Join two commands under `op`.
    pub fn binary(op: Operator, left: Command, right: Command) -> Command {
        let left = Box::new(left);
        let right = Box::new(right);
        match op {
            Operator::Pipe => Command::Pipe { left, right },
            Operator::And => Command::And { left, right },
            Operator::Or => Command::Or { left, right },
            Operator::Sequence => Command::Sequence { left, right },
        }
    }

    /// Wrap a command list in a subshell.
    pub fn subshell(body: Command) -> Command {
        Command::Subshell {
            body: Box::new(body),
        }
    }

    /// Shorthand for a simple command with no redirections.
    pub fn simple<I, S>(words: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Command::Simple(SimpleCommand::new(words))
    }

    /// The operator of a binary node, `None` for leaves and subshells.
    pub fn operator(&self) -> Option<Operator> {
        self.as_binary().map(|(op, _, _)| op)
    }

    /// Split a binary node into its operator and children.
    pub fn as_binary(&self) -> Option<(Operator, &Command, &Command)> {
        match self {
            Command::Pipe { left, right } => Some((Operator::Pipe, left, right)),
            Command::And { left, right } => Some((Operator::And, left, right)),
            Command::Or { left, right } => Some((Operator::Or, left, right)),
            Command::Sequence { left, right } => Some((Operator::Sequence, left, right)),
            Command::Simple(_) | Command::Subshell { .. } => None,
        }
    }

    /// The simple command, if this is a leaf.
    pub fn as_simple(&self) -> Option<&SimpleCommand> {
        match self {
            Command::Simple(cmd) => Some(cmd),
            _ => None,
        }
    }
}

impl From<SimpleCommand> for Command {
    fn from(cmd: SimpleCommand) -> Self {
        Command::Simple(cmd)
    }
}

/// Newline-joined scripts produce `Sequence` chains as deep as the script is
/// long, so children are torn down from a worklist instead of recursively.
impl Drop for Command {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.detach_children(&mut pending);
        }
    }
}

impl Command {
    /// Move every child onto `out`, leaving empty leaves behind.
    fn detach_children(&mut self, out: &mut Vec<Command>) {
        let hollow = || Command::Simple(SimpleCommand::new(Vec::<String>::new()));
        match self {
            Command::Simple(_) => {}
            Command::Subshell { body } => out.push(std::mem::replace(&mut **body, hollow())),
            Command::Pipe { left, right }
            | Command::And { left, right }
            | Command::Or { left, right }
            | Command::Sequence { left, right } => {
                out.push(std::mem::replace(&mut **left, hollow()));
                out.push(std::mem::replace(&mut **right, hollow()));
            }
        }
    }
}
