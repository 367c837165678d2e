// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visitor pattern for traversing command trees.

use super::{Command, Operator, RedirectKind, SimpleCommand};

/// Visitor trait for traversing a command tree.
///
/// [`AstVisitor::visit_command`] walks the whole tree in source order, left
/// child before right, from an explicit worklist. Tree depth therefore never
/// grows the call stack, which matters for long newline-joined scripts.
///
/// Interior nodes are reported through `enter_*`/`leave_*` pairs. Returning
/// `false` from an `enter_*` hook prunes that subtree; its `leave_*` hook is
/// then not called.
///
/// # Example: Find Command Names
///
/// ```
/// use cmdstream_shell::{AstVisitor, CommandStream, SimpleCommand};
///
/// struct CommandFinder(Vec<String>);
///
/// impl AstVisitor for CommandFinder {
///     fn visit_simple_command(&mut self, cmd: &SimpleCommand) {
///         if let Some(name) = cmd.name() {
///             self.0.push(name.to_string());
///         }
///     }
/// }
///
/// let mut stream = CommandStream::parse("cat file | (grep x && wc -l)")?;
/// let tree = stream.next().unwrap();
/// let mut finder = CommandFinder(Vec::new());
/// finder.visit_command(&tree);
/// assert_eq!(finder.0, vec!["cat", "grep", "wc"]);
/// # Ok::<(), cmdstream_shell::StreamError>(())
/// ```
pub trait AstVisitor {
    /// Walk `command` and everything below it.
    fn visit_command(&mut self, command: &Command) {
        walk(self, command);
    }

    /// Visit a simple command.
    fn visit_simple_command(&mut self, cmd: &SimpleCommand) {
        self.walk_simple_command(cmd);
    }

    /// Before the children of a binary node (`|`, `&&`, `||`, `;`).
    fn enter_binary(&mut self, _op: Operator) -> bool {
        true
    }

    /// After both children of a binary node.
    fn leave_binary(&mut self, _op: Operator) {}

    /// Before a subshell body.
    fn enter_subshell(&mut self) -> bool {
        true
    }

    /// After a subshell body.
    fn leave_subshell(&mut self) {}

    /// Visit a word of a simple command.
    fn visit_word(&mut self, _word: &str) {}

    /// Visit a redirection target.
    fn visit_redirect(&mut self, _kind: RedirectKind, _target: &str) {}

    /// Visit words, then input and output targets.
    fn walk_simple_command(&mut self, cmd: &SimpleCommand) {
        for word in &cmd.words {
            self.visit_word(word);
        }
        if let Some(input) = &cmd.input {
            self.visit_redirect(RedirectKind::Input, input);
        }
        if let Some(output) = &cmd.output {
            self.visit_redirect(RedirectKind::Output, output);
        }
    }
}

enum Step<'a> {
    Visit(&'a Command),
    LeaveBinary(Operator),
    LeaveSubshell,
}

fn walk<V: AstVisitor + ?Sized>(visitor: &mut V, root: &Command) {
    let mut steps = vec![Step::Visit(root)];
    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Command::Simple(cmd)) => visitor.visit_simple_command(cmd),
            Step::Visit(Command::Subshell { body }) => {
                if visitor.enter_subshell() {
                    steps.push(Step::LeaveSubshell);
                    steps.push(Step::Visit(body));
                }
            }
            Step::Visit(node) => {
                if let Some((op, left, right)) = node.as_binary() {
                    if visitor.enter_binary(op) {
                        steps.push(Step::LeaveBinary(op));
                        steps.push(Step::Visit(right));
                        steps.push(Step::Visit(left));
                    }
                }
            }
            Step::LeaveBinary(op) => visitor.leave_binary(op),
            Step::LeaveSubshell => visitor.leave_subshell(),
        }
    }
}
