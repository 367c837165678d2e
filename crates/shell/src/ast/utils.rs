// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Utility methods for querying command trees.

use super::{AstVisitor, Command, Operator, SimpleCommand};

impl Command {
    /// Count the simple commands in the tree, including inside subshells.
    ///
    /// ```
    /// use cmdstream_shell::CommandStream;
    ///
    /// let mut stream = CommandStream::parse("a | b && (c ; d)")?;
    /// assert_eq!(stream.next().unwrap().count_simple_commands(), 4);
    /// # Ok::<(), cmdstream_shell::StreamError>(())
    /// ```
    pub fn count_simple_commands(&self) -> usize {
        struct Counter(usize);
        impl AstVisitor for Counter {
            fn visit_simple_command(&mut self, _cmd: &SimpleCommand) {
                self.0 += 1;
            }
        }
        let mut counter = Counter(0);
        counter.visit_command(self);
        counter.0
    }

    /// Names of every simple command, in source order.
    pub fn command_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Command::Simple(cmd) => names.extend(cmd.name()),
                Command::Subshell { body } => pending.push(body),
                _ => {
                    if let Some((_, left, right)) = node.as_binary() {
                        pending.push(right);
                        pending.push(left);
                    }
                }
            }
        }
        names
    }

    /// Maximum subshell nesting depth; 0 when there are no subshells.
    ///
    /// ```
    /// use cmdstream_shell::CommandStream;
    ///
    /// let mut stream = CommandStream::parse("(a ; (b ; (c)))")?;
    /// assert_eq!(stream.next().unwrap().max_nesting_depth(), 3);
    /// # Ok::<(), cmdstream_shell::StreamError>(())
    /// ```
    pub fn max_nesting_depth(&self) -> usize {
        #[derive(Default)]
        struct DepthTracker {
            current: usize,
            max: usize,
        }
        impl AstVisitor for DepthTracker {
            fn enter_subshell(&mut self) -> bool {
                self.current += 1;
                self.max = self.max.max(self.current);
                true
            }
            fn leave_subshell(&mut self) {
                self.current -= 1;
            }
        }
        let mut tracker = DepthTracker::default();
        tracker.visit_command(self);
        tracker.max
    }

    /// Number of nodes on the longest root-to-leaf path; 1 for a leaf.
    ///
    /// Every operator and subshell adds a level, so `a\nb\nc` is 3 deep.
    pub fn depth(&self) -> usize {
        #[derive(Default)]
        struct Height {
            current: usize,
            max: usize,
        }
        impl AstVisitor for Height {
            fn visit_simple_command(&mut self, _cmd: &SimpleCommand) {
                self.max = self.max.max(self.current + 1);
            }
            fn enter_binary(&mut self, _op: Operator) -> bool {
                self.current += 1;
                true
            }
            fn leave_binary(&mut self, _op: Operator) {
                self.current -= 1;
            }
            fn enter_subshell(&mut self) -> bool {
                self.current += 1;
                true
            }
            fn leave_subshell(&mut self) {
                self.current -= 1;
            }
        }
        let mut height = Height::default();
        height.visit_command(self);
        height.max
    }
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
