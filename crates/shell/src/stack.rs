// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Growable LIFO stack used by the precedence parser.
//!
//! The parser keeps two of these: one for operands (partially built command
//! trees) and one for pending operators. The stack owns what it holds, so
//! anything still pushed when a parse aborts is dropped with it.

/// Initial capacity, enough for typical command lines without regrowth.
const INITIAL_CAPACITY: usize = 8;

/// A last-in-first-out stack with amortized-constant growth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Push an element onto the top.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top element, or `None` when empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Peek at the top element without removing it.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pop the top two elements as `(below, top)`.
    ///
    /// Returns `None` and leaves the stack untouched when fewer than two
    /// elements are present.
    pub fn pop_pair(&mut self) -> Option<(T, T)> {
        if self.items.len() < 2 {
            return None;
        }
        let top = self.items.pop()?;
        let below = self.items.pop()?;
        Some((below, top))
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod tests;
