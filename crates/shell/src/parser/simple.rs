// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simple commands: words plus `<` and `>` targets.

use tracing::warn;

use super::Parser;
use crate::ast::{RedirectKind, SimpleCommand};
use crate::parse_error::ParseError;

impl Parser<'_> {
    /// Parse a simple command at the cursor.
    ///
    /// Grammar: word+ with `< word` and `> word` allowed anywhere after the
    /// first word. Returns `Ok(None)` without consuming anything significant
    /// when no word starts here, so the caller can try a subshell instead.
    /// Stops on the first byte that is not a word, a space or a redirection.
    pub(super) fn parse_simple_command(&mut self) -> Result<Option<SimpleCommand>, ParseError> {
        self.cursor.skip_spaces();
        self.cursor.skip_comment();

        let mut words = Vec::new();
        let mut input = None;
        let mut output = None;
        let mut word = String::new();

        loop {
            if self.cursor.scan_word(&mut word) > 0 {
                words.push(std::mem::take(&mut word));
            }

            match self.cursor.peek() {
                Some(b' ') => self.cursor.skip_spaces(),
                Some(b'<') => {
                    let target = self.parse_redirect_target(RedirectKind::Input, words.is_empty())?;
                    set_target(&mut input, RedirectKind::Input, target);
                }
                Some(b'>') => {
                    let target =
                        self.parse_redirect_target(RedirectKind::Output, words.is_empty())?;
                    set_target(&mut output, RedirectKind::Output, target);
                }
                _ => break,
            }
        }

        if words.is_empty() {
            return Ok(None);
        }
        Ok(Some(SimpleCommand {
            words,
            input,
            output,
        }))
    }

    /// Consume `<`/`>` and the single word after it.
    fn parse_redirect_target(
        &mut self,
        kind: RedirectKind,
        before_command: bool,
    ) -> Result<String, ParseError> {
        if before_command {
            return Err(ParseError::RedirectionBeforeCommand {
                kind,
                span: self.cursor.span_here(),
            });
        }
        self.cursor.bump();

        let mut target = String::new();
        if self.cursor.scan_word(&mut target) == 0 {
            return Err(ParseError::MissingRedirectTarget {
                kind,
                span: self.cursor.span_here(),
            });
        }
        self.cursor.skip_spaces();
        Ok(target)
    }
}

/// Record a redirection target; a repeated redirection replaces the earlier one.
fn set_target(slot: &mut Option<String>, kind: RedirectKind, target: String) {
    if let Some(previous) = slot.replace(target) {
        warn!(
            %kind,
            previous = %previous,
            current = slot.as_deref().unwrap_or_default(),
            "redirection target overridden"
        );
    }
}
