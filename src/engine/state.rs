//! Cursor/state for one level of rule application.

use regex::{Captures, Regex};

/// Control action governing the engine's next step.
///
/// See the module docs on `crate::engine` for the loop semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reset to the first rule and rescan the whole list.
    Restart,
    /// Try the next rule in the current pass.
    Continue,
    /// Terminate this `apply` call and return to the caller.
    Stop,
    /// Retry the rule that just ran (greedy repetition).
    Again,
}

/// What a handler tells the engine to do after a match.
///
/// The cursor normally advances past the matched span; a handler that ran
/// nested sub-scans has already moved the cursor itself and returns
/// [`Directive::Hold`] so the engine does not advance it a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Take the scan's default action; advance the cursor to the match end.
    Default,
    /// Take the given action; advance the cursor to the match end.
    Act(Action),
    /// Leave the cursor where the handler put it. `None` means take the
    /// scan's default action.
    Hold(Option<Action>),
}

/// The engine's per-level state: the source text, a byte cursor into it, and
/// the extraction target the active rule list is filling in.
///
/// `pos` only moves forward within one `apply` call, but a nested scan is
/// routinely seeded from a parent cursor and handed back.
#[derive(Debug)]
pub struct Scan<'a, T> {
    /// The full report text. Shared by every nesting level.
    pub input: &'a str,
    /// Current byte offset. Rule patterns match starting exactly here.
    pub pos: usize,
    /// The object the active rule list is populating.
    pub data: T,
    /// Action taken after a handler that returns [`Directive::Default`]
    /// (or `Hold(None)`).
    pub default_action: Action,
    /// Action taken when an `Again` retry fails to match. Must not itself be
    /// `Again`; [`apply`](crate::engine::apply) rejects that configuration
    /// before matching begins.
    pub again_fallback: Action,
}

impl<'a, T> Scan<'a, T> {
    /// Create a scan over `input` starting at byte `pos`, filling `data`.
    ///
    /// The default action is `Restart` (rescan every sibling rule after each
    /// match) and the again-fallback is `Continue`, matching what nearly
    /// every rule list wants.
    pub fn new(input: &'a str, pos: usize, data: T) -> Self {
        Scan { input, pos, data, default_action: Action::Restart, again_fallback: Action::Continue }
    }

    /// Override the default action.
    pub fn with_default_action(mut self, action: Action) -> Self {
        self.default_action = action;
        self
    }

    /// Override the action taken when an `Again` retry does not match.
    pub fn with_again_fallback(mut self, action: Action) -> Self {
        self.again_fallback = action;
        self
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Match `pattern` anchored exactly at the cursor.
    ///
    /// The regex crate has no match-at primitive, so this searches from the
    /// cursor and discards a hit that starts any later.
    pub fn captures_here(&self, pattern: &Regex) -> Option<Captures<'a>> {
        pattern
            .captures_at(self.input, self.pos)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == self.pos))
    }

    /// True when the whole input has been consumed.
    pub fn exhausted(&self) -> bool {
        self.pos == self.input.len()
    }
}
