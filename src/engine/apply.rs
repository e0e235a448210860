//! The four-action rule-application loop.
//!
//! `apply` drives an ordered rule list against a [`Scan`]: every pattern is
//! tried anchored at the current cursor, a match dispatches to the rule's
//! handler, and the handler's [`Directive`] decides what happens next. A
//! full pass over the list with no match ends the call.
//!
//! Rule authors get fine control over optional, repeated, and unordered
//! fields from just the four actions:
//!
//! - a field that may repeat returns `Again`;
//! - a field that is terminal for its sub-scope returns `Stop`;
//! - everything else falls through to the default (normally `Restart`), so
//!   sibling fields can appear in any order.

use super::error::ScanError;
use super::state::{Action, Directive, Scan};
use regex::{Captures, Regex};

/// Handler invoked when a rule's pattern matches at the cursor.
///
/// Handlers write extracted captures into `scan.data`, may recurse into
/// [`apply`] with a sub-scoped scan, and return the control directive for
/// the engine's next step.
pub type Handler<T> = fn(&mut Scan<'_, T>, &Captures<'_>) -> Result<Directive, ScanError>;

/// One extraction rule: a pattern and the handler that consumes its match.
pub struct Rule<T> {
    pub name: &'static str,
    /// Matched anchored at the scan cursor; a hit that starts later in the
    /// input counts as a miss (no skipping ahead).
    pub pattern: &'static Regex,
    pub handler: Handler<T>,
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("handler", &"<fn>")
            .finish()
    }
}

/// Apply `rules` to `scan` until a full pass produces no match, returning
/// the number of successful matches.
///
/// The cursor and target in `scan` are left wherever the rules took them;
/// the caller decides whether partial consumption is acceptable. Errors are
/// the fail-fast kind only ([`ScanError`]); running out of matching rules is
/// normal control flow.
pub fn apply<T>(scan: &mut Scan<'_, T>, rules: &[Rule<T>]) -> Result<usize, ScanError> {
    if scan.again_fallback == Action::Again {
        return Err(ScanError::AgainFallback);
    }

    let debug = std::env::var_os("RANDRPARSE_DEBUG_RULES").is_some();

    let mut matches = 0usize;
    let mut matched = false;
    let mut action = Action::Restart;
    let mut iter = rules.iter();
    let mut current: Option<&Rule<T>> = None;

    loop {
        match action {
            Action::Stop => break,
            Action::Restart => {
                matched = false;
                iter = rules.iter();
                action = Action::Continue;
                continue;
            }
            Action::Continue => match iter.next() {
                Some(rule) => current = Some(rule),
                None => {
                    if !matched {
                        break;
                    }
                    action = Action::Restart;
                    continue;
                }
            },
            // Again retries the rule that just ran; `current` is still set.
            Action::Again => {}
        }

        let Some(rule) = current else { break };

        let Some(caps) = scan.captures_here(rule.pattern) else {
            if action == Action::Again {
                action = scan.again_fallback;
            }
            continue;
        };

        matched = true;
        matches += 1;
        let end = caps.get(0).map_or(scan.pos, |m| m.end());

        if debug {
            eprintln!("[apply] rule `{}` matched {}..{}", rule.name, scan.pos, end);
        }

        match (rule.handler)(scan, &caps)? {
            Directive::Default => {
                action = scan.default_action;
                scan.pos = end;
            }
            Directive::Act(next) => {
                action = next;
                scan.pos = end;
            }
            Directive::Hold(next) => {
                action = next.unwrap_or(scan.default_action);
            }
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule;

    type Log = Vec<&'static str>;

    fn push_a(scan: &mut Scan<'_, Log>, _caps: &Captures<'_>) -> Result<Directive, ScanError> {
        scan.data.push("a");
        Ok(Directive::Default)
    }

    fn push_b(scan: &mut Scan<'_, Log>, _caps: &Captures<'_>) -> Result<Directive, ScanError> {
        scan.data.push("b");
        Ok(Directive::Default)
    }

    fn push_digit_again(scan: &mut Scan<'_, Log>, _caps: &Captures<'_>) -> Result<Directive, ScanError> {
        scan.data.push("d");
        Ok(Directive::Act(Action::Again))
    }

    fn stop_here(scan: &mut Scan<'_, Log>, _caps: &Captures<'_>) -> Result<Directive, ScanError> {
        scan.data.push("stop");
        Ok(Directive::Act(Action::Stop))
    }

    fn hold_at_end(scan: &mut Scan<'_, Log>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
        // Advance the cursor manually, then some more: simulates a handler
        // that ran a nested scan past its own match.
        let end = caps.get(0).map_or(scan.pos, |m| m.end());
        scan.pos = end + 1;
        Ok(Directive::Hold(Some(Action::Stop)))
    }

    fn unordered_rules() -> Vec<Rule<Log>> {
        vec![
            rule! { name: "alpha", pattern: r"a ?", handler: push_a },
            rule! { name: "beta", pattern: r"b ?", handler: push_b },
        ]
    }

    #[test]
    fn fields_match_in_any_order() {
        let rules = unordered_rules();

        let mut scan = Scan::new("b a a b", 0, Log::new());
        let n = apply(&mut scan, &rules).unwrap();
        assert_eq!(n, 4);
        assert_eq!(scan.data, vec!["b", "a", "a", "b"]);
        assert!(scan.exhausted());

        let mut scan = Scan::new("a b b a", 0, Log::new());
        let n = apply(&mut scan, &rules).unwrap();
        assert_eq!(n, 4);
        assert!(scan.exhausted());
    }

    #[test]
    fn stops_at_first_unrecognized_offset() {
        let rules = unordered_rules();
        let mut scan = Scan::new("a b ? a", 0, Log::new());
        let n = apply(&mut scan, &rules).unwrap();
        assert_eq!(n, 2);
        // Cursor points exactly at the first unrecognized character.
        assert_eq!(scan.pos, 4);
        assert!(!scan.exhausted());
    }

    #[test]
    fn matching_is_anchored_not_searching() {
        let rules = unordered_rules();
        let mut scan = Scan::new("  a", 0, Log::new());
        let n = apply(&mut scan, &rules).unwrap();
        assert_eq!(n, 0);
        assert_eq!(scan.pos, 0);
    }

    #[test]
    fn empty_rule_list_never_matches() {
        let rules: Vec<Rule<Log>> = Vec::new();
        let mut scan = Scan::new("a", 0, Log::new());
        assert_eq!(apply(&mut scan, &rules).unwrap(), 0);
    }

    #[test]
    fn again_consumes_repeats_greedily() {
        let rules = vec![rule! { name: "digit", pattern: r"\d", handler: push_digit_again }];
        let mut scan = Scan::new("123x", 0, Log::new());
        let n = apply(&mut scan, &rules).unwrap();
        assert_eq!(n, 3);
        assert_eq!(scan.pos, 3);
        assert_eq!(scan.data, vec!["d", "d", "d"]);
    }

    #[test]
    fn stop_terminates_immediately() {
        let rules = vec![
            rule! { name: "terminal", pattern: r"x", handler: stop_here },
            rule! { name: "alpha", pattern: r"a ?", handler: push_a },
        ];
        let mut scan = Scan::new("a x a", 0, Log::new());
        let n = apply(&mut scan, &rules).unwrap();
        // "a " then "x" stops; the trailing "a" is never scanned.
        assert_eq!(n, 2);
        assert_eq!(scan.data, vec!["a", "stop"]);
        assert_eq!(scan.pos, 3);
    }

    #[test]
    fn hold_keeps_the_handler_cursor() {
        let rules = vec![rule! { name: "hold", pattern: r"y", handler: hold_at_end }];
        let mut scan = Scan::new("yz", 0, Log::new());
        apply(&mut scan, &rules).unwrap();
        assert_eq!(scan.pos, 2);
    }

    #[test]
    fn again_fallback_must_not_be_again() {
        let rules = unordered_rules();
        let mut scan = Scan::new("a", 0, Log::new()).with_again_fallback(Action::Again);
        let err = apply(&mut scan, &rules).unwrap_err();
        assert!(matches!(err, ScanError::AgainFallback));
    }
}
