//! The rule-application engine.
//!
//! This module is the *generic* half of the crate: it knows nothing about
//! screens or outputs, only about applying an ordered list of
//! (pattern, handler) rules against a cursor into one text buffer.
//!
//! ## How the parts work together
//!
//! ```text
//! report text ──┐
//!               │  Scan::new            (state.rs)
//!               └────────┬─────────────
//!                        │
//! rules ── &[Rule<T>] ───┼─ apply(scan, rules)   (apply.rs)
//!                        │    - match each rule anchored at scan.pos
//!                        │    - dispatch handler on match
//!                        │    - handler returns a Directive
//!                        │    - loop per the four control actions
//!                        v
//!                  match count + mutated Scan (pos advanced, data filled)
//! ```
//!
//! The loop is driven by four control actions (`Action`):
//!
//! - `Restart`: go back to the first rule and rescan. This is what lets a
//!   report's fields appear in any order: after every successful match the
//!   whole rule list gets another chance.
//! - `Continue`: try the next rule in the current pass.
//! - `Again`: retry the rule that just matched (greedy repetition, e.g.
//!   repeated mode lines).
//! - `Stop`: hand control back to the caller immediately.
//!
//! A full pass with no match terminates the loop; the caller inspects
//! `scan.pos` to decide whether enough input was consumed.
//!
//! Handlers may recurse: a handler builds a sub-`Scan` over the same input
//! with a sub-scoped target, calls [`apply`] with a nested rule list, and
//! threads the resulting position back by returning [`Directive::Hold`].
//!
//! ## Responsibilities by module
//!
//! - `state.rs`: the `Scan` cursor/state, the `Action` control values, and
//!   the `Directive` handler-return type.
//! - `apply.rs`: `Rule`, the handler signature, and the `apply` loop.
//! - `error.rs`: `ScanError`, the fail-fast error taxonomy (engine
//!   misconfiguration and capture conversion failures).
//!
//! ## Debugging
//!
//! Set `RANDRPARSE_DEBUG_RULES=1` to print a trace of every rule match.

#[path = "engine/apply.rs"]
mod apply;
#[path = "engine/error.rs"]
mod error;
#[path = "engine/state.rs"]
mod state;

pub use apply::{Handler, Rule, apply};
pub use error::ScanError;
pub use state::{Action, Directive, Scan};
