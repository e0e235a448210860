//! The concrete grammar for `xrandr --verbose` reports.
//!
//! One module per nesting level of the report, mirroring how the engine is
//! invoked recursively:
//!
//! ```text
//! document ── screen.rs ── screen header, extent entries
//!                │
//!                └─ output.rs ── output header, supported rotation/reflection
//!                      │         tokens, physical-size line
//!                      ├─ properties.rs ── well-known property lines, the
//!                      │                   open-ended fallback, and its
//!                      │                   range:/supported: trailers
//!                      └─ modes.rs ── compact and verbose mode lines
//! ```
//!
//! Rule lists are `Lazy` statics so their patterns compile once. Handlers
//! are free functions over a typed scan target; a handler that opens a
//! sub-scope (a screen's outputs, an output's properties) recursively calls
//! [`engine::apply`](crate::engine::apply) with a fresh scan and threads the
//! resulting cursor back.
//!
//! Indentation is significant and owned by each rule: property lines carry
//! their leading tab, compact mode lines their three-space indent, verbose
//! mode headers their two-space indent. Every rule consumes through its own
//! trailing newline, so the cursor sits at column 0 on every line boundary.

#[path = "rules/helpers.rs"]
mod helpers;
#[path = "rules/mappings.rs"]
mod mappings;
#[path = "rules/modes.rs"]
mod modes;
#[path = "rules/output.rs"]
mod output;
#[path = "rules/properties.rs"]
mod properties;
#[path = "rules/screen.rs"]
mod screen;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

pub(crate) use output::OutputMap;
pub(crate) use screen::{SCREEN_RULES, ScreenMap};
