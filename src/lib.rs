//! Extraction of typed display state from `xrandr --verbose` style report
//! text.
//!
//! The crate is split into a small generic rule engine ([`engine`]), the
//! typed result tree ([`model`]), and the concrete grammar (`rules`, crate
//! private). [`parse_report`] ties them together:
//!
//! ```
//! let report = randrparse::parse_report(
//!     "Screen 0: minimum 8 x 8, current 1920 x 1080, maximum 16384 x 16384\n",
//! )?;
//! assert!(report.complete);
//! assert_eq!(report.screens[&0].dimensions.unwrap().current.unwrap().width, Some(1920));
//! # Ok::<(), randrparse::engine::ScanError>(())
//! ```
//!
//! Recognition stops at the first offset no rule matches; everything
//! extracted up to that point is returned along with the stop position, so
//! callers can tell a clean parse from a truncated one. Malformed values
//! inside recognized tokens are hard errors instead.
//!
//! Set `RANDRPARSE_DEBUG_RULES=1` to trace rule matches on stderr.

mod macros;

mod api;
pub mod engine;
pub mod model;
mod rules;

pub use api::{ConfigCategories, ParseReport, parse_report, parse_report_at};
