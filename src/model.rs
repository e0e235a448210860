//! The extracted display-topology tree.
//!
//! Pure data: screens own outputs, outputs own modes and a property bag.
//! Everything here is populated incrementally by the rule handlers in
//! `crate::rules` and never mutated by anything else; the only behavior is
//! the pair of derived timing accessors on [`Mode`].
//!
//! Every field that the report may omit is an `Option`; "unknown" is
//! represented by `None`, never by a zero or other sentinel value.
//!
//! ## Responsibilities by module
//!
//! - `geometry.rs`: the small shared value types (dimensions, offsets,
//!   rectangles, borders, transforms).
//! - `screen.rs`: one screen and its minimum/current/maximum extents.
//! - `output.rs`: one output/connector with its connection state, rotation,
//!   reflection, and owned substructures.
//! - `mode.rs`: one timing configuration, its flag bits, and the derived
//!   horizontal-clock/refresh accessors.
//! - `properties.rs`: the per-output property bag, well-known fields plus
//!   the open-ended name -> value map.

#[path = "model/geometry.rs"]
mod geometry;
#[path = "model/mode.rs"]
mod mode;
#[path = "model/output.rs"]
mod output;
#[path = "model/properties.rs"]
mod properties;
#[path = "model/screen.rs"]
mod screen;

pub use geometry::{Border, Dimensions, Geometry, Offset, Transform};
pub use mode::{Mode, ModeFlags};
pub use output::{Connection, Output, Reflection, Rotation};
pub use properties::{Gamma, OtherProperty, OutputProperties, SubpixelOrder};
pub use screen::{Screen, ScreenDimensions};
