//! The per-output property bag.

use super::geometry::{Border, Geometry, Transform};
use std::collections::BTreeMap;

/// Physical subpixel layout reported for an output. `unknown` is modeled as
/// `Option::<SubpixelOrder>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubpixelOrder {
    HorizontalRgb,
    HorizontalBgr,
    VerticalRgb,
    VerticalBgr,
    NoSubpixels,
}

/// A red/green/blue gamma triple.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gamma {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// A property the rule set does not special-case: its raw value text, plus
/// the optional `range:` pairs or `supported:` values trailer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtherProperty {
    pub value: String,
    /// `(low, high)` pairs from a `range:` trailer.
    pub range: Option<Vec<(String, String)>>,
    /// Discrete values from a `supported:` trailer.
    pub supported: Option<Vec<String>>,
}

/// The property block printed under an output header: the well-known fields
/// the rule set understands, plus the open-ended `other` map for everything
/// else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputProperties {
    pub identifier: Option<u32>,
    pub timestamp: Option<u64>,
    pub subpixel_order: Option<SubpixelOrder>,
    pub gamma: Option<Gamma>,
    pub brightness: Option<f64>,
    /// Names of outputs cloning this one.
    pub clones: Option<Vec<String>>,
    pub crtc: Option<u32>,
    /// Candidate CRTC indexes.
    pub crtcs: Option<Vec<u32>>,
    pub panning: Option<Geometry>,
    pub tracking: Option<Geometry>,
    pub border: Option<Border>,
    pub transform: Option<Transform>,
    pub edid: Option<Vec<u8>>,
    pub guid: Option<Vec<u8>>,
    pub other: Option<BTreeMap<String, OtherProperty>>,
}

impl OutputProperties {
    /// Insert into the open-ended map, creating it on first use.
    pub fn insert_other(&mut self, name: String, property: OtherProperty) {
        self.other.get_or_insert_with(BTreeMap::new).insert(name, property);
    }
}
