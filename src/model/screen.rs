//! One screen and its extent triple.

use super::geometry::Dimensions;
use super::output::Output;
use std::collections::BTreeMap;

/// The minimum/current/maximum extents reported on a screen header line.
///
/// The three entries may appear in any order in the report and each may be
/// missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenDimensions {
    pub minimum: Option<Dimensions>,
    pub current: Option<Dimensions>,
    pub maximum: Option<Dimensions>,
}

/// One screen: a numeric identifier, its extents, and its outputs keyed by
/// connector name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub number: u32,
    pub dimensions: Option<ScreenDimensions>,
    pub outputs: BTreeMap<String, Output>,
}

impl Screen {
    pub fn new(number: u32) -> Self {
        Screen { number, ..Screen::default() }
    }
}
