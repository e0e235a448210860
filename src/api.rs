//! Public entry points: parse a whole report, and the category bitset a
//! configuration front-end uses to say which extracted fields it will act
//! on.

use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::engine::{Scan, ScanError, apply};
use crate::model::Screen;
use crate::rules::{SCREEN_RULES, ScreenMap};

/// Everything extracted from one report, plus how far extraction got.
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// Screens by number. Screen numbers ascend in report order, so key
    /// order matches source order.
    pub screens: BTreeMap<u32, Screen>,
    /// True when the whole input was consumed. A false value means the text
    /// at `consumed` matched no rule.
    pub complete: bool,
    /// Byte offset one past the last recognized token.
    pub consumed: usize,
}

/// Parse a full `xrandr --verbose` style report.
///
/// Extraction is strict about values but tolerant about extent: it stops at
/// the first offset no rule recognizes and reports that position instead of
/// erroring. An `Err` only means a recognized token refused to convert
/// (which indicates a malformed report or a rule-set bug).
pub fn parse_report(report: &str) -> Result<ParseReport, ScanError> {
    parse_report_at(report, 0)
}

/// Like [`parse_report`], but starting at byte offset `start`; useful when
/// the report is embedded in surrounding text.
pub fn parse_report_at(report: &str, start: usize) -> Result<ParseReport, ScanError> {
    let mut scan = Scan::new(report, start, ScreenMap::new());
    apply(&mut scan, &SCREEN_RULES)?;
    let complete = scan.exhausted();
    let consumed = scan.pos;
    Ok(ParseReport { screens: scan.data, complete, consumed })
}

bitflags! {
    /// Which categories of extracted state a configuration front-end should
    /// feed back to the display server. Purely an interface type: nothing in
    /// this crate invokes anything.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConfigCategories: u16 {
        const SCREEN_DIMENSIONS = 1;
        const SCREEN_PRIMARY_OUTPUT = 2;

        const OUTPUT_POSITION = 4;
        const OUTPUT_MODE = 8;
        const OUTPUT_ROTATION = 16;
        const OUTPUT_REFLECTION = 32;
        const OUTPUT_PANNING = 64;
        const OUTPUT_TRACKING = 128;
        const OUTPUT_BORDER = 256;

        const OUTPUT_PROPERTIES = 512;
        const UNKNOWN_OUTPUT_PROPERTIES = 1024;

        const SCREENS = Self::SCREEN_DIMENSIONS.bits() | Self::SCREEN_PRIMARY_OUTPUT.bits();
        const OUTPUTS_BASIC = Self::OUTPUT_POSITION.bits()
            | Self::OUTPUT_MODE.bits()
            | Self::OUTPUT_ROTATION.bits()
            | Self::OUTPUT_REFLECTION.bits()
            | Self::OUTPUT_PANNING.bits()
            | Self::OUTPUT_TRACKING.bits()
            | Self::OUTPUT_BORDER.bits();
        const OUTPUTS_ALL = Self::OUTPUTS_BASIC.bits()
            | Self::OUTPUT_PROPERTIES.bits()
            | Self::UNKNOWN_OUTPUT_PROPERTIES.bits();
        const ALL = Self::SCREENS.bits() | Self::OUTPUTS_ALL.bits();
    }
}
