//! Top-level screen rules.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Captures;

use crate::engine::{Action, Directive, Rule, Scan, ScanError, apply};
use crate::model::{Dimensions, Screen, ScreenDimensions};
use crate::rule;
use crate::rules::helpers::{end_of, group, req_u32};
use crate::rules::output::{OUTPUT_RULES, OutputMap};

pub(crate) type ScreenMap = BTreeMap<u32, Screen>;

/// The whole-document rule list: one rule matching `Screen N:` headers.
pub(crate) static SCREEN_RULES: Lazy<Vec<Rule<ScreenMap>>> = Lazy::new(|| {
    vec![rule! {
        name: "screen header",
        pattern: r"Screen[^\S\n]*(?P<number>\d+):[^\S\n]*\n?",
        handler: screen,
    }]
});

/// The extent entries on the screen header line, e.g.
/// `minimum 8 x 8, current 1920 x 1080, maximum 16384 x 16384`.
static EXTENT_RULES: Lazy<Vec<Rule<ScreenDimensions>>> = Lazy::new(|| {
    vec![rule! {
        name: "screen extent entry",
        pattern: r"(?P<kind>minimum|current|maximum)[^\S\n]+(?P<width>\d+)[^\S\n]*x[^\S\n]*(?P<height>\d+)[^\S\n]*(?:,[^\S\n]*|\n)?",
        handler: extent,
    }]
});

fn screen(scan: &mut Scan<'_, ScreenMap>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    let number = req_u32(caps, "number")?;
    let mut screen = Screen::new(number);

    let mut extents = Scan::new(scan.input, end_of(caps), ScreenDimensions::default());
    apply(&mut extents, &EXTENT_RULES)?;
    screen.dimensions = Some(extents.data);

    let mut outputs = Scan::new(scan.input, extents.pos, OutputMap::new());
    apply(&mut outputs, &OUTPUT_RULES)?;
    screen.outputs = outputs.data;

    scan.pos = outputs.pos;
    scan.data.insert(number, screen);
    Ok(Directive::Hold(Some(Action::Again)))
}

fn extent(scan: &mut Scan<'_, ScreenDimensions>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    let dim = Dimensions::new(req_u32(caps, "width")?, req_u32(caps, "height")?);
    match group(caps, "kind")? {
        "minimum" => scan.data.minimum = Some(dim),
        "current" => scan.data.current = Some(dim),
        _ => scan.data.maximum = Some(dim),
    }
    Ok(Directive::Act(Action::Again))
}
