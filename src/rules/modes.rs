//! Mode-line rules, covering both report shapes: the compact table (three
//! spaces of indent, one line per size with a refresh-rate cell per mode)
//! and the verbose three-line form (two spaces of indent, full horizontal
//! and vertical timing groups).

use once_cell::sync::Lazy;
use regex::Captures;

use crate::engine::{Action, Directive, Rule, Scan, ScanError};
use crate::model::{Mode, ModeFlags};
use crate::rules::helpers::{end_of, group, req_f64, req_hex_u32, req_u32};
use crate::rules::mappings::MODE_FLAGS;
use crate::{regex, rule};

pub(crate) static MODE_RULES: Lazy<Vec<Rule<Vec<Mode>>>> = Lazy::new(|| {
    vec![
        rule! {
            name: "compact mode line",
            pattern: r" {3}(?P<name>(?P<width>\d+)x(?P<height>\d+)i?)[^\S\n]+",
            handler: compact,
        },
        rule! {
            name: "verbose mode block",
            pattern: r"(?x)
                \ \ (?P<name>\S+)
                [^\S\n]+\((?P<id>0x[0-9A-Fa-f]+)\)
                [^\S\n]+(?P<dotclock>\d*\.\d*)MHz
                (?P<flags>(?:[^\S\n]+(?:\+HSync|-HSync|\+VSync|-VSync|Interlace|DoubleScan|\+CSync|-CSync|CSync))*)
                (?:[^\S\n]+(?P<current>\*current))?
                (?:[^\S\n]+(?P<preferred>\+preferred))?
                [^\S\n]*\n
                [^\S\n]+h:\ width[^\S\n]+(?P<width>\d+)
                [^\S\n]+start[^\S\n]+(?P<h_sync_start>\d+)
                [^\S\n]+end[^\S\n]+(?P<h_sync_end>\d+)
                [^\S\n]+total[^\S\n]+(?P<h_total>\d+)
                [^\S\n]+skew[^\S\n]+(?P<h_skew>\d+)
                [^\S\n]+clock[^\S\n]+(?P<h_clock>\d*\.\d*)KHz
                [^\S\n]*\n
                [^\S\n]+v:\ height[^\S\n]+(?P<height>\d+)
                [^\S\n]+start[^\S\n]+(?P<v_sync_start>\d+)
                [^\S\n]+end[^\S\n]+(?P<v_sync_end>\d+)
                [^\S\n]+total[^\S\n]+(?P<v_total>\d+)
                [^\S\n]+clock[^\S\n]+(?P<refresh>\d*\.\d*)Hz
                [^\S\n]*\n?",
            handler: verbose,
        },
    ]
});

/// One refresh-rate cell of a compact line: the rate, a `*` or space for
/// "current", a `+` or space for "preferred".
fn compact(scan: &mut Scan<'_, Vec<Mode>>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    let name = group(caps, "name")?;
    let width = req_u32(caps, "width")?;
    let height = req_u32(caps, "height")?;

    scan.pos = end_of(caps);
    while let Some(cell) =
        scan.captures_here(regex!(r"\d*\.\d*(?P<current>[* ])(?P<preferred>[+ ])[^\S\n]*\n?"))
    {
        scan.data.push(Mode {
            name: Some(name.to_owned()),
            width: Some(width),
            height: Some(height),
            current: group(&cell, "current")? == "*",
            preferred: group(&cell, "preferred")? == "+",
            ..Mode::default()
        });
        scan.pos = end_of(&cell);
    }
    Ok(Directive::Hold(Some(Action::Again)))
}

fn verbose(scan: &mut Scan<'_, Vec<Mode>>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    let mut flags = ModeFlags::empty();
    for token in group(caps, "flags")?.split_whitespace() {
        if let Some(flag) = MODE_FLAGS.get(token) {
            flags |= *flag;
        }
    }

    scan.data.push(Mode {
        name: Some(group(caps, "name")?.to_owned()),
        id: Some(req_hex_u32(caps, "id")?),
        dotclock: Some(req_f64(caps, "dotclock")? * 1e6),
        flags: Some(flags),
        current: caps.name("current").is_some(),
        preferred: caps.name("preferred").is_some(),

        width: Some(req_u32(caps, "width")?),
        h_sync_start: Some(req_u32(caps, "h_sync_start")?),
        h_sync_end: Some(req_u32(caps, "h_sync_end")?),
        h_total: Some(req_u32(caps, "h_total")?),
        h_skew: Some(req_u32(caps, "h_skew")?),
        h_clock: Some(req_f64(caps, "h_clock")? * 1e3),

        height: Some(req_u32(caps, "height")?),
        v_sync_start: Some(req_u32(caps, "v_sync_start")?),
        v_sync_end: Some(req_u32(caps, "v_sync_end")?),
        v_total: Some(req_u32(caps, "v_total")?),
        refresh: Some(req_f64(caps, "refresh")?),
    });
    Ok(Directive::Act(Action::Again))
}
