//! Output-block rules: the header line, the parenthesized supported
//! rotation/reflection list, and the physical-size line.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Captures;

use crate::engine::{Action, Directive, Rule, Scan, ScanError, apply};
use crate::model::{
    Border, Connection, Dimensions, Geometry, Offset, Output, OutputProperties, Reflection, Rotation,
};
use crate::rule;
use crate::rules::helpers::{end_of, group, req_hex_u32, req_u32};
use crate::rules::mappings::{REFLECTIONS, ROTATIONS, SUPPORTED_REFLECTIONS};
use crate::rules::modes::MODE_RULES;
use crate::rules::properties::PROPERTY_RULES;

pub(crate) type OutputMap = BTreeMap<String, Output>;

/// One rule matching an output header line, e.g.
/// `DVI-I-1 connected primary 1920x1080+0+0 (0x47) normal`.
///
/// The inline geometry/mode/rotation/reflection clause is optional as a
/// whole and piecewise.
pub(crate) static OUTPUT_RULES: Lazy<Vec<Rule<OutputMap>>> = Lazy::new(|| {
    vec![rule! {
        name: "output header",
        pattern: r"(?x)
            (?P<name>\S+)
            [^\S\n]+(?P<connection>connected|disconnected|unknown\ connection)
            (?:[^\S\n]+(?P<primary>primary))?
            (?:
                [^\S\n]+(?P<geometry>(?P<width>\d+)x(?P<height>\d+)\+(?P<x>\d+)\+(?P<y>\d+))
                (?:[^\S\n]+\((?P<mode>0x[0-9A-Fa-f]+)\))?
                (?:
                    [^\S\n]+(?P<rotation>normal|left|inverted|right|invalid\ rotation)
                    (?:[^\S\n]+(?P<reflection>none|X\ axis|Y\ axis|X\ and\ Y\ axis|invalid\ reflection))?
                )?
            )?
            [^\S\n]*\n?",
        handler: output,
    }]
});

/// Tokens of the `(normal left inverted right x axis y axis)` list; the
/// closing paren rides on the last token and signals `Stop`.
static SUPPORTED_ROTATION_RULES: Lazy<Vec<Rule<Vec<Rotation>>>> = Lazy::new(|| {
    vec![rule! {
        name: "supported rotation",
        pattern: r"(?P<rotation>normal|left|inverted|right)(?:[^\S\n]+|(?P<end>\)[^\S\n]*\n?))",
        handler: supported_rotation,
    }]
});

static SUPPORTED_REFLECTION_RULES: Lazy<Vec<Rule<Vec<Reflection>>>> = Lazy::new(|| {
    vec![rule! {
        name: "supported reflection",
        pattern: r"(?P<reflection>x axis|y axis)(?:[^\S\n]+|(?P<end>\)[^\S\n]*\n?))",
        handler: supported_reflection,
    }]
});

/// The second header line: physical size plus the optional
/// panning/tracking/border clauses. Terminal for its sub-scope.
static PHYSICAL_RULES: Lazy<Vec<Rule<Output>>> = Lazy::new(|| {
    vec![rule! {
        name: "output physical size",
        pattern: r"(?x)
            (?P<width_mm>\d+)mm[^\S\n]*x[^\S\n]*(?P<height_mm>\d+)mm
            (?:[^\S\n]+panning[^\S\n]+(?P<pan_width>\d+)x(?P<pan_height>\d+)\+(?P<pan_left>\d+)\+(?P<pan_top>\d+))?
            (?:[^\S\n]+tracking[^\S\n]+(?P<track_width>\d+)x(?P<track_height>\d+)\+(?P<track_left>\d+)\+(?P<track_top>\d+))?
            (?:[^\S\n]+border[^\S\n]+(?P<border_left>\d+)/(?P<border_top>\d+)/(?P<border_right>\d+)/(?P<border_bottom>\d+))?
            [^\S\n]*\n?",
        handler: physical,
    }]
});

fn output(scan: &mut Scan<'_, OutputMap>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    let mut output = Output::new(group(caps, "name")?);

    output.connection = match group(caps, "connection")? {
        "connected" => Some(Connection::Connected),
        "disconnected" => Some(Connection::Disconnected),
        // "unknown connection"
        _ => None,
    };
    output.primary = caps.name("primary").is_some();

    if caps.name("geometry").is_some() {
        output.geometry = Some(Geometry::new(
            Dimensions::new(req_u32(caps, "width")?, req_u32(caps, "height")?),
            Offset::new(req_u32(caps, "x")?, req_u32(caps, "y")?),
        ));
    }
    if caps.name("mode").is_some() {
        output.mode = Some(req_hex_u32(caps, "mode")?);
    }
    output.rotation = match caps.name("rotation") {
        Some(m) => ROTATIONS.get(m.as_str()).copied().flatten(),
        None => Some(Rotation::Rotate0),
    };
    output.reflection = match caps.name("reflection") {
        Some(m) => REFLECTIONS.get(m.as_str()).copied().flatten(),
        None => Some(Reflection::empty()),
    };

    let mut pos = end_of(caps);
    if scan.input[pos..].starts_with('(') {
        pos += 1;

        let mut rotations = Scan::new(scan.input, pos, Vec::new());
        apply(&mut rotations, &SUPPORTED_ROTATION_RULES)?;
        output.supported_rotations = Some(rotations.data);

        let mut reflections = Scan::new(scan.input, rotations.pos, Vec::new());
        apply(&mut reflections, &SUPPORTED_REFLECTION_RULES)?;
        output.supported_reflections = Some(reflections.data);
        pos = reflections.pos;
    }

    let mut sized = Scan::new(scan.input, pos, output);
    apply(&mut sized, &PHYSICAL_RULES)?;
    let mut output = sized.data;

    let mut properties = Scan::new(scan.input, sized.pos, OutputProperties::default());
    apply(&mut properties, &PROPERTY_RULES)?;
    output.properties = Some(properties.data);

    let mut modes = Scan::new(scan.input, properties.pos, Vec::new());
    apply(&mut modes, &MODE_RULES)?;
    output.modes = modes.data;

    scan.pos = modes.pos;
    scan.data.insert(output.name.clone(), output);
    Ok(Directive::Hold(Some(Action::Again)))
}

fn supported_rotation(scan: &mut Scan<'_, Vec<Rotation>>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    if let Some(rotation) = ROTATIONS.get(group(caps, "rotation")?).copied().flatten() {
        scan.data.push(rotation);
    }
    let next = if caps.name("end").is_some() { Action::Stop } else { Action::Again };
    Ok(Directive::Act(next))
}

fn supported_reflection(scan: &mut Scan<'_, Vec<Reflection>>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    if let Some(reflection) = SUPPORTED_REFLECTIONS.get(group(caps, "reflection")?).copied() {
        scan.data.push(reflection);
    }
    let next = if caps.name("end").is_some() { Action::Stop } else { Action::Again };
    Ok(Directive::Act(next))
}

fn physical(scan: &mut Scan<'_, Output>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.dimensions_mm =
        Some(Dimensions::new(req_u32(caps, "width_mm")?, req_u32(caps, "height_mm")?));

    if caps.name("pan_width").is_some() {
        scan.data.panning = Some(Geometry::new(
            Dimensions::new(req_u32(caps, "pan_width")?, req_u32(caps, "pan_height")?),
            Offset::new(req_u32(caps, "pan_left")?, req_u32(caps, "pan_top")?),
        ));
    }
    if caps.name("track_width").is_some() {
        scan.data.tracking = Some(Geometry::new(
            Dimensions::new(req_u32(caps, "track_width")?, req_u32(caps, "track_height")?),
            Offset::new(req_u32(caps, "track_left")?, req_u32(caps, "track_top")?),
        ));
    }
    if caps.name("border_left").is_some() {
        scan.data.border = Some(Border::new(
            req_u32(caps, "border_left")?,
            req_u32(caps, "border_top")?,
            req_u32(caps, "border_right")?,
            req_u32(caps, "border_bottom")?,
        ));
    }
    Ok(Directive::Act(Action::Stop))
}
