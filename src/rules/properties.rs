//! Rules for the tab-indented property block under an output header.
//!
//! Well-known properties each get a dedicated rule; the open-ended
//! fallback rule sits last so it only sees lines nothing else claimed.
//! `range:` and `supported:` trailers are recognized both inline after a
//! value and on their own indented follow-up line.

use once_cell::sync::Lazy;
use regex::Captures;

use crate::engine::{Action, Directive, Rule, Scan, ScanError, apply};
use crate::model::{Border, Dimensions, Gamma, Geometry, Offset, OtherProperty, OutputProperties, Transform};
use crate::rule;
use crate::rules::helpers::{end_of, group, hex_bytes, req_f64, req_hex_u32, req_u32, req_u64};
use crate::rules::mappings::SUBPIXEL_ORDERS;

pub(crate) static PROPERTY_RULES: Lazy<Vec<Rule<OutputProperties>>> = Lazy::new(|| {
    vec![
        rule! {
            name: "identifier property",
            pattern: r"\tIdentifier:[^\S\n]*(?P<identifier>0x[0-9A-Fa-f]+)[^\S\n]*\n?",
            handler: identifier,
        },
        rule! {
            name: "timestamp property",
            pattern: r"\tTimestamp:[^\S\n]*(?P<timestamp>\d+)[^\S\n]*\n?",
            handler: timestamp,
        },
        rule! {
            name: "subpixel property",
            pattern: r"\tSubpixel:[^\S\n]*(?P<subpixel>unknown|horizontal rgb|horizontal bgr|vertical rgb|vertical bgr|no subpixels)[^\S\n]*\n?",
            handler: subpixel,
        },
        rule! {
            name: "gamma property",
            pattern: r"\tGamma:[^\S\n]*(?P<red>\d*\.\d*(?:e-?\d+)?):(?P<green>\d*\.\d*(?:e-?\d+)?):(?P<blue>\d*\.\d*(?:e-?\d+)?)[^\S\n]*\n?",
            handler: gamma,
        },
        rule! {
            name: "brightness property",
            pattern: r"\tBrightness:[^\S\n]*(?P<brightness>-?\d*\.\d*)[^\S\n]*\n?",
            handler: brightness,
        },
        rule! {
            name: "clones property",
            pattern: r"\tClones:(?P<clones>[^\n]*)\n?",
            handler: clones,
        },
        rule! {
            name: "crtc property",
            pattern: r"\tCRTC:[^\S\n]*(?P<crtc>\d+)[^\S\n]*\n?",
            handler: crtc,
        },
        rule! {
            name: "crtcs property",
            pattern: r"\tCRTCs:[^\S\n]*(?P<crtcs>(?:\d+[^\S\n]*)*)\n?",
            handler: crtcs,
        },
        rule! {
            name: "panning property",
            pattern: r"\tPanning:[^\S\n]*(?P<width>\d+)x(?P<height>\d+)\+(?P<x>\d+)\+(?P<y>\d+)[^\S\n]*\n?",
            handler: panning,
        },
        rule! {
            name: "tracking property",
            pattern: r"\tTracking:[^\S\n]*(?P<width>\d+)x(?P<height>\d+)\+(?P<x>\d+)\+(?P<y>\d+)[^\S\n]*\n?",
            handler: tracking,
        },
        rule! {
            name: "border property",
            pattern: r"\tBorder:[^\S\n]*(?P<left>\d+)[^\S\n]+(?P<top>\d+)[^\S\n]+(?P<right>\d+)[^\S\n]+(?P<bottom>\d+)[^\S\n]*\n?(?:[^\S\n]+range:[^\n]*\n?)?",
            handler: border,
        },
        rule! {
            name: "transform property",
            pattern: r"\tTransform:[^\S\n]*(?P<matrix>(?:-?\d*\.\d*\s+){8}-?\d*\.\d*)[^\S\n]*\n?(?:[^\S\n]+filter:[^\S\n]*(?P<filter>[^\n]*)\n?)?",
            handler: transform,
        },
        rule! {
            name: "edid property",
            pattern: r"\tEDID:[^\S\n]*\n(?P<edid>(?:[^\S\n]+(?:[0-9A-Fa-f]{2})+(?:\n|$))+)",
            handler: edid,
        },
        rule! {
            name: "guid property",
            pattern: r"\tGUID:[^\S\n]*(?P<guid>\{[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}\})[^\S\n]*\n?",
            handler: guid,
        },
        // Must stay last: it claims any property line the rules above do not.
        rule! {
            name: "other property",
            pattern: r"\t(?P<name>[^:\n]+):[^\S\n]*(?P<value>[^\n]*?)(?:[^\S\n]+(?P<range>range:)|[^\S\n]+(?P<supported>supported:)|[^\S\n]*(?:\n|$)(?:[^\S\n]+(?P<range2>range:)|[^\S\n]+(?P<supported2>supported:))?)",
            handler: other,
        },
    ]
});

/// `(low, high)` pairs after a `range:` marker, comma separated; the final
/// pair owns the line's newline and stops the sub-scan.
static RANGE_RULES: Lazy<Vec<Rule<Vec<(String, String)>>>> = Lazy::new(|| {
    vec![rule! {
        name: "range pair",
        pattern: r"[^\S\n]*\((?P<low>[^,\n]+),[^\S\n]*(?P<high>[^)\n]+)\)(?:,|(?P<end>[^\S\n]*(?:\n|$)))",
        handler: range_pair,
    }]
});

/// Comma-separated values after a `supported:` marker. Values may contain
/// spaces, so the separators bound the capture rather than the token itself.
static SUPPORTED_VALUE_RULES: Lazy<Vec<Rule<Vec<String>>>> = Lazy::new(|| {
    vec![rule! {
        name: "supported value",
        pattern: r"[^\S\n]*(?P<value>[^\n,]+?)(?:,|(?P<end>[^\S\n]*(?:\n|$)))",
        handler: supported_value,
    }]
});

fn identifier(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.identifier = Some(req_hex_u32(caps, "identifier")?);
    Ok(Directive::Default)
}

fn timestamp(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.timestamp = Some(req_u64(caps, "timestamp")?);
    Ok(Directive::Default)
}

fn subpixel(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.subpixel_order = SUBPIXEL_ORDERS.get(group(caps, "subpixel")?).copied().flatten();
    Ok(Directive::Default)
}

fn gamma(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.gamma = Some(Gamma {
        red: req_f64(caps, "red")?,
        green: req_f64(caps, "green")?,
        blue: req_f64(caps, "blue")?,
    });
    Ok(Directive::Default)
}

fn brightness(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.brightness = Some(req_f64(caps, "brightness")?);
    Ok(Directive::Default)
}

fn clones(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    let names = group(caps, "clones")?.split_whitespace().map(String::from).collect();
    scan.data.clones = Some(names);
    Ok(Directive::Default)
}

fn crtc(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.crtc = Some(req_u32(caps, "crtc")?);
    Ok(Directive::Default)
}

fn crtcs(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    let indexes = group(caps, "crtcs")?
        .split_whitespace()
        .map(|token| token.parse().map_err(|source| ScanError::BadInt { name: "crtcs", source }))
        .collect::<Result<Vec<u32>, _>>()?;
    scan.data.crtcs = Some(indexes);
    Ok(Directive::Default)
}

fn geometry_from(caps: &Captures<'_>) -> Result<Geometry, ScanError> {
    Ok(Geometry::new(
        Dimensions::new(req_u32(caps, "width")?, req_u32(caps, "height")?),
        Offset::new(req_u32(caps, "x")?, req_u32(caps, "y")?),
    ))
}

fn panning(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.panning = Some(geometry_from(caps)?);
    Ok(Directive::Default)
}

fn tracking(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.tracking = Some(geometry_from(caps)?);
    Ok(Directive::Default)
}

fn border(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.border = Some(Border::new(
        req_u32(caps, "left")?,
        req_u32(caps, "top")?,
        req_u32(caps, "right")?,
        req_u32(caps, "bottom")?,
    ));
    Ok(Directive::Default)
}

fn transform(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    let mut matrix = [0.0f64; 9];
    for (slot, token) in matrix.iter_mut().zip(group(caps, "matrix")?.split_whitespace()) {
        *slot = token.parse().map_err(|source| ScanError::BadFloat { name: "matrix", source })?;
    }
    let filter = caps
        .name("filter")
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
        .map(String::from);
    scan.data.transform = Some(Transform { matrix, filter });
    Ok(Directive::Default)
}

fn edid(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.edid = Some(hex_bytes(group(caps, "edid")?, "edid")?);
    Ok(Directive::Default)
}

fn guid(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    let digits: String = group(caps, "guid")?.chars().filter(char::is_ascii_hexdigit).collect();
    scan.data.guid = Some(hex_bytes(&digits, "guid")?);
    Ok(Directive::Default)
}

fn other(scan: &mut Scan<'_, OutputProperties>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    let name = group(caps, "name")?.to_owned();
    let mut property =
        OtherProperty { value: group(caps, "value")?.to_owned(), ..OtherProperty::default() };

    let has_range = caps.name("range").is_some() || caps.name("range2").is_some();
    let has_supported = caps.name("supported").is_some() || caps.name("supported2").is_some();

    if has_range {
        let mut pairs = Scan::new(scan.input, end_of(caps), Vec::new());
        apply(&mut pairs, &RANGE_RULES)?;
        property.range = Some(pairs.data);
        scan.pos = pairs.pos;
    } else if has_supported {
        let mut values = Scan::new(scan.input, end_of(caps), Vec::new());
        apply(&mut values, &SUPPORTED_VALUE_RULES)?;
        property.supported = Some(values.data);
        scan.pos = values.pos;
    } else {
        scan.pos = end_of(caps);
    }

    scan.data.insert_other(name, property);
    Ok(Directive::Hold(None))
}

fn range_pair(scan: &mut Scan<'_, Vec<(String, String)>>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.push((group(caps, "low")?.trim().to_owned(), group(caps, "high")?.trim().to_owned()));
    let next = if caps.name("end").is_some() { Action::Stop } else { Action::Again };
    Ok(Directive::Act(next))
}

fn supported_value(scan: &mut Scan<'_, Vec<String>>, caps: &Captures<'_>) -> Result<Directive, ScanError> {
    scan.data.push(group(caps, "value")?.to_owned());
    let next = if caps.name("end").is_some() { Action::Stop } else { Action::Again };
    Ok(Directive::Act(next))
}
