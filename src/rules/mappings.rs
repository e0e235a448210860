//! Token lookup tables handed to the rule handlers.
//!
//! Tokens that the report can print but the model cannot represent
//! (`invalid rotation`, `invalid reflection`, `unknown`) map to `None`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::{ModeFlags, Reflection, Rotation, SubpixelOrder};

/// Header-line rotation tokens.
pub(crate) static ROTATIONS: Lazy<HashMap<&'static str, Option<Rotation>>> = Lazy::new(|| {
    HashMap::from([
        ("normal", Some(Rotation::Rotate0)),
        ("left", Some(Rotation::Rotate90)),
        ("inverted", Some(Rotation::Rotate180)),
        ("right", Some(Rotation::Rotate270)),
        ("invalid rotation", None),
    ])
});

/// Header-line reflection tokens.
pub(crate) static REFLECTIONS: Lazy<HashMap<&'static str, Option<Reflection>>> = Lazy::new(|| {
    HashMap::from([
        ("none", Some(Reflection::empty())),
        ("X axis", Some(Reflection::X)),
        ("Y axis", Some(Reflection::Y)),
        ("X and Y axis", Some(Reflection::X.union(Reflection::Y))),
        ("invalid reflection", None),
    ])
});

/// Tokens of the parenthesized supported-reflection list (lowercase there,
/// unlike the header line).
pub(crate) static SUPPORTED_REFLECTIONS: Lazy<HashMap<&'static str, Reflection>> =
    Lazy::new(|| HashMap::from([("x axis", Reflection::X), ("y axis", Reflection::Y)]));

/// `Subpixel:` property tokens.
pub(crate) static SUBPIXEL_ORDERS: Lazy<HashMap<&'static str, Option<SubpixelOrder>>> = Lazy::new(|| {
    HashMap::from([
        ("horizontal rgb", Some(SubpixelOrder::HorizontalRgb)),
        ("horizontal bgr", Some(SubpixelOrder::HorizontalBgr)),
        ("vertical rgb", Some(SubpixelOrder::VerticalRgb)),
        ("vertical bgr", Some(SubpixelOrder::VerticalBgr)),
        ("no subpixels", Some(SubpixelOrder::NoSubpixels)),
        ("unknown", None),
    ])
});

/// Flag tokens on a verbose mode header line.
pub(crate) static MODE_FLAGS: Lazy<HashMap<&'static str, ModeFlags>> = Lazy::new(|| {
    HashMap::from([
        ("+HSync", ModeFlags::HSYNC_POSITIVE),
        ("-HSync", ModeFlags::HSYNC_NEGATIVE),
        ("+VSync", ModeFlags::VSYNC_POSITIVE),
        ("-VSync", ModeFlags::VSYNC_NEGATIVE),
        ("Interlace", ModeFlags::INTERLACE),
        ("DoubleScan", ModeFlags::DOUBLE_SCAN),
        ("CSync", ModeFlags::CSYNC),
        ("+CSync", ModeFlags::CSYNC_POSITIVE),
        ("-CSync", ModeFlags::CSYNC_NEGATIVE),
    ])
});
