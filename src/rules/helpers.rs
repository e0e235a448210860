//! Capture-group conversion helpers shared by the rule handlers.
//!
//! Hex-looking tokens (`0x`-prefixed ids, EDID/GUID blobs) parse as hex,
//! everything else as decimal or float per its unit suffix. A token that
//! refuses to convert aborts the parse call; no fallback value is
//! substituted.

use crate::engine::ScanError;
use regex::Captures;

/// Byte offset just past the whole match.
pub(crate) fn end_of(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(0, |m| m.end())
}

/// A named capture the pattern guarantees to be present.
pub(crate) fn group<'t>(caps: &Captures<'t>, name: &'static str) -> Result<&'t str, ScanError> {
    caps.name(name).map(|m| m.as_str()).ok_or(ScanError::MissingCapture { name })
}

pub(crate) fn req_u32(caps: &Captures<'_>, name: &'static str) -> Result<u32, ScanError> {
    group(caps, name)?.parse().map_err(|source| ScanError::BadInt { name, source })
}

pub(crate) fn req_u64(caps: &Captures<'_>, name: &'static str) -> Result<u64, ScanError> {
    group(caps, name)?.parse().map_err(|source| ScanError::BadInt { name, source })
}

pub(crate) fn req_f64(caps: &Captures<'_>, name: &'static str) -> Result<f64, ScanError> {
    group(caps, name)?.parse().map_err(|source| ScanError::BadFloat { name, source })
}

/// A `0x`-prefixed (or bare) hex integer, e.g. a mode id.
pub(crate) fn req_hex_u32(caps: &Captures<'_>, name: &'static str) -> Result<u32, ScanError> {
    let text = group(caps, name)?;
    let digits = text.strip_prefix("0x").unwrap_or(text);
    u32::from_str_radix(digits, 16).map_err(|source| ScanError::BadInt { name, source })
}

/// Decode a whitespace-interspersed hex dump (EDID blocks, GUIDs with the
/// braces/dashes already stripped) into raw bytes.
pub(crate) fn hex_bytes(text: &str, name: &'static str) -> Result<Vec<u8>, ScanError> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(ScanError::BadHexBlob { name });
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ScanError::BadHexBlob { name }))
        .collect()
}
