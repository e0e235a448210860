//! One output/connector.

use super::geometry::{Border, Dimensions, Geometry};
use super::mode::Mode;
use super::properties::OutputProperties;
use bitflags::bitflags;

/// Connection state of an output. The report's third state,
/// `unknown connection`, is modeled as `Option::<Connection>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Connected,
    Disconnected,
}

/// Output rotation. Discriminants are the RandR rotation bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Rotation {
    Rotate0 = 1,
    Rotate90 = 2,
    Rotate180 = 4,
    Rotate270 = 8,
}

bitflags! {
    /// Output reflection axes. Bit values are the RandR reflection bits;
    /// `empty()` is the report's `none`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Reflection: u8 {
        const X = 16;
        const Y = 32;
    }
}

/// One output block of the report: the header line, the physical-size line,
/// the property lines, and the mode list.
///
/// `rotation`/`reflection` are `None` when the report printed
/// `invalid rotation`/`invalid reflection`; a header that simply omits them
/// gets the defaults (`Rotate0`, no reflection).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Output {
    pub name: String,
    pub connection: Option<Connection>,
    pub primary: bool,
    pub geometry: Option<Geometry>,
    /// Hex id of the active mode, e.g. the `0x47` of `(0x47)`.
    pub mode: Option<u32>,
    pub rotation: Option<Rotation>,
    pub reflection: Option<Reflection>,
    pub supported_rotations: Option<Vec<Rotation>>,
    pub supported_reflections: Option<Vec<Reflection>>,
    /// Physical size in millimeters.
    pub dimensions_mm: Option<Dimensions>,
    pub panning: Option<Geometry>,
    pub tracking: Option<Geometry>,
    pub border: Option<Border>,
    pub properties: Option<OutputProperties>,
    /// Modes in report order.
    pub modes: Vec<Mode>,
}

impl Output {
    pub fn new(name: &str) -> Self {
        Output { name: name.to_string(), ..Output::default() }
    }
}
