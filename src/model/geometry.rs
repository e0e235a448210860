//! Shared small value types.

/// A width x height pair. Either side may be unknown independently: a
/// partially specified report line updates only the fields it carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Dimensions { width: Some(width), height: Some(height) }
    }
}

/// A +x+y position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: Option<u32>,
    pub y: Option<u32>,
}

impl Offset {
    pub fn new(x: u32, y: u32) -> Self {
        Offset { x: Some(x), y: Some(y) }
    }
}

/// A placed rectangle: dimensions plus offset, as in `1920x1080+0+0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometry {
    pub dimensions: Option<Dimensions>,
    pub offset: Option<Offset>,
}

impl Geometry {
    pub fn new(dimensions: Dimensions, offset: Offset) -> Self {
        Geometry { dimensions: Some(dimensions), offset: Some(offset) }
    }
}

/// A four-sided inset, as in `border 1/2/3/4`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Border {
    pub left: Option<u32>,
    pub top: Option<u32>,
    pub right: Option<u32>,
    pub bottom: Option<u32>,
}

impl Border {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Border { left: Some(left), top: Some(top), right: Some(right), bottom: Some(bottom) }
    }
}

/// The 3x3 output transform matrix plus the optional filter name printed
/// underneath it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transform {
    /// Row-major matrix coefficients.
    pub matrix: [f64; 9],
    pub filter: Option<String>,
}
