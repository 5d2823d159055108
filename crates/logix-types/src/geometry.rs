//! Map geometry primitives shared by the dataset and the scene renderer
//!
//! All coordinates live in the fixed 1000x600 logical surface of the map.

use serde::{Deserialize, Serialize};

/// Width of the logical map surface
pub const SURFACE_WIDTH: f32 = 1000.0;
/// Height of the logical map surface
pub const SURFACE_HEIGHT: f32 = 600.0;

/// One point in logical map units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Plain RGBA color carried by the dataset and the display list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a replaced alpha channel
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// An immutable street segment of the city grid
///
/// Only perfectly horizontal or vertical segments are supported; the renderer
/// draws curb lines for those two orientations and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Street {
    pub start: Point,
    pub end: Point,
    pub width: f32,
    pub color: Rgba,
    #[serde(default)]
    pub name: Option<String>,
}

impl Street {
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}
