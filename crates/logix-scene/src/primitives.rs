//! Display-list primitives emitted by the scene renderer

use serde::{Deserialize, Serialize};

use logix_types::{Point, Rgba};

/// Dash pattern for an animated or static dashed line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    /// Length of each dash, logical units
    pub dash: f32,
    /// Gap between dashes, logical units
    pub gap: f32,
    /// Phase offset; shifting this over time creates the flow effect
    pub phase: f32,
}

/// Stroke parameters for an outlined circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeSpec {
    pub width: f32,
    pub color: Rgba,
}

/// One drawing command in logical surface coordinates
///
/// Commands are painted in list order; each overwrites pixels beneath it only
/// where it draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DrawCmd {
    Rect {
        min: Point,
        width: f32,
        height: f32,
        color: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Rgba,
    },
    Polyline {
        points: Vec<Point>,
        width: f32,
        color: Rgba,
        #[serde(default)]
        dash: Option<DashPattern>,
    },
    Circle {
        center: Point,
        radius: f32,
        #[serde(default)]
        fill: Option<Rgba>,
        #[serde(default)]
        stroke: Option<StrokeSpec>,
    },
}
