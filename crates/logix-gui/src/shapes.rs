//! Translation of scene draw commands into egui shapes
//!
//! The renderer emits commands in logical 1000x600 coordinates; this module
//! scales them into the widget rect allocated for the map. It contains no
//! drawing decisions of its own, only the coordinate transform.

use eframe::egui::{CornerRadius, Pos2, Rect, Shape, Stroke, Vec2};

use logix_scene::DrawCmd;
use logix_types::{Point, SURFACE_HEIGHT, SURFACE_WIDTH};

use crate::theme::color32;

/// Maps logical surface coordinates onto a screen rect
#[derive(Debug, Clone, Copy)]
pub struct MapTransform {
    origin: Pos2,
    scale_x: f32,
    scale_y: f32,
}

impl MapTransform {
    pub fn new(rect: Rect) -> Self {
        Self {
            origin: rect.min,
            scale_x: rect.width() / SURFACE_WIDTH,
            scale_y: rect.height() / SURFACE_HEIGHT,
        }
    }

    pub fn to_screen(&self, p: Point) -> Pos2 {
        self.origin + Vec2::new(p.x * self.scale_x, p.y * self.scale_y)
    }

    /// Uniform scale for radii, stroke widths and dash lengths
    pub fn scale_len(&self, len: f32) -> f32 {
        len * self.scale_x.min(self.scale_y)
    }
}

/// Expand one draw command into egui shapes
pub fn command_shapes(cmd: &DrawCmd, t: &MapTransform) -> Vec<Shape> {
    match cmd {
        DrawCmd::Rect {
            min,
            width,
            height,
            color,
        } => {
            let rect = Rect::from_min_size(
                t.to_screen(*min),
                Vec2::new(width * t.scale_x, height * t.scale_y),
            );
            vec![Shape::rect_filled(rect, CornerRadius::ZERO, color32(*color))]
        }
        DrawCmd::Line {
            from,
            to,
            width,
            color,
        } => {
            let stroke = Stroke::new(t.scale_len(*width), color32(*color));
            vec![Shape::line_segment(
                [t.to_screen(*from), t.to_screen(*to)],
                stroke,
            )]
        }
        DrawCmd::Polyline {
            points,
            width,
            color,
            dash,
        } => {
            let screen: Vec<Pos2> = points.iter().map(|&p| t.to_screen(p)).collect();
            let stroke = Stroke::new(t.scale_len(*width), color32(*color));
            match dash {
                Some(pattern) => {
                    // The animated phase grows without bound; epaint walks the
                    // dash pattern from the raw offset, so fold it into one
                    // period to keep the segment count flat over a session.
                    let period = pattern.dash + pattern.gap;
                    let phase = pattern.phase.rem_euclid(period);
                    Shape::dashed_line_with_offset(
                        &screen,
                        stroke,
                        &[t.scale_len(pattern.dash)],
                        &[t.scale_len(pattern.gap)],
                        t.scale_len(phase),
                    )
                }
                None => vec![Shape::line(screen, stroke)],
            }
        }
        DrawCmd::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let pos = t.to_screen(*center);
            let r = t.scale_len(*radius);
            let mut shapes = Vec::with_capacity(2);
            if let Some(fill) = fill {
                shapes.push(Shape::circle_filled(pos, r, color32(*fill)));
            }
            if let Some(spec) = stroke {
                shapes.push(Shape::circle_stroke(
                    pos,
                    r,
                    Stroke::new(t.scale_len(spec.width), color32(spec.color)),
                ));
            }
            shapes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logix_scene::{AnimationTime, DashPattern};
    use logix_types::Rgba;

    fn transform() -> MapTransform {
        // Half-size widget: 500x300 for the 1000x600 surface
        MapTransform::new(Rect::from_min_size(
            Pos2::new(10.0, 20.0),
            Vec2::new(500.0, 300.0),
        ))
    }

    #[test]
    fn test_point_scaling() {
        let t = transform();
        let p = t.to_screen(Point::new(1000.0, 600.0));
        assert_eq!(p, Pos2::new(510.0, 320.0));
        assert_eq!(t.to_screen(Point::new(0.0, 0.0)), Pos2::new(10.0, 20.0));
    }

    #[test]
    fn test_lengths_use_uniform_scale() {
        let t = transform();
        assert_eq!(t.scale_len(10.0), 5.0);
    }

    #[test]
    fn test_circle_emits_fill_and_stroke() {
        let t = transform();
        let cmd = DrawCmd::Circle {
            center: Point::new(600.0, 250.0),
            radius: 12.0,
            fill: Some(Rgba::rgb(0x10, 0xb9, 0x81)),
            stroke: Some(logix_scene::StrokeSpec {
                width: 3.0,
                color: Rgba::rgb(0xff, 0xff, 0xff),
            }),
        };
        assert_eq!(command_shapes(&cmd, &t).len(), 2);
    }

    #[test]
    fn test_dash_count_is_stable_over_long_sessions() {
        let t = transform();
        let shapes_at = |phase: f32| {
            let cmd = DrawCmd::Polyline {
                points: vec![Point::new(100.0, 150.0), Point::new(700.0, 150.0)],
                width: 4.0,
                color: Rgba::rgb(0x06, 0xb6, 0xd4),
                dash: Some(DashPattern {
                    dash: 18.0,
                    gap: 12.0,
                    phase,
                }),
            };
            command_shapes(&cmd, &t).len()
        };
        let early = shapes_at(AnimationTime(1).dash_offset());
        // ten minutes later at sixty ticks per second, same point in the
        // dash cycle (offset advances 2 per tick against a period of 30)
        let late = shapes_at(AnimationTime(36_001).dash_offset());
        assert_eq!(early, late, "dash segment count must not grow with uptime");
        // an arbitrary point in the cycle may shift the count by one boundary
        // segment at most
        let mid_cycle = shapes_at(AnimationTime(36_000).dash_offset());
        assert!(mid_cycle <= early + 1, "count {} grew past {}", mid_cycle, early);
    }

    #[test]
    fn test_dashed_polyline_produces_dashes() {
        let t = transform();
        let cmd = DrawCmd::Polyline {
            points: vec![Point::new(0.0, 0.0), Point::new(1000.0, 0.0)],
            width: 4.0,
            color: Rgba::rgb(0x06, 0xb6, 0xd4),
            dash: Some(DashPattern {
                dash: 18.0,
                gap: 12.0,
                phase: 0.0,
            }),
        };
        let shapes = command_shapes(&cmd, &t);
        assert!(shapes.len() > 1, "expected multiple dash segments");
    }
}
