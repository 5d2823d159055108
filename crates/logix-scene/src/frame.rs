//! One complete repaint of the map surface
//!
//! Layer order matches the original dashboard: background, city blocks,
//! parks, streets, animated route overlays, distribution center marker.

use logix_types::{FleetDataset, Point, Street, VehicleRoute, SURFACE_HEIGHT, SURFACE_WIDTH};

use crate::palette;
use crate::{AnimationTime, DashPattern, DrawCmd, StrokeSpec};

/// Street tile pitch of the block pattern, logical units
const BLOCK_PITCH: u32 = 100;
/// The three decorative park rectangles: (x, y, w, h)
const PARKS: [(f32, f32, f32, f32); 3] = [
    (450.0, 80.0, 100.0, 60.0),
    (750.0, 420.0, 90.0, 70.0),
    (50.0, 280.0, 80.0, 80.0),
];
/// Streets wider than this get a dashed center lane marking
const LANE_MARKING_MIN_WIDTH: f32 = 7.0;

/// Borrowed view of the geometry the renderer needs
#[derive(Debug, Clone, Copy)]
pub struct MapGeometry<'a> {
    pub streets: &'a [Street],
    pub routes: &'a [VehicleRoute],
    pub depot: Point,
}

impl<'a> MapGeometry<'a> {
    pub fn from_dataset(dataset: &'a FleetDataset) -> Self {
        Self {
            streets: &dataset.streets,
            routes: &dataset.routes,
            depot: dataset.depot,
        }
    }
}

/// Draw commands for one frame, grouped by layer
///
/// `base` is a pure function of the street list alone; only `routes` and
/// `depot` depend on the animation time.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub base: Vec<DrawCmd>,
    pub routes: Vec<DrawCmd>,
    pub depot: Vec<DrawCmd>,
}

impl SceneFrame {
    /// All commands in paint order
    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.base.iter().chain(&self.routes).chain(&self.depot)
    }

    pub fn len(&self) -> usize {
        self.base.len() + self.routes.len() + self.depot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Render one complete frame
pub fn render_frame(geometry: &MapGeometry<'_>, time: AnimationTime) -> SceneFrame {
    SceneFrame {
        base: base_layer(geometry.streets),
        routes: route_layer(geometry.routes, time),
        depot: depot_layer(geometry.depot, time),
    }
}

/// Static layers: background fill, block pattern, parks, streets
pub fn base_layer(streets: &[Street]) -> Vec<DrawCmd> {
    let mut cmds = Vec::new();

    cmds.push(DrawCmd::Rect {
        min: Point::new(0.0, 0.0),
        width: SURFACE_WIDTH,
        height: SURFACE_HEIGHT,
        color: palette::BACKGROUND,
    });

    // City blocks, tiled every 100 units on an alternating parity rule
    for i in (0..SURFACE_WIDTH as u32).step_by(BLOCK_PITCH as usize) {
        for j in (0..SURFACE_HEIGHT as u32).step_by(BLOCK_PITCH as usize) {
            if (i + j) % (2 * BLOCK_PITCH) == 0 {
                cmds.push(DrawCmd::Rect {
                    min: Point::new(i as f32 + 10.0, j as f32 + 10.0),
                    width: 80.0,
                    height: 80.0,
                    color: palette::BLOCK,
                });
            }
        }
    }

    for &(x, y, w, h) in &PARKS {
        cmds.push(DrawCmd::Rect {
            min: Point::new(x, y),
            width: w,
            height: h,
            color: palette::PARK,
        });
    }

    for street in streets {
        cmds.extend(street_commands(street));
    }

    cmds
}

fn street_commands(street: &Street) -> Vec<DrawCmd> {
    let mut cmds = vec![DrawCmd::Line {
        from: street.start,
        to: street.end,
        width: street.width,
        color: street.color,
    }];

    // Center lane marking, main streets only
    if street.width > LANE_MARKING_MIN_WIDTH {
        cmds.push(DrawCmd::Polyline {
            points: vec![street.start, street.end],
            width: 1.5,
            color: palette::LANE,
            dash: Some(DashPattern {
                dash: 12.0,
                gap: 12.0,
                phase: 0.0,
            }),
        });
    }

    // Curb lines offset by half the street width
    let half = street.width / 2.0;
    if street.is_horizontal() {
        for dy in [-half, half] {
            cmds.push(DrawCmd::Line {
                from: Point::new(street.start.x, street.start.y + dy),
                to: Point::new(street.end.x, street.end.y + dy),
                width: 1.0,
                color: palette::CURB,
            });
        }
    }
    if street.is_vertical() {
        for dx in [-half, half] {
            cmds.push(DrawCmd::Line {
                from: Point::new(street.start.x + dx, street.start.y),
                to: Point::new(street.end.x + dx, street.end.y),
                width: 1.0,
                color: palette::CURB,
            });
        }
    }

    cmds
}

/// Animated route overlays: flowing dashed polylines plus waypoint dots
pub fn route_layer(routes: &[VehicleRoute], time: AnimationTime) -> Vec<DrawCmd> {
    let mut cmds = Vec::new();

    for route in routes {
        cmds.push(DrawCmd::Polyline {
            points: route.path.clone(),
            width: 4.0,
            color: route.color.with_alpha(0x99),
            dash: Some(DashPattern {
                dash: 18.0,
                gap: 12.0,
                phase: time.dash_offset(),
            }),
        });

        // Intermediate waypoints only; endpoints carry no dot
        for point in route.path.iter().skip(1).take(route.path.len().saturating_sub(2)) {
            cmds.push(DrawCmd::Circle {
                center: *point,
                radius: 5.0,
                fill: Some(route.color.with_alpha(0x60)),
                stroke: Some(StrokeSpec {
                    width: 2.0,
                    color: route.color,
                }),
            });
        }
    }

    cmds
}

/// Distribution center marker: pulsing halo, solid core, two rings
pub fn depot_layer(depot: Point, time: AnimationTime) -> Vec<DrawCmd> {
    vec![
        DrawCmd::Circle {
            center: depot,
            radius: time.pulse_radius(),
            fill: Some(palette::DEPOT.with_alpha(0x40)),
            stroke: None,
        },
        DrawCmd::Circle {
            center: depot,
            radius: 12.0,
            fill: Some(palette::DEPOT),
            stroke: None,
        },
        DrawCmd::Circle {
            center: depot,
            radius: 12.0,
            fill: None,
            stroke: Some(StrokeSpec {
                width: 3.0,
                color: palette::WHITE,
            }),
        },
        DrawCmd::Circle {
            center: depot,
            radius: 18.0,
            fill: None,
            stroke: Some(StrokeSpec {
                width: 2.0,
                color: palette::DEPOT,
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use logix_types::{Rgba, VehicleId};

    const MAIN: Rgba = Rgba::rgb(0x9c, 0xa3, 0xaf);
    const CYAN: Rgba = Rgba::rgb(0x06, 0xb6, 0xd4);

    fn street(x1: f32, y1: f32, x2: f32, y2: f32, width: f32) -> Street {
        Street {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            width,
            color: MAIN,
            name: None,
        }
    }

    fn route(path: &[(f32, f32)]) -> VehicleRoute {
        VehicleRoute {
            vehicle_id: VehicleId(101),
            path: path.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            color: CYAN,
        }
    }

    fn geometry_fixture() -> (Vec<Street>, Vec<VehicleRoute>) {
        let streets = vec![
            street(0.0, 150.0, 1000.0, 150.0, 10.0),
            street(600.0, 0.0, 600.0, 600.0, 6.0),
        ];
        let routes = vec![route(&[
            (100.0, 150.0),
            (300.0, 150.0),
            (500.0, 150.0),
            (700.0, 150.0),
        ])];
        (streets, routes)
    }

    #[test]
    fn test_base_layer_is_time_independent() {
        let (streets, routes) = geometry_fixture();
        let geometry = MapGeometry {
            streets: &streets,
            routes: &routes,
            depot: Point::new(600.0, 250.0),
        };
        let early = render_frame(&geometry, AnimationTime(1));
        let late = render_frame(&geometry, AnimationTime(500));
        assert_eq!(early.base, late.base);
        assert_ne!(early.routes, late.routes);
        assert_ne!(early.depot, late.depot);
    }

    #[test]
    fn test_render_is_idempotent() {
        let (streets, routes) = geometry_fixture();
        let geometry = MapGeometry {
            streets: &streets,
            routes: &routes,
            depot: Point::new(600.0, 250.0),
        };
        let first = render_frame(&geometry, AnimationTime(42));
        let second = render_frame(&geometry, AnimationTime(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_only_dash_phase_changes_on_routes() {
        let (_, routes) = geometry_fixture();
        let early = route_layer(&routes, AnimationTime(1));
        let late = route_layer(&routes, AnimationTime(2));
        assert_eq!(early.len(), late.len());
        match (&early[0], &late[0]) {
            (
                DrawCmd::Polyline { dash: Some(a), points: pa, .. },
                DrawCmd::Polyline { dash: Some(b), points: pb, .. },
            ) => {
                assert_eq!(pa, pb);
                assert_eq!(a.phase, -2.0);
                assert_eq!(b.phase, -4.0);
            }
            other => panic!("expected dashed polylines, got {:?}", other),
        }
        // waypoint dots are time-independent
        assert_eq!(&early[1..], &late[1..]);
    }

    #[test]
    fn test_waypoint_dots_skip_endpoints() {
        let (_, routes) = geometry_fixture();
        let cmds = route_layer(&routes, AnimationTime(0));
        // one polyline + two interior waypoints out of four points
        let circles: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(circles, vec![Point::new(300.0, 150.0), Point::new(500.0, 150.0)]);
    }

    #[test]
    fn test_two_point_route_has_no_dots() {
        let routes = vec![route(&[(0.0, 0.0), (100.0, 0.0)])];
        let cmds = route_layer(&routes, AnimationTime(0));
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_lane_marking_only_on_wide_streets() {
        let wide = street_commands(&street(0.0, 150.0, 1000.0, 150.0, 10.0));
        let narrow = street_commands(&street(0.0, 100.0, 1000.0, 100.0, 6.0));
        let has_lane = |cmds: &[DrawCmd]| {
            cmds.iter()
                .any(|c| matches!(c, DrawCmd::Polyline { dash: Some(_), .. }))
        };
        assert!(has_lane(&wide));
        assert!(!has_lane(&narrow));
    }

    #[test]
    fn test_curbs_follow_orientation() {
        let cmds = street_commands(&street(200.0, 0.0, 200.0, 600.0, 10.0));
        let curbs: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Line { from, width, .. } if *width == 1.0 => Some(from.x),
                _ => None,
            })
            .collect();
        assert_eq!(curbs, vec![195.0, 205.0]);
    }

    #[test]
    fn test_depot_halo_pulses() {
        let depot = Point::new(600.0, 250.0);
        let a = depot_layer(depot, AnimationTime(0));
        let b = depot_layer(depot, AnimationTime(16));
        match (&a[0], &b[0]) {
            (DrawCmd::Circle { radius: ra, .. }, DrawCmd::Circle { radius: rb, .. }) => {
                assert_ne!(ra, rb);
            }
            other => panic!("expected halo circles, got {:?}", other),
        }
        // core, white ring and outer ring are static
        assert_eq!(&a[1..], &b[1..]);
    }

    #[test]
    fn test_background_covers_surface_first() {
        let cmds = base_layer(&[]);
        match &cmds[0] {
            DrawCmd::Rect { min, width, height, color } => {
                assert_eq!(*min, Point::new(0.0, 0.0));
                assert_eq!(*width, SURFACE_WIDTH);
                assert_eq!(*height, SURFACE_HEIGHT);
                assert_eq!(*color, palette::BACKGROUND);
            }
            other => panic!("expected background rect, got {:?}", other),
        }
    }

    #[test]
    fn test_block_pattern_parity() {
        let cmds = base_layer(&[]);
        let blocks: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Rect { min, color, .. } if *color == palette::BLOCK => Some(*min),
                _ => None,
            })
            .collect();
        // 10x6 grid, half the tiles pass the parity rule
        assert_eq!(blocks.len(), 30);
        assert!(blocks.contains(&Point::new(10.0, 10.0)));
        assert!(blocks.contains(&Point::new(110.0, 110.0)));
        assert!(!blocks.contains(&Point::new(110.0, 10.0)));
    }
}
