//! Vehicle marker placement and styling
//!
//! A marker sits at the last waypoint of the vehicle's route, converted to a
//! percentage of the 1000x600 surface so the overlay scales with the widget.
//! Color, icon and halo are an exhaustive function of the status enum.

use logix_types::{Point, Rgba, VehicleId, VehicleRoute, VehicleStatus, SURFACE_HEIGHT, SURFACE_WIDTH};

/// Position used when a vehicle has no matching route.
///
/// Inherited from the source data as-is: a fixed corner coordinate with no
/// visual distinction from a real position. A defined edge case, not an error.
pub const FALLBACK_POSITION: Point = Point::new(50.0, 50.0);

/// Marker fill colors per status
pub const COLOR_EN_ROUTE: Rgba = Rgba::rgb(0x06, 0xb6, 0xd4); // cyan
pub const COLOR_STOPPED: Rgba = Rgba::rgb(0xef, 0x44, 0x44); // red
pub const COLOR_RETURNING: Rgba = Rgba::rgb(0x10, 0xb9, 0x81); // emerald

/// Icon drawn inside a vehicle marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    /// Directional arrow for moving vehicles
    Navigation,
    /// Truck glyph for stationary / returning vehicles
    Truck,
}

/// Visual treatment of one vehicle marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: Rgba,
    pub icon: MarkerIcon,
    /// Continuous pulsing halo, shown only while en route
    pub halo: bool,
}

/// Style table for the closed status enumeration
pub fn style_for(status: VehicleStatus) -> MarkerStyle {
    match status {
        VehicleStatus::EnRoute => MarkerStyle {
            color: COLOR_EN_ROUTE,
            icon: MarkerIcon::Navigation,
            halo: true,
        },
        VehicleStatus::Stopped => MarkerStyle {
            color: COLOR_STOPPED,
            icon: MarkerIcon::Truck,
            halo: false,
        },
        VehicleStatus::Returning => MarkerStyle {
            color: COLOR_RETURNING,
            icon: MarkerIcon::Truck,
            halo: false,
        },
    }
}

/// Display position of a vehicle: the last waypoint of its route, or the
/// documented fallback when no route matches
pub fn marker_position(id: VehicleId, routes: &[VehicleRoute]) -> Point {
    routes
        .iter()
        .find(|r| r.vehicle_id == id)
        .and_then(|r| r.path.last().copied())
        .unwrap_or(FALLBACK_POSITION)
}

/// Convert a logical map point to percentages of the surface dimensions
pub fn surface_percent(point: Point) -> (f32, f32) {
    (
        point.x / SURFACE_WIDTH * 100.0,
        point.y / SURFACE_HEIGHT * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: u32, path: &[(f32, f32)]) -> VehicleRoute {
        VehicleRoute {
            vehicle_id: VehicleId(id),
            path: path.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            color: COLOR_EN_ROUTE,
        }
    }

    #[test]
    fn test_position_is_last_waypoint() {
        let routes = vec![route(
            101,
            &[(100.0, 150.0), (300.0, 150.0), (500.0, 150.0), (700.0, 150.0)],
        )];
        let pos = marker_position(VehicleId(101), &routes);
        assert_eq!(pos, Point::new(700.0, 150.0));
        let (px, py) = surface_percent(pos);
        assert!((px - 70.0).abs() < f32::EPSILON);
        assert!((py - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_route_falls_back() {
        let routes = vec![route(101, &[(100.0, 150.0), (700.0, 150.0)])];
        assert_eq!(marker_position(VehicleId(999), &routes), FALLBACK_POSITION);
    }

    #[test]
    fn test_empty_path_falls_back() {
        let routes = vec![route(101, &[])];
        assert_eq!(marker_position(VehicleId(101), &routes), FALLBACK_POSITION);
    }

    #[test]
    fn test_halo_only_en_route() {
        assert!(style_for(VehicleStatus::EnRoute).halo);
        assert!(!style_for(VehicleStatus::Stopped).halo);
        assert!(!style_for(VehicleStatus::Returning).halo);
    }

    #[test]
    fn test_style_table() {
        assert_eq!(style_for(VehicleStatus::EnRoute).icon, MarkerIcon::Navigation);
        assert_eq!(style_for(VehicleStatus::Stopped).icon, MarkerIcon::Truck);
        assert_eq!(style_for(VehicleStatus::Stopped).color, COLOR_STOPPED);
        assert_eq!(style_for(VehicleStatus::Returning).color, COLOR_RETURNING);
    }
}
