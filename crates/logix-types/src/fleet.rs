//! Fleet data model: vehicles, routes and the dataset container

use serde::{Deserialize, Serialize};

use crate::{Point, Rgba, Street};

/// Unique vehicle identifier, displayed as "V-101"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VehicleId(pub u32);

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "V-{}", self.0)
    }
}

/// Operational status of a vehicle
///
/// Closed enumeration: marker color, icon and halo are an exhaustive match on
/// this, so adding a status is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    EnRoute,
    Stopped,
    Returning,
}

impl VehicleStatus {
    /// Display label as shown on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::EnRoute => "En ruta",
            VehicleStatus::Stopped => "Detenido",
            VehicleStatus::Returning => "Retornando",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One tracked vehicle
///
/// Supplied as a static list at startup; nothing in this prototype mutates
/// status, speed or cargo at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub status: VehicleStatus,
    pub speed_kmh: f64,
    pub cargo_percent: f64,
}

impl Vehicle {
    /// Speed formatted for display ("65 km/h")
    pub fn speed_label(&self) -> String {
        format!("{:.0} km/h", self.speed_kmh)
    }

    /// Cargo formatted for display ("85%")
    pub fn cargo_label(&self) -> String {
        format!("{:.0}%", self.cargo_percent)
    }
}

/// Planned route of a vehicle: an ordered waypoint polyline plus display color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRoute {
    pub vehicle_id: VehicleId,
    pub path: Vec<Point>,
    pub color: Rgba,
}

/// Everything the map needs, passed in as explicit configuration
///
/// The renderer treats this as opaque input; the built-in sample data lives in
/// `logix-app`, not here, so tests can feed synthetic fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetDataset {
    pub vehicles: Vec<Vehicle>,
    pub routes: Vec<VehicleRoute>,
    pub streets: Vec<Street>,
    /// Distribution center position on the map
    pub depot: Point,
    /// Label shown next to the depot marker
    pub depot_label: String,
}

impl FleetDataset {
    pub fn route_for(&self, id: VehicleId) -> Option<&VehicleRoute> {
        self.routes.iter().find(|r| r.vehicle_id == id)
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_id_display() {
        assert_eq!(VehicleId(101).to_string(), "V-101");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(VehicleStatus::EnRoute.label(), "En ruta");
        assert_eq!(VehicleStatus::Stopped.label(), "Detenido");
        assert_eq!(VehicleStatus::Returning.label(), "Retornando");
    }

    #[test]
    fn test_display_formatting() {
        let vehicle = Vehicle {
            id: VehicleId(101),
            status: VehicleStatus::EnRoute,
            speed_kmh: 65.0,
            cargo_percent: 85.0,
        };
        assert_eq!(vehicle.speed_label(), "65 km/h");
        assert_eq!(vehicle.cargo_label(), "85%");
    }

    #[test]
    fn test_route_lookup() {
        let dataset = FleetDataset {
            vehicles: vec![],
            routes: vec![VehicleRoute {
                vehicle_id: VehicleId(101),
                path: vec![Point::new(100.0, 150.0), Point::new(700.0, 150.0)],
                color: Rgba::rgb(0x06, 0xb6, 0xd4),
            }],
            streets: vec![],
            depot: Point::new(600.0, 250.0),
            depot_label: "Centro de Distribución".to_string(),
        };
        assert!(dataset.route_for(VehicleId(101)).is_some());
        assert!(dataset.route_for(VehicleId(999)).is_none());
    }
}
