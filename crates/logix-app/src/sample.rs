//! Built-in sample fleet: the Santiago demo dataset
//!
//! This is the only place the demo data lives; the renderer and overlay take
//! a `FleetDataset` as opaque input, so tests can substitute synthetic
//! fixtures and a JSON file can replace this entirely.

use std::path::Path;

use logix_types::{
    Error, FleetDataset, OrderPriority, PendingOrder, Point, Result, Rgba, Street, Vehicle,
    VehicleId, VehicleRoute, VehicleStatus,
};

/// Main avenues
const MAIN_STREET: Rgba = Rgba::rgb(0x9c, 0xa3, 0xaf);
/// Secondary grid streets
const SIDE_STREET: Rgba = Rgba::rgb(0xa8, 0xa2, 0x9e);

const CYAN: Rgba = Rgba::rgb(0x06, 0xb6, 0xd4);
const RED: Rgba = Rgba::rgb(0xef, 0x44, 0x44);
const EMERALD: Rgba = Rgba::rgb(0x10, 0xb9, 0x81);

/// The demo fleet shown after login
pub fn santiago_fleet() -> FleetDataset {
    FleetDataset {
        vehicles: vehicles(),
        routes: routes(),
        streets: streets(),
        depot: Point::new(600.0, 250.0),
        depot_label: "Centro de Distribución".to_string(),
    }
}

/// Load a dataset from a JSON file, falling back shape errors to `Error`
pub fn load_dataset(path: &Path) -> Result<FleetDataset> {
    if !path.exists() {
        return Err(Error::DatasetNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let dataset: FleetDataset = serde_json::from_str(&content)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Structural checks on a dataset before it reaches the renderer
///
/// A vehicle without a route is allowed (the overlay has a documented
/// fallback position); degenerate routes and rotated streets are not.
pub fn validate_dataset(dataset: &FleetDataset) -> Result<()> {
    for route in &dataset.routes {
        if route.path.len() < 2 {
            return Err(Error::InvalidDataset(format!(
                "route for {} has fewer than 2 waypoints",
                route.vehicle_id
            )));
        }
    }
    for street in &dataset.streets {
        if !street.is_horizontal() && !street.is_vertical() {
            return Err(Error::InvalidDataset(format!(
                "street {:?} is neither horizontal nor vertical",
                street.name
            )));
        }
    }
    Ok(())
}

fn vehicles() -> Vec<Vehicle> {
    let vehicle = |id, status, speed_kmh, cargo_percent| Vehicle {
        id: VehicleId(id),
        status,
        speed_kmh,
        cargo_percent,
    };
    vec![
        vehicle(101, VehicleStatus::EnRoute, 65.0, 85.0),
        vehicle(102, VehicleStatus::EnRoute, 72.0, 92.0),
        vehicle(103, VehicleStatus::Stopped, 0.0, 60.0),
        vehicle(104, VehicleStatus::EnRoute, 58.0, 78.0),
        vehicle(105, VehicleStatus::Returning, 45.0, 15.0),
    ]
}

fn routes() -> Vec<VehicleRoute> {
    let route = |id, color, path: &[(f32, f32)]| VehicleRoute {
        vehicle_id: VehicleId(id),
        path: path.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        color,
    };
    vec![
        // 101: along Av. Providencia (horizontal)
        route(101, CYAN, &[(100.0, 150.0), (300.0, 150.0), (500.0, 150.0), (700.0, 150.0)]),
        // 102: along the Alameda (horizontal)
        route(102, CYAN, &[(150.0, 250.0), (400.0, 250.0), (650.0, 250.0), (900.0, 250.0)]),
        // 103: along Av. Tobalaba (vertical), currently stopped
        route(103, RED, &[(600.0, 100.0), (600.0, 200.0), (600.0, 300.0), (600.0, 350.0)]),
        // 104: mixed route turning at an intersection
        route(
            104,
            CYAN,
            &[
                (800.0, 500.0),
                (800.0, 400.0),
                (800.0, 350.0),
                (700.0, 350.0),
                (600.0, 350.0),
                (500.0, 350.0),
            ],
        ),
        // 105: along Av. Bulnes (vertical), returning to base
        route(
            105,
            EMERALD,
            &[(400.0, 450.0), (400.0, 400.0), (400.0, 350.0), (400.0, 300.0), (400.0, 250.0)],
        ),
    ]
}

fn streets() -> Vec<Street> {
    let named = |x1, y1, x2, y2, width, name: &str| Street {
        start: Point::new(x1, y1),
        end: Point::new(x2, y2),
        width,
        color: MAIN_STREET,
        name: Some(name.to_string()),
    };
    let side = |x1, y1, x2, y2| Street {
        start: Point::new(x1, y1),
        end: Point::new(x2, y2),
        width: 6.0,
        color: SIDE_STREET,
        name: None,
    };
    vec![
        // east-west avenues
        named(0.0, 150.0, 1000.0, 150.0, 10.0, "Av. Providencia"),
        named(0.0, 250.0, 1000.0, 250.0, 12.0, "Av. Libertador B. O'Higgins"),
        named(0.0, 350.0, 1000.0, 350.0, 8.0, "Av. Apoquindo"),
        named(0.0, 450.0, 1000.0, 450.0, 10.0, "Av. Vicuña Mackenna"),
        side(0.0, 100.0, 1000.0, 100.0),
        side(0.0, 200.0, 1000.0, 200.0),
        side(0.0, 300.0, 1000.0, 300.0),
        side(0.0, 400.0, 1000.0, 400.0),
        side(0.0, 500.0, 1000.0, 500.0),
        // north-south avenues
        named(200.0, 0.0, 200.0, 600.0, 10.0, "Av. Vicuña Mackenna"),
        named(400.0, 0.0, 400.0, 600.0, 8.0, "Av. Bulnes"),
        named(600.0, 0.0, 600.0, 600.0, 10.0, "Av. Tobalaba"),
        named(800.0, 0.0, 800.0, 600.0, 8.0, "Av. Irarrázaval"),
        side(100.0, 0.0, 100.0, 600.0),
        side(300.0, 0.0, 300.0, 600.0),
        side(500.0, 0.0, 500.0, 600.0),
        side(700.0, 0.0, 700.0, 600.0),
        side(900.0, 0.0, 900.0, 600.0),
    ]
}

/// Orders waiting for manual assignment in the exception-control modal
pub fn pending_orders() -> Vec<PendingOrder> {
    let order = |id: &str, address: &str, priority, weight_kg| PendingOrder {
        id: id.to_string(),
        address: address.to_string(),
        priority,
        weight_kg,
    };
    vec![
        order("ORD-2401", "Av. Principal 1234, Zona Norte", OrderPriority::Critical, 450.0),
        order("ORD-2402", "Calle Secundaria 567, Centro", OrderPriority::High, 320.0),
        order("ORD-2403", "Boulevard Este 890, Zona Este", OrderPriority::Standard, 180.0),
        order("ORD-2404", "Ruta Industrial 45, Polígono Sur", OrderPriority::Critical, 520.0),
    ]
}

/// Static intake counters for the orders screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyIntakeStats {
    pub orders_processed: u32,
    pub orders_capacity: u32,
    pub total_load_tons: f64,
    pub load_capacity_tons: f64,
}

pub fn daily_intake_stats() -> DailyIntakeStats {
    DailyIntakeStats {
        orders_processed: 24,
        orders_capacity: 32,
        total_load_tons: 3.2,
        load_capacity_tons: 4.8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logix_domain::marker::{marker_position, FALLBACK_POSITION};

    #[test]
    fn test_sample_passes_validation() {
        let dataset = santiago_fleet();
        validate_dataset(&dataset).unwrap();
    }

    #[test]
    fn test_every_vehicle_has_a_route() {
        let dataset = santiago_fleet();
        for vehicle in &dataset.vehicles {
            assert!(
                dataset.route_for(vehicle.id).is_some(),
                "{} has no route",
                vehicle.id
            );
            assert_ne!(marker_position(vehicle.id, &dataset.routes), FALLBACK_POSITION);
        }
    }

    #[test]
    fn test_street_grid_shape() {
        let dataset = santiago_fleet();
        assert_eq!(dataset.streets.len(), 18);
        assert_eq!(dataset.streets.iter().filter(|s| s.is_horizontal()).count(), 9);
        assert_eq!(dataset.streets.iter().filter(|s| s.is_vertical()).count(), 9);
    }

    #[test]
    fn test_dataset_json_round_trip() {
        let dataset = santiago_fleet();
        let json = serde_json::to_string(&dataset).unwrap();
        let back: FleetDataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn test_degenerate_route_rejected() {
        let mut dataset = santiago_fleet();
        dataset.routes[0].path.truncate(1);
        assert!(validate_dataset(&dataset).is_err());
    }

    #[test]
    fn test_rotated_street_rejected() {
        let mut dataset = santiago_fleet();
        dataset.streets[0].end.y += 50.0;
        assert!(validate_dataset(&dataset).is_err());
    }

    #[test]
    fn test_missing_dataset_file() {
        let result = load_dataset(Path::new("/nonexistent/fleet.json"));
        assert!(matches!(result, Err(Error::DatasetNotFound(_))));
    }
}
