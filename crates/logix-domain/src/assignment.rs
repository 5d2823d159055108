//! Manual route assignment checks
//!
//! The exception-control modal lets an operator force a vehicle onto a
//! pending order. The only validation is that both sides exist; nothing is
//! persisted (prototype semantics).

use serde::{Deserialize, Serialize};

use logix_types::{Error, PendingOrder, Result, Vehicle, VehicleId};

/// A manual vehicle-to-order assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub vehicle_id: VehicleId,
    pub order_id: String,
}

pub fn validate_assignment(
    vehicles: &[Vehicle],
    orders: &[PendingOrder],
    vehicle_id: VehicleId,
    order_id: &str,
) -> Result<Assignment> {
    if !vehicles.iter().any(|v| v.id == vehicle_id) {
        return Err(Error::UnknownVehicle(vehicle_id.to_string()));
    }
    if !orders.iter().any(|o| o.id == order_id) {
        return Err(Error::UnknownOrder(order_id.to_string()));
    }
    Ok(Assignment {
        vehicle_id,
        order_id: order_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use logix_types::{OrderPriority, VehicleStatus};

    fn fixtures() -> (Vec<Vehicle>, Vec<PendingOrder>) {
        let vehicles = vec![Vehicle {
            id: VehicleId(101),
            status: VehicleStatus::EnRoute,
            speed_kmh: 65.0,
            cargo_percent: 85.0,
        }];
        let orders = vec![PendingOrder {
            id: "ORD-2401".to_string(),
            address: "Av. Principal 1234, Zona Norte".to_string(),
            priority: OrderPriority::Critical,
            weight_kg: 450.0,
        }];
        (vehicles, orders)
    }

    #[test]
    fn test_valid_assignment() {
        let (vehicles, orders) = fixtures();
        let assignment =
            validate_assignment(&vehicles, &orders, VehicleId(101), "ORD-2401").unwrap();
        assert_eq!(assignment.vehicle_id, VehicleId(101));
        assert_eq!(assignment.order_id, "ORD-2401");
    }

    #[test]
    fn test_unknown_vehicle() {
        let (vehicles, orders) = fixtures();
        let result = validate_assignment(&vehicles, &orders, VehicleId(999), "ORD-2401");
        assert!(matches!(result, Err(Error::UnknownVehicle(_))));
    }

    #[test]
    fn test_unknown_order() {
        let (vehicles, orders) = fixtures();
        let result = validate_assignment(&vehicles, &orders, VehicleId(101), "ORD-9999");
        assert!(matches!(result, Err(Error::UnknownOrder(_))));
    }
}
