//! Simulated order intake and manual dispatch
//!
//! There is no backend: submitting an order spawns a background thread that
//! sleeps for a fake validation latency and then reports acceptance over a
//! channel. The GUI polls the receiver each frame, the same way it polls any
//! long-running work.

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};
use uuid::Uuid;

use logix_domain::assignment::Assignment;
use logix_domain::orders::ValidatedOrder;
use logix_types::PendingOrder;

/// Fake round-trip time of the "routing engine"
pub const INTAKE_LATENCY: Duration = Duration::from_millis(1500);

/// Progress of one submitted order
#[derive(Debug, Clone)]
pub enum IntakeStatus {
    /// Validation in progress
    Validating,
    /// Order accepted and queued for the routing engine
    Accepted {
        order: PendingOrder,
        at: DateTime<Local>,
    },
}

/// Progress of one manual assignment
#[derive(Debug, Clone)]
pub enum DispatchStatus {
    Applying,
    Applied {
        assignment: Assignment,
        at: DateTime<Local>,
    },
}

/// Submit a validated order with the default simulated latency
pub fn submit_order(order: ValidatedOrder) -> Receiver<IntakeStatus> {
    submit_order_with_latency(order, INTAKE_LATENCY)
}

/// Latency-injectable variant for tests
pub fn submit_order_with_latency(
    order: ValidatedOrder,
    latency: Duration,
) -> Receiver<IntakeStatus> {
    let (tx, rx) = channel();
    thread::spawn(move || {
        if tx.send(IntakeStatus::Validating).is_err() {
            return;
        }
        thread::sleep(latency);
        let accepted = PendingOrder {
            id: next_order_id(),
            address: order.address,
            priority: order.priority,
            weight_kg: order.weight_kg,
        };
        let _ = tx.send(IntakeStatus::Accepted {
            order: accepted,
            at: Local::now(),
        });
    });
    rx
}

/// Apply a manual assignment with the default simulated latency
pub fn apply_assignment(assignment: Assignment) -> Receiver<DispatchStatus> {
    apply_assignment_with_latency(assignment, INTAKE_LATENCY)
}

pub fn apply_assignment_with_latency(
    assignment: Assignment,
    latency: Duration,
) -> Receiver<DispatchStatus> {
    let (tx, rx) = channel();
    thread::spawn(move || {
        if tx.send(DispatchStatus::Applying).is_err() {
            return;
        }
        thread::sleep(latency);
        let _ = tx.send(DispatchStatus::Applied {
            assignment,
            at: Local::now(),
        });
    });
    rx
}

fn next_order_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("ORD-{}", uuid[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logix_types::{OrderPriority, VehicleId};
    use std::time::Duration;

    fn order() -> ValidatedOrder {
        ValidatedOrder {
            address: "Av. Principal 1234, Zona Norte".to_string(),
            weight_kg: 450.0,
            volume_m3: 2.5,
            priority: OrderPriority::Critical,
        }
    }

    #[test]
    fn test_order_goes_through_intake() {
        let rx = submit_order_with_latency(order(), Duration::ZERO);
        let timeout = Duration::from_secs(5);
        assert!(matches!(
            rx.recv_timeout(timeout).unwrap(),
            IntakeStatus::Validating
        ));
        match rx.recv_timeout(timeout).unwrap() {
            IntakeStatus::Accepted { order, .. } => {
                assert!(order.id.starts_with("ORD-"));
                assert_eq!(order.weight_kg, 450.0);
                assert_eq!(order.priority, OrderPriority::Critical);
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_dispatch() {
        let assignment = Assignment {
            vehicle_id: VehicleId(101),
            order_id: "ORD-2401".to_string(),
        };
        let rx = apply_assignment_with_latency(assignment.clone(), Duration::ZERO);
        let timeout = Duration::from_secs(5);
        assert!(matches!(
            rx.recv_timeout(timeout).unwrap(),
            DispatchStatus::Applying
        ));
        match rx.recv_timeout(timeout).unwrap() {
            DispatchStatus::Applied { assignment: a, .. } => assert_eq!(a, assignment),
            other => panic!("expected applied, got {:?}", other),
        }
    }

    #[test]
    fn test_order_ids_are_unique() {
        assert_ne!(next_order_id(), next_order_id());
    }
}
