//! Fleet statistics for the dashboard stat cards

use logix_types::{Vehicle, VehicleStatus};

/// Aggregates computed from the vehicle list
#[derive(Debug, Clone, PartialEq)]
pub struct FleetStats {
    pub total: usize,
    pub en_route: usize,
    pub stopped: usize,
    pub returning: usize,
    /// Mean speed over the whole fleet, km/h
    pub avg_speed_kmh: f64,
    /// Mean cargo fill over the whole fleet, percent
    pub avg_cargo_percent: f64,
}

impl FleetStats {
    /// Share of the fleet currently operating (anything but stopped)
    pub fn operational_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.total - self.stopped) as f64 / self.total as f64 * 100.0
    }
}

pub fn fleet_stats(vehicles: &[Vehicle]) -> FleetStats {
    let total = vehicles.len();
    let count = |s: VehicleStatus| vehicles.iter().filter(|v| v.status == s).count();
    let mean = |f: fn(&Vehicle) -> f64| {
        if total == 0 {
            0.0
        } else {
            vehicles.iter().map(f).sum::<f64>() / total as f64
        }
    };
    FleetStats {
        total,
        en_route: count(VehicleStatus::EnRoute),
        stopped: count(VehicleStatus::Stopped),
        returning: count(VehicleStatus::Returning),
        avg_speed_kmh: mean(|v| v.speed_kmh),
        avg_cargo_percent: mean(|v| v.cargo_percent),
    }
}
