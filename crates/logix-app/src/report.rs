//! Plain-text fleet status report for the CLI

use logix_domain::marker::marker_position;
use logix_domain::stats::fleet_stats;
use logix_types::FleetDataset;

pub fn generate_fleet_report(dataset: &FleetDataset) -> String {
    let stats = fleet_stats(&dataset.vehicles);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("          Reporte de Estado de Flota               \n");
    report.push_str("          Fleet Status Report                      \n");
    report.push_str("==================================================\n\n");
    report.push_str("Resumen / Summary\n");
    report.push_str(&format!("  Vehículos / Vehicles:     {}\n", stats.total));
    report.push_str(&format!("  En ruta / En route:       {}\n", stats.en_route));
    report.push_str(&format!("  Detenidos / Stopped:      {}\n", stats.stopped));
    report.push_str(&format!("  Retornando / Returning:   {}\n", stats.returning));
    report.push_str(&format!(
        "  Velocidad prom. / Avg speed: {:.0} km/h\n",
        stats.avg_speed_kmh
    ));
    report.push_str(&format!(
        "  Flota operativa / Operational: {:.0}%\n",
        stats.operational_percent()
    ));
    report.push('\n');

    report.push_str("Detalle / Detail\n");
    report.push_str("-".repeat(60).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<8} {:<12} {:>10} {:>8} {:>12}\n",
        "ID", "Estado", "Velocidad", "Carga", "Posición"
    ));
    report.push_str("-".repeat(60).as_str());
    report.push('\n');
    for vehicle in &dataset.vehicles {
        let pos = marker_position(vehicle.id, &dataset.routes);
        report.push_str(&format!(
            "{:<8} {:<12} {:>10} {:>8} {:>5.0},{:<5.0}\n",
            vehicle.id.to_string(),
            vehicle.status.label(),
            vehicle.speed_label(),
            vehicle.cargo_label(),
            pos.x,
            pos.y
        ));
    }
    report.push('\n');
    report.push_str("==================================================\n");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::santiago_fleet;

    #[test]
    fn test_report_lists_every_vehicle() {
        let dataset = santiago_fleet();
        let report = generate_fleet_report(&dataset);
        for vehicle in &dataset.vehicles {
            assert!(report.contains(&vehicle.id.to_string()));
        }
        assert!(report.contains("Fleet Status Report"));
        assert!(report.contains("En ruta"));
    }

    #[test]
    fn test_report_shows_route_endpoint() {
        let dataset = santiago_fleet();
        let report = generate_fleet_report(&dataset);
        // vehicle 101 sits at the last waypoint of its route
        assert!(report.contains("700,150"));
    }
}
