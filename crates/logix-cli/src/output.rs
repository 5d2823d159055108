//! Output formatting module

use logix_domain::marker::{marker_position, surface_percent};
use logix_scene::SceneFrame;
use logix_types::{FleetDataset, OutputFormat, Result};

pub fn print_fleet(format: OutputFormat, dataset: &FleetDataset) -> Result<()> {
    print!("{}", render_fleet(format, dataset)?);
    Ok(())
}

pub fn print_frame(format: OutputFormat, frame: &SceneFrame) -> Result<()> {
    print!("{}", render_frame_dump(format, frame)?);
    Ok(())
}

pub fn render_fleet(format: OutputFormat, dataset: &FleetDataset) -> Result<String> {
    if format == OutputFormat::Json {
        let mut content = serde_json::to_string_pretty(dataset)?;
        content.push('\n');
        return Ok(content);
    }

    let mut out = String::new();
    out.push_str("\nFlota\n");
    out.push_str("=====\n");
    out.push_str(&format!(
        "{:<8} {:<12} {:>10} {:>7} {:>14}\n",
        "ID", "Estado", "Velocidad", "Carga", "Posición (%)"
    ));
    for vehicle in &dataset.vehicles {
        let (px, py) = surface_percent(marker_position(vehicle.id, &dataset.routes));
        out.push_str(&format!(
            "{:<8} {:<12} {:>10} {:>7} {:>6.1},{:<6.1}\n",
            vehicle.id.to_string(),
            vehicle.status.label(),
            vehicle.speed_label(),
            vehicle.cargo_label(),
            px,
            py
        ));
    }
    Ok(out)
}

pub fn render_frame_dump(format: OutputFormat, frame: &SceneFrame) -> Result<String> {
    if format == OutputFormat::Json {
        let commands: Vec<_> = frame.commands().collect();
        let mut content = serde_json::to_string_pretty(&commands)?;
        content.push('\n');
        return Ok(content);
    }

    let mut out = String::new();
    out.push_str("\nScene frame\n");
    out.push_str("===========\n");
    out.push_str(&format!("Base layer:   {:>4} commands\n", frame.base.len()));
    out.push_str(&format!("Route layer:  {:>4} commands\n", frame.routes.len()));
    out.push_str(&format!("Depot layer:  {:>4} commands\n", frame.depot.len()));
    out.push_str(&format!("Total:        {:>4} commands\n", frame.len()));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logix_app::sample::santiago_fleet;
    use logix_scene::{render_frame, AnimationTime, MapGeometry};

    #[test]
    fn test_fleet_table_contains_vehicles() {
        let dataset = santiago_fleet();
        let table = render_fleet(OutputFormat::Table, &dataset).unwrap();
        assert!(table.contains("V-101"));
        assert!(table.contains("Detenido"));
        // last waypoint of route 101, as percent of the surface
        assert!(table.contains("70.0,25.0"));
    }

    #[test]
    fn test_fleet_json_parses_back() {
        let dataset = santiago_fleet();
        let json = render_fleet(OutputFormat::Json, &dataset).unwrap();
        let back: logix_types::FleetDataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn test_frame_dump_counts() {
        let dataset = santiago_fleet();
        let geometry = MapGeometry::from_dataset(&dataset);
        let frame = render_frame(&geometry, AnimationTime(0));
        let dump = render_frame_dump(OutputFormat::Table, &frame).unwrap();
        assert!(dump.contains(&format!("{:>4} commands\n", frame.len())));

        let json = render_frame_dump(OutputFormat::Json, &frame).unwrap();
        assert!(json.contains("\"kind\""));
    }
}
