//! Command handlers

use logix_app::config::Config;
use logix_app::report::generate_fleet_report;
use logix_app::sample::{load_dataset, santiago_fleet};
use logix_scene::{render_frame, AnimationTime, MapGeometry};
use logix_types::{FleetDataset, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);
    let dataset = resolve_dataset(&cli, &config)?;

    match cli.command {
        Commands::Fleet => output::print_fleet(format, &dataset),
        Commands::Frame { ticks } => {
            let geometry = MapGeometry::from_dataset(&dataset);
            let frame = render_frame(&geometry, AnimationTime(ticks));
            output::print_frame(format, &frame)
        }
        Commands::Report => {
            print!("{}", generate_fleet_report(&dataset));
            Ok(())
        }
        Commands::Config {
            show,
            set_operator,
            set_output,
            set_dataset,
            set_street_labels,
            reset,
        } => {
            run_config(config, show, set_operator, set_output, set_dataset, set_street_labels, reset)
        }
    }
}

fn resolve_dataset(cli: &Cli, config: &Config) -> Result<FleetDataset> {
    if let Some(path) = cli.dataset.as_ref().or(config.dataset_path.as_ref()) {
        load_dataset(path)
    } else {
        Ok(santiago_fleet())
    }
}

#[allow(clippy::too_many_arguments)]
fn run_config(
    mut config: Config,
    show: bool,
    set_operator: Option<String>,
    set_output: Option<OutputFormat>,
    set_dataset: Option<std::path::PathBuf>,
    set_street_labels: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut changed = false;
    if let Some(operator) = set_operator {
        config.operator_name = operator;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(path) = set_dataset {
        config.dataset_path = Some(path);
        changed = true;
    }
    if let Some(labels) = set_street_labels {
        config.show_street_labels = labels;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        print!("{}", config);
    }

    Ok(())
}
