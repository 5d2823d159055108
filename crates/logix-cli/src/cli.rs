//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use logix_types::OutputFormat;

#[derive(Parser)]
#[command(name = "logix")]
#[command(version)]
#[command(about = "LOGIXPRESS fleet command prototype")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Load the fleet from a JSON dataset instead of the built-in sample
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the vehicle fleet
    Fleet,

    /// Render one map frame headlessly and dump the draw commands
    Frame {
        /// Animation time in ticks
        #[arg(long, short = 't', default_value = "0")]
        ticks: u64,
    },

    /// Print the fleet status report
    Report,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set operator name
        #[arg(long)]
        set_operator: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set dataset path override
        #[arg(long)]
        set_dataset: Option<PathBuf>,

        /// Show/hide street labels on the map
        #[arg(long)]
        set_street_labels: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
