//! LOGIXPRESS - fleet command prototype CLI
//!
//! Headless access to the demo fleet: status tables, reports and
//! deterministic frame dumps of the map scene.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
