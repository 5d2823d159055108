//! GUI entry point for the LOGIXPRESS fleet command prototype

mod analytics_panel;
mod app;
mod assignment_modal;
mod config_panel;
mod dashboard_panel;
mod login;
mod map_view;
mod orders_panel;
mod shapes;
mod theme;

use app::LogixApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LOGIXPRESS — Centro de Comando",
        options,
        Box::new(|cc| Ok(Box::new(LogixApp::new(cc)))),
    )
}
