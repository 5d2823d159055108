//! Application shell: login gate, sidebar navigation and screen dispatch

use eframe::egui::{self, Color32, RichText, ScrollArea};

use logix_app::config::Config;
use logix_app::sample::{load_dataset, santiago_fleet};
use logix_types::FleetDataset;

use crate::analytics_panel::AnalyticsPanel;
use crate::config_panel::ConfigPanel;
use crate::dashboard_panel::DashboardPanel;
use crate::login::LoginScreen;
use crate::orders_panel::OrdersPanel;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Orders,
    Analytics,
    Config,
}

impl Screen {
    fn label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Centro de Comando",
            Screen::Orders => "Ingreso de Órdenes",
            Screen::Analytics => "Análisis de Rendimiento",
            Screen::Config => "Configuración",
        }
    }
}

pub struct LogixApp {
    authenticated: bool,
    login: LoginScreen,
    screen: Screen,
    dashboard: DashboardPanel,
    orders: OrdersPanel,
    analytics: AnalyticsPanel,
    config_panel: ConfigPanel,
    config: Config,
    dataset: FleetDataset,
}

impl LogixApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let config = Config::load().unwrap_or_else(|e| {
            eprintln!("Config load error: {}", e);
            Config::default()
        });

        // Fall back to the demo fleet if the configured dataset is unusable
        let dataset = match &config.dataset_path {
            Some(path) => load_dataset(path).unwrap_or_else(|e| {
                eprintln!("Dataset load error ({}): {}", path.display(), e);
                santiago_fleet()
            }),
            None => santiago_fleet(),
        };

        let config_panel = ConfigPanel::new(&config);

        Self {
            authenticated: false,
            login: LoginScreen::new(),
            screen: Screen::Dashboard,
            dashboard: DashboardPanel::new(),
            orders: OrdersPanel::new(),
            analytics: AnalyticsPanel::new(),
            config_panel,
            config,
            dataset,
        }
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .exact_width(220.0)
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::SLATE_900)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(
                    RichText::new("LOGIXPRESS")
                        .size(18.0)
                        .strong()
                        .color(theme::CYAN_400),
                );
                ui.label(RichText::new("Centro de Comando").size(11.0).color(theme::SLATE_500));
                ui.add_space(16.0);

                let previous = self.screen;
                for screen in [
                    Screen::Dashboard,
                    Screen::Orders,
                    Screen::Analytics,
                    Screen::Config,
                ] {
                    let selected = self.screen == screen;
                    if ui.selectable_label(selected, screen.label()).clicked() {
                        self.screen = screen;
                    }
                    ui.add_space(4.0);
                }

                // Map render loop only runs while the dashboard is visible
                if previous != self.screen {
                    if previous == Screen::Dashboard {
                        self.dashboard.suspend_map();
                    }
                    if self.screen == Screen::Dashboard {
                        self.dashboard.reset_map();
                    }
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Operador de turno")
                            .size(10.0)
                            .color(theme::SLATE_500),
                    );
                    ui.label(
                        RichText::new(&self.config.operator_name)
                            .size(12.0)
                            .color(Color32::WHITE),
                    );
                    ui.separator();
                });
            });
    }
}

impl eframe::App for LogixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.authenticated {
            if self.login.ui(ctx) {
                self.authenticated = true;
                self.screen = Screen::Dashboard;
                self.dashboard.reset_map();
            }
            return;
        }

        self.render_sidebar(ctx);

        egui::CentralPanel::default()
            .frame(theme::panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| match self.screen {
                    Screen::Dashboard => {
                        self.dashboard.ui(ui, &self.dataset, &self.config);
                    }
                    Screen::Orders => {
                        self.orders.ui(ui);
                    }
                    Screen::Analytics => {
                        self.analytics.ui(ui);
                    }
                    Screen::Config => {
                        self.config_panel.ui(ui, &mut self.config);
                    }
                });
            });
    }
}
