//! Main dashboard: stat cards, live map, exception control and fleet list

use eframe::egui::{self, Color32, CornerRadius, RichText, Stroke, Vec2};
use egui_extras::{Column, TableBuilder};

use logix_app::config::Config;
use logix_domain::marker::style_for;
use logix_domain::selection::SelectionState;
use logix_domain::stats::fleet_stats;
use logix_types::FleetDataset;

use crate::assignment_modal::AssignmentModal;
use crate::map_view::MapView;
use crate::theme;

pub struct DashboardPanel {
    map: MapView,
    selection: SelectionState,
    modal: AssignmentModal,
}

impl DashboardPanel {
    pub fn new() -> Self {
        Self {
            map: MapView::new(),
            selection: SelectionState::new(),
            modal: AssignmentModal::new(),
        }
    }

    /// Fresh render loop when the dashboard comes back into view; animation
    /// time restarts from zero
    pub fn reset_map(&mut self) {
        self.map.teardown();
        self.map = MapView::new();
    }

    /// Cancel the render loop when the dashboard is left
    pub fn suspend_map(&mut self) {
        self.map.teardown();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, dataset: &FleetDataset, config: &Config) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new("Centro de Comando")
                        .size(20.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new("Monitoreo de flota en tiempo real").color(theme::SLATE_400),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::Frame::new()
                    .fill(theme::SLATE_900)
                    .stroke(Stroke::new(1.0, theme::EMERALD_500))
                    .corner_radius(CornerRadius::same(12))
                    .inner_margin(egui::Margin::symmetric(10, 4))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("● Sistema Operativo")
                                .size(11.0)
                                .color(theme::EMERALD_400),
                        );
                    });
            });
        });
        ui.add_space(10.0);

        self.render_stat_cards(ui, dataset);
        ui.add_space(10.0);

        ui.horizontal_top(|ui| {
            let map_width = ui.available_width() * 0.62;
            ui.vertical(|ui| {
                ui.set_width(map_width);
                self.render_map_card(ui, dataset, config);
            });
            ui.add_space(8.0);
            ui.vertical(|ui| {
                self.render_exception_card(ui);
                ui.add_space(8.0);
                self.render_fleet_table(ui, dataset);
            });
        });

        self.modal.ui(ui.ctx(), dataset);
    }

    fn render_stat_cards(&self, ui: &mut egui::Ui, dataset: &FleetDataset) {
        let stats = fleet_stats(&dataset.vehicles);
        ui.columns(4, |columns| {
            stat_card(
                &mut columns[0],
                "Flota Activa",
                stats.total.to_string(),
                theme::CYAN_400,
            );
            stat_card(
                &mut columns[1],
                "En Ruta",
                stats.en_route.to_string(),
                theme::EMERALD_400,
            );
            stat_card(
                &mut columns[2],
                "Velocidad Promedio",
                format!("{:.0} km/h", stats.avg_speed_kmh),
                Color32::WHITE,
            );
            stat_card(
                &mut columns[3],
                "Flota Operativa",
                format!("{:.0}%", stats.operational_percent()),
                theme::AMBER_400,
            );
        });
    }

    fn render_map_card(&mut self, ui: &mut egui::Ui, dataset: &FleetDataset, config: &Config) {
        theme::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Visualización de Flota")
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.label(RichText::new("Santiago — tiempo real").color(theme::SLATE_500));
            });
            ui.add_space(6.0);

            if let Some(id) =
                self.map
                    .ui(ui, dataset, &self.selection, config.show_street_labels)
            {
                self.selection.select(id);
            }
        });
    }

    fn render_exception_card(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Control de Excepciones")
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new("Reasigne una orden pendiente a un vehículo específico")
                    .color(theme::SLATE_400),
            );
            ui.add_space(8.0);
            let button = egui::Button::new(
                RichText::new("ASIGNAR MANUALMENTE")
                    .strong()
                    .color(Color32::BLACK),
            )
            .fill(theme::AMBER_400)
            .min_size(Vec2::new(ui.available_width(), 30.0));
            if ui.add(button).clicked() {
                self.modal.open();
            }
        });
    }

    fn render_fleet_table(&mut self, ui: &mut egui::Ui, dataset: &FleetDataset) {
        theme::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Estado de Flota")
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(6.0);

            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(56.0))
                .column(Column::auto().at_least(84.0))
                .column(Column::auto().at_least(70.0))
                .column(Column::remainder())
                .header(18.0, |mut header| {
                    for title in ["ID", "Estado", "Velocidad", "Carga"] {
                        header.col(|ui| {
                            ui.label(RichText::new(title).strong().color(theme::SLATE_300));
                        });
                    }
                })
                .body(|mut body| {
                    for vehicle in &dataset.vehicles {
                        let selected = self.selection.is_selected(vehicle.id);
                        body.row(20.0, |mut row| {
                            row.col(|ui| {
                                let id_text = if selected {
                                    RichText::new(vehicle.id.to_string())
                                        .strong()
                                        .color(theme::CYAN_400)
                                } else {
                                    RichText::new(vehicle.id.to_string()).color(Color32::WHITE)
                                };
                                if ui.selectable_label(selected, id_text).clicked() {
                                    self.selection.select(vehicle.id);
                                }
                            });
                            row.col(|ui| {
                                let color = theme::color32(style_for(vehicle.status).color);
                                ui.label(RichText::new(vehicle.status.label()).color(color));
                            });
                            row.col(|ui| {
                                ui.label(
                                    RichText::new(vehicle.speed_label())
                                        .color(theme::SLATE_300),
                                );
                            });
                            row.col(|ui| {
                                ui.label(
                                    RichText::new(vehicle.cargo_label())
                                        .color(theme::SLATE_300),
                                );
                            });
                        });
                    }
                });
        });
    }
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: String, accent: Color32) {
    theme::card_frame().show(ui, |ui| {
        ui.label(RichText::new(value).size(22.0).strong().color(accent));
        ui.label(RichText::new(label).size(11.0).color(theme::SLATE_400));
    });
}
