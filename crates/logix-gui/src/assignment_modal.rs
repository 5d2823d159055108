//! Manual route assignment dialog (exception control)

use std::sync::mpsc::Receiver;

use eframe::egui::{self, Align2, Button, Color32, ComboBox, RichText, ScrollArea, Vec2};

use logix_app::intake::{apply_assignment, DispatchStatus};
use logix_app::sample::pending_orders;
use logix_domain::assignment::validate_assignment;
use logix_types::{FleetDataset, PendingOrder, VehicleId};

use crate::theme;

pub struct AssignmentModal {
    open: bool,
    orders: Vec<PendingOrder>,
    selected_vehicle: Option<VehicleId>,
    selected_order: Option<String>,
    rx: Option<Receiver<DispatchStatus>>,
    applying: bool,
    confirmation: Option<String>,
    error: Option<String>,
}

impl AssignmentModal {
    pub fn new() -> Self {
        Self {
            open: false,
            orders: pending_orders(),
            selected_vehicle: None,
            selected_order: None,
            rx: None,
            applying: false,
            confirmation: None,
            error: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.confirmation = None;
        self.error = None;
    }

    pub fn ui(&mut self, ctx: &egui::Context, dataset: &FleetDataset) {
        if !self.open {
            return;
        }
        self.poll(ctx);

        let mut close_requested = false;
        egui::Window::new("Asignación Manual de Ruta")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size(Vec2::new(400.0, 380.0))
            .show(ctx, |ui| {
                if let Some(message) = self.confirmation.clone() {
                    ui.label(RichText::new(message).color(theme::EMERALD_400));
                    ui.add_space(10.0);
                    if ui.button("Cerrar").clicked() {
                        close_requested = true;
                    }
                    return;
                }

                ui.label(RichText::new("Vehículo:").color(theme::SLATE_300));
                let selected_text = self
                    .selected_vehicle
                    .map_or("Seleccione un vehículo".to_string(), |id| id.to_string());
                ComboBox::from_id_salt("assignment_vehicle")
                    .width(ui.available_width())
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for vehicle in &dataset.vehicles {
                            let label =
                                format!("{} — {}", vehicle.id, vehicle.status.label());
                            ui.selectable_value(
                                &mut self.selected_vehicle,
                                Some(vehicle.id),
                                label,
                            );
                        }
                    });
                ui.add_space(10.0);

                ui.label(RichText::new("Orden pendiente:").color(theme::SLATE_300));
                ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                    for order in &self.orders {
                        let is_selected = self.selected_order.as_deref() == Some(&order.id);
                        let label = format!(
                            "{} · {} · {} · {:.0} kg",
                            order.id,
                            order.address,
                            order.priority.label(),
                            order.weight_kg
                        );
                        if ui.selectable_label(is_selected, label).clicked() {
                            self.selected_order = Some(order.id.clone());
                        }
                    }
                });
                ui.add_space(10.0);

                ui.label(
                    RichText::new(
                        "⚠ Esta acción sobrescribirá la optimización automática de rutas.",
                    )
                    .color(theme::AMBER_400),
                );
                ui.add_space(10.0);

                if let Some(error) = &self.error {
                    ui.label(RichText::new(error).color(theme::RED_400));
                    ui.add_space(6.0);
                }

                ui.horizontal(|ui| {
                    let ready = self.selected_vehicle.is_some()
                        && self.selected_order.is_some()
                        && !self.applying;
                    let apply = Button::new(
                        RichText::new("APLICAR CAMBIO DE RUTA")
                            .strong()
                            .color(Color32::BLACK),
                    )
                    .fill(theme::CYAN_500);
                    if ui.add_enabled(ready, apply).clicked() {
                        self.start_apply(dataset);
                    }
                    if self.applying {
                        ui.spinner();
                        ui.label(RichText::new("Aplicando...").color(theme::SLATE_400));
                    }
                    if ui.button("Cancelar").clicked() {
                        close_requested = true;
                    }
                });
            });

        if close_requested {
            self.open = false;
            self.rx = None;
            self.applying = false;
            self.selected_vehicle = None;
            self.selected_order = None;
        }
    }

    fn start_apply(&mut self, dataset: &FleetDataset) {
        let (Some(vehicle_id), Some(order_id)) =
            (self.selected_vehicle, self.selected_order.clone())
        else {
            return;
        };
        match validate_assignment(&dataset.vehicles, &self.orders, vehicle_id, &order_id) {
            Ok(assignment) => {
                self.error = None;
                self.applying = true;
                self.rx = Some(apply_assignment(assignment));
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn poll(&mut self, ctx: &egui::Context) {
        let mut applied = None;
        if let Some(rx) = &self.rx {
            while let Ok(status) = rx.try_recv() {
                match status {
                    DispatchStatus::Applying => {}
                    DispatchStatus::Applied { assignment, at } => {
                        applied = Some((assignment, at));
                        break;
                    }
                }
            }
        }
        if let Some((assignment, at)) = applied {
            self.confirmation = Some(format!(
                "Ruta asignada: {} → {} ({})",
                assignment.vehicle_id,
                assignment.order_id,
                at.format("%H:%M:%S")
            ));
            self.applying = false;
            self.rx = None;
            self.selected_vehicle = None;
            self.selected_order = None;
        } else if self.applying {
            // Keep polling while the simulated engine works
            ctx.request_repaint();
        }
    }
}
