//! Order intake screen
//!
//! Form on the left, validation feedback and daily capacity on the right.
//! Submission goes through the simulated intake channel and is polled every
//! frame, so the UI stays responsive during the fake latency.

use std::sync::mpsc::Receiver;

use chrono::{DateTime, Local};
use eframe::egui::{self, Button, Color32, ComboBox, ProgressBar, RichText, TextEdit, Vec2};

use logix_app::intake::{submit_order, IntakeStatus};
use logix_app::sample::daily_intake_stats;
use logix_domain::orders::OrderDraft;
use logix_types::{OrderPriority, PendingOrder};

use crate::theme;

pub struct OrdersPanel {
    draft: OrderDraft,
    error: Option<String>,
    rx: Option<Receiver<IntakeStatus>>,
    submitting: bool,
    last_accepted: Option<(PendingOrder, DateTime<Local>)>,
}

impl OrdersPanel {
    pub fn new() -> Self {
        Self {
            draft: OrderDraft::default(),
            error: None,
            rx: None,
            submitting: false,
            last_accepted: None,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.poll(ui.ctx());

        ui.label(
            RichText::new("Ingreso de Órdenes")
                .size(20.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.label(RichText::new("Registro manual de entregas").color(theme::SLATE_400));
        ui.add_space(12.0);

        ui.columns(2, |columns| {
            self.render_form(&mut columns[0]);
            self.render_side(&mut columns[1]);
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Nueva Orden de Entrega")
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(10.0);

            ui.label(RichText::new("Dirección de entrega").color(theme::SLATE_300));
            ui.add(
                TextEdit::singleline(&mut self.draft.address)
                    .desired_width(f32::INFINITY)
                    .hint_text("Av. Principal 1234, Zona Norte"),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Peso (kg)").color(theme::SLATE_300));
                    ui.add(
                        TextEdit::singleline(&mut self.draft.weight_kg)
                            .desired_width(120.0)
                            .hint_text("450"),
                    );
                });
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new("Volumen (m³)").color(theme::SLATE_300));
                    ui.add(
                        TextEdit::singleline(&mut self.draft.volume_m3)
                            .desired_width(120.0)
                            .hint_text("2.5"),
                    );
                });
            });
            ui.add_space(8.0);

            ui.label(RichText::new("Prioridad de entrega").color(theme::SLATE_300));
            let selected_text = self
                .draft
                .priority
                .map_or("Seleccione prioridad", |p| p.label());
            ComboBox::from_id_salt("order_priority")
                .width(200.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for priority in [
                        OrderPriority::Critical,
                        OrderPriority::High,
                        OrderPriority::Standard,
                    ] {
                        ui.selectable_value(
                            &mut self.draft.priority,
                            Some(priority),
                            priority.label(),
                        );
                    }
                });
            ui.add_space(12.0);

            if let Some(error) = &self.error {
                ui.label(RichText::new(error).color(theme::RED_400));
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                let submit = Button::new(
                    RichText::new("REGISTRAR ORDEN").strong().color(Color32::BLACK),
                )
                .fill(theme::CYAN_500)
                .min_size(Vec2::new(180.0, 30.0));
                if ui.add_enabled(!self.submitting, submit).clicked() {
                    self.submit();
                }
                if self.submitting {
                    ui.spinner();
                    ui.label(RichText::new("Validando Datos...").color(theme::SLATE_400));
                }
            });
        });
    }

    fn render_side(&mut self, ui: &mut egui::Ui) {
        if let Some((order, at)) = &self.last_accepted {
            theme::card_frame().show(ui, |ui| {
                ui.label(
                    RichText::new("✔ Orden registrada exitosamente")
                        .strong()
                        .color(theme::EMERALD_400),
                );
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Folio: {}", order.id)).color(Color32::WHITE));
                ui.label(RichText::new(&order.address).color(theme::SLATE_300));
                ui.label(
                    RichText::new(format!(
                        "Prioridad {} · {:.0} kg · {}",
                        order.priority.label(),
                        order.weight_kg,
                        at.format("%H:%M:%S")
                    ))
                    .color(theme::SLATE_400),
                );
            });
            ui.add_space(10.0);
        }

        theme::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Validación de Datos")
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(6.0);
            for line in [
                "• La dirección se contrasta con la cobertura urbana",
                "• Peso y volumen deben ser valores positivos",
                "• Las órdenes críticas entran primero a ruteo",
            ] {
                ui.label(RichText::new(line).color(theme::SLATE_300));
            }
        });
        ui.add_space(10.0);

        let stats = daily_intake_stats();
        theme::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Capacidad del Día")
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Órdenes procesadas: {} / {}",
                    stats.orders_processed, stats.orders_capacity
                ))
                .color(theme::SLATE_300),
            );
            ui.add(
                ProgressBar::new(stats.orders_processed as f32 / stats.orders_capacity as f32)
                    .fill(theme::CYAN_500),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Carga total: {:.1} / {:.1} t",
                    stats.total_load_tons, stats.load_capacity_tons
                ))
                .color(theme::SLATE_300),
            );
            ui.add(
                ProgressBar::new((stats.total_load_tons / stats.load_capacity_tons) as f32)
                    .fill(theme::EMERALD_500),
            );
        });
    }

    fn submit(&mut self) {
        match self.draft.validate() {
            Ok(order) => {
                self.error = None;
                self.submitting = true;
                self.rx = Some(submit_order(order));
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn poll(&mut self, ctx: &egui::Context) {
        let mut accepted = None;
        if let Some(rx) = &self.rx {
            while let Ok(status) = rx.try_recv() {
                match status {
                    IntakeStatus::Validating => {}
                    IntakeStatus::Accepted { order, at } => {
                        accepted = Some((order, at));
                        break;
                    }
                }
            }
        }
        if let Some((order, at)) = accepted {
            self.last_accepted = Some((order, at));
            self.submitting = false;
            self.rx = None;
            self.draft = OrderDraft::default();
        } else if self.submitting {
            ctx.request_repaint();
        }
    }
}
