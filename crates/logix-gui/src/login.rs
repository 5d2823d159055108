//! Access screen shown before the dashboard
//!
//! Prototype authentication: any non-empty credentials are accepted, the
//! fields exist so the flow matches the real product.

use eframe::egui::{self, Align2, Color32, RichText, TextEdit, Vec2};

use crate::theme;

#[derive(Default)]
pub struct LoginScreen {
    email: String,
    password: String,
    error: Option<String>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once access is granted
    pub fn ui(&mut self, ctx: &egui::Context) -> bool {
        let mut granted = false;

        egui::CentralPanel::default()
            .frame(theme::panel_frame())
            .show(ctx, |_ui| {});

        egui::Window::new("login_card")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, -40.0])
            .fixed_size(Vec2::new(360.0, 320.0))
            .frame(theme::card_frame())
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("LOGÍSTICA EXPRESS")
                            .size(24.0)
                            .strong()
                            .color(theme::CYAN_400),
                    );
                    ui.label(RichText::new("Portal de Acceso").color(theme::SLATE_400));
                    ui.add_space(16.0);
                });

                ui.label(RichText::new("Correo corporativo").color(theme::SLATE_300));
                ui.add(
                    TextEdit::singleline(&mut self.email)
                        .desired_width(f32::INFINITY)
                        .hint_text("operador@logixpress.cl"),
                );
                ui.add_space(8.0);

                ui.label(RichText::new("Contraseña").color(theme::SLATE_300));
                ui.add(
                    TextEdit::singleline(&mut self.password)
                        .desired_width(f32::INFINITY)
                        .password(true)
                        .hint_text("••••••••"),
                );
                ui.add_space(12.0);

                if let Some(error) = &self.error {
                    ui.label(RichText::new(error).color(theme::RED_400));
                    ui.add_space(8.0);
                }

                let button = egui::Button::new(
                    RichText::new("ACCEDER AL SISTEMA")
                        .strong()
                        .color(Color32::BLACK),
                )
                .fill(theme::CYAN_500)
                .min_size(Vec2::new(ui.available_width(), 32.0));

                if ui.add(button).clicked() {
                    if self.email.trim().is_empty() || self.password.trim().is_empty() {
                        self.error = Some("Complete todos los campos".to_string());
                    } else {
                        self.error = None;
                        granted = true;
                    }
                }

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Sistema de Gestión Logística Avanzada")
                            .size(11.0)
                            .color(theme::SLATE_500),
                    );
                });
            });

        granted
    }
}
