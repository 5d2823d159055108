//! Configuration screen

use eframe::egui::{self, Color32, ComboBox, RichText, TextEdit};

use logix_app::config::Config;
use logix_types::OutputFormat;

use crate::theme;

pub struct ConfigPanel {
    operator_name: String,
    output_format: OutputFormat,
    dataset_path: String,
    show_street_labels: bool,
    status: Option<(String, bool)>,
}

impl ConfigPanel {
    pub fn new(config: &Config) -> Self {
        Self {
            operator_name: config.operator_name.clone(),
            output_format: config.output_format,
            dataset_path: config
                .dataset_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            show_street_labels: config.show_street_labels,
            status: None,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, config: &mut Config) {
        ui.label(
            RichText::new("Configuración")
                .size(20.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.add_space(12.0);

        theme::card_frame().show(ui, |ui| {
            ui.label(RichText::new("Nombre del operador").color(theme::SLATE_300));
            ui.add(
                TextEdit::singleline(&mut self.operator_name)
                    .desired_width(280.0)
                    .hint_text("Gestor de Logística"),
            );
            ui.add_space(8.0);

            ui.label(RichText::new("Formato de salida (CLI)").color(theme::SLATE_300));
            ComboBox::from_id_salt("config_output_format")
                .selected_text(self.output_format.to_string())
                .show_ui(ui, |ui| {
                    for format in [OutputFormat::Table, OutputFormat::Json] {
                        ui.selectable_value(&mut self.output_format, format, format.to_string());
                    }
                });
            ui.add_space(8.0);

            ui.label(RichText::new("Dataset de flota (JSON, opcional)").color(theme::SLATE_300));
            ui.add(
                TextEdit::singleline(&mut self.dataset_path)
                    .desired_width(f32::INFINITY)
                    .hint_text("vacío = flota de demostración"),
            );
            ui.add_space(8.0);

            ui.checkbox(&mut self.show_street_labels, "Mostrar nombres de calles en el mapa");
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Guardar").clicked() {
                    self.save(config);
                }
                if ui.button("Restaurar valores por defecto").clicked() {
                    *self = Self::new(&Config::default());
                }
            });

            if let Some((message, ok)) = &self.status {
                ui.add_space(8.0);
                let color = if *ok { theme::EMERALD_400 } else { theme::RED_400 };
                ui.label(RichText::new(message).color(color));
            }
        });
        ui.add_space(10.0);

        theme::card_frame().show(ui, |ui| {
            match Config::config_path() {
                Ok(path) => ui.label(
                    RichText::new(format!("Archivo: {}", path.display()))
                        .color(theme::SLATE_500),
                ),
                Err(_) => ui.label(
                    RichText::new("Sin directorio de configuración disponible")
                        .color(theme::SLATE_500),
                ),
            };
        });
    }

    fn save(&mut self, config: &mut Config) {
        config.operator_name = self.operator_name.trim().to_string();
        config.output_format = self.output_format;
        config.dataset_path = if self.dataset_path.trim().is_empty() {
            None
        } else {
            Some(self.dataset_path.trim().into())
        };
        config.show_street_labels = self.show_street_labels;

        self.status = Some(match config.save() {
            Ok(()) => ("Configuración guardada".to_string(), true),
            Err(e) => (format!("Error al guardar: {}", e), false),
        });
    }
}
