//! Performance analytics screen
//!
//! All charts are painted directly with the egui painter from the static
//! sample report: a gauge for the routing KPI, a donut for the distance
//! saving, plus hourly bars and a weekly line.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Vec2};

use logix_app::analytics::{sample_report, AnalyticsReport};

use crate::theme;

pub struct AnalyticsPanel {
    report: AnalyticsReport,
}

impl AnalyticsPanel {
    pub fn new() -> Self {
        Self {
            report: sample_report(),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Análisis de Rendimiento")
                .size(20.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.label(RichText::new("Motor de optimización de rutas").color(theme::SLATE_400));
        ui.add_space(12.0);

        self.render_compliance_banner(ui);
        ui.add_space(10.0);

        ui.columns(2, |columns| {
            self.render_gauge_card(&mut columns[0]);
            self.render_donut_card(&mut columns[1]);
        });
        ui.add_space(10.0);

        ui.columns(2, |columns| {
            self.render_bars_card(&mut columns[0]);
            self.render_weekly_card(&mut columns[1]);
        });
        ui.add_space(10.0);

        self.render_kpi_row(ui);
    }

    fn render_compliance_banner(&self, ui: &mut egui::Ui) {
        let kpi = &self.report.kpi;
        let (text, color) = if kpi.compliant() {
            (
                format!(
                    "Motor de ruteo operativo — promedio {:.0} s, objetivo < {:.0} s · carga CPU {:.0}%",
                    kpi.avg_seconds, kpi.target_seconds, self.report.cpu_load_percent
                ),
                theme::EMERALD_400,
            )
        } else {
            (
                format!(
                    "Motor de ruteo degradado — promedio {:.0} s sobre el objetivo de {:.0} s",
                    kpi.avg_seconds, kpi.target_seconds
                ),
                theme::RED_400,
            )
        };
        theme::card_frame().show(ui, |ui| {
            ui.label(RichText::new(text).color(color));
        });
    }

    fn render_gauge_card(&self, ui: &mut egui::Ui) {
        let kpi = &self.report.kpi;
        theme::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Tiempo de Cálculo de Rutas")
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(6.0);

            let (response, painter) =
                ui.allocate_painter(Vec2::new(ui.available_width(), 150.0), Sense::hover());
            let center = response.rect.center();
            let radius = 60.0;

            painter.add(Shape::line(
                arc_points(center, radius, -90.0, 360.0),
                Stroke::new(10.0, theme::SLATE_800),
            ));
            painter.add(Shape::line(
                arc_points(center, radius, -90.0, 360.0 * kpi.gauge_fraction() as f32),
                Stroke::new(10.0, theme::CYAN_500),
            ));
            painter.text(
                center - Vec2::new(0.0, 8.0),
                Align2::CENTER_CENTER,
                format!("{:.0}", kpi.avg_seconds),
                FontId::proportional(28.0),
                Color32::WHITE,
            );
            painter.text(
                center + Vec2::new(0.0, 16.0),
                Align2::CENTER_CENTER,
                "seg promedio",
                FontId::proportional(11.0),
                theme::SLATE_400,
            );

            ui.horizontal(|ui| {
                metric(ui, "Mejor", format!("{:.0} s", kpi.best_seconds));
                metric(ui, "Peor", format!("{:.0} s", kpi.worst_seconds));
                metric(ui, "Desviación", format!("{:.1} s", kpi.deviation_seconds));
            });
        });
    }

    fn render_donut_card(&self, ui: &mut egui::Ui) {
        let saving = self.report.distance_saving_percent;
        theme::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Optimización de Distancia")
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(6.0);

            let (response, painter) =
                ui.allocate_painter(Vec2::new(ui.available_width(), 150.0), Sense::hover());
            let center = response.rect.center();
            let radius = 60.0;

            painter.add(Shape::line(
                arc_points(center, radius, -90.0, 360.0),
                Stroke::new(14.0, theme::SLATE_800),
            ));
            painter.add(Shape::line(
                arc_points(center, radius, -90.0, 360.0 * saving as f32 / 100.0),
                Stroke::new(14.0, theme::AMBER_400),
            ));
            painter.text(
                center - Vec2::new(0.0, 8.0),
                Align2::CENTER_CENTER,
                format!("{:.0}%", saving),
                FontId::proportional(28.0),
                Color32::WHITE,
            );
            painter.text(
                center + Vec2::new(0.0, 16.0),
                Align2::CENTER_CENTER,
                "ahorro vs. rutas directas",
                FontId::proportional(11.0),
                theme::SLATE_400,
            );

            ui.label(
                RichText::new("Kilometraje evitado por el optimizador durante el día")
                    .color(theme::SLATE_400),
            );
        });
    }

    fn render_bars_card(&self, ui: &mut egui::Ui) {
        let buckets = &self.report.orders_per_hour;
        theme::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Órdenes por Hora")
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(6.0);

            let (response, painter) =
                ui.allocate_painter(Vec2::new(ui.available_width(), 150.0), Sense::hover());
            let rect = response.rect.shrink(8.0);
            let max = buckets.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1) as f32;
            let slot = rect.width() / buckets.len() as f32;
            let chart_height = rect.height() - 18.0;

            for (i, (label, count)) in buckets.iter().enumerate() {
                let h = *count as f32 / max * chart_height;
                let x = rect.min.x + i as f32 * slot;
                let bar = egui::Rect::from_min_max(
                    Pos2::new(x + slot * 0.2, rect.min.y + chart_height - h),
                    Pos2::new(x + slot * 0.8, rect.min.y + chart_height),
                );
                painter.rect_filled(bar, egui::CornerRadius::same(2), theme::CYAN_500);
                painter.text(
                    Pos2::new(bar.center().x, bar.min.y - 4.0),
                    Align2::CENTER_BOTTOM,
                    count.to_string(),
                    FontId::proportional(10.0),
                    theme::SLATE_300,
                );
                painter.text(
                    Pos2::new(bar.center().x, rect.max.y),
                    Align2::CENTER_BOTTOM,
                    *label,
                    FontId::proportional(10.0),
                    theme::SLATE_500,
                );
            }
        });
    }

    fn render_weekly_card(&self, ui: &mut egui::Ui) {
        let days = &self.report.weekly_seconds;
        theme::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Tiempos de Cálculo — Semana")
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(6.0);

            let (response, painter) =
                ui.allocate_painter(Vec2::new(ui.available_width(), 150.0), Sense::hover());
            let rect = response.rect.shrink(8.0);
            let max = days
                .iter()
                .map(|(_, s)| *s)
                .fold(f64::MIN, f64::max)
                .max(1.0) as f32;
            let slot = rect.width() / days.len() as f32;
            let chart_height = rect.height() - 18.0;

            let points: Vec<Pos2> = days
                .iter()
                .enumerate()
                .map(|(i, (_, seconds))| {
                    Pos2::new(
                        rect.min.x + (i as f32 + 0.5) * slot,
                        rect.min.y + chart_height * (1.0 - *seconds as f32 / max),
                    )
                })
                .collect();

            painter.add(Shape::line(
                points.clone(),
                Stroke::new(2.0, theme::EMERALD_500),
            ));
            for (point, (label, seconds)) in points.iter().zip(days.iter()) {
                painter.circle_filled(*point, 3.0, theme::EMERALD_400);
                painter.text(
                    *point - Vec2::new(0.0, 8.0),
                    Align2::CENTER_BOTTOM,
                    format!("{:.0}", seconds),
                    FontId::proportional(10.0),
                    theme::SLATE_300,
                );
                painter.text(
                    Pos2::new(point.x, rect.max.y),
                    Align2::CENTER_BOTTOM,
                    *label,
                    FontId::proportional(10.0),
                    theme::SLATE_500,
                );
            }

            ui.label(
                RichText::new(format!(
                    "Promedio semanal: {:.1} s",
                    self.report.weekly_average_seconds()
                ))
                .color(theme::SLATE_400),
            );
        });
    }

    fn render_kpi_row(&self, ui: &mut egui::Ui) {
        let report = &self.report;
        ui.columns(4, |columns| {
            kpi_card(&mut columns[0], "Órdenes Hoy", report.orders_today.to_string());
            kpi_card(
                &mut columns[1],
                "Tasa de Éxito",
                format!("{:.1}%", report.success_rate_percent),
            );
            kpi_card(
                &mut columns[2],
                "Rutas Calculadas (24h)",
                report.routes_calculated_24h.to_string(),
            );
            kpi_card(
                &mut columns[3],
                "Disponibilidad",
                format!("{:.1}%", report.uptime_percent),
            );
        });
    }
}

fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(value).strong().color(Color32::WHITE));
        ui.label(RichText::new(label).size(10.0).color(theme::SLATE_500));
    });
    ui.add_space(14.0);
}

fn kpi_card(ui: &mut egui::Ui, label: &str, value: String) {
    theme::card_frame().show(ui, |ui| {
        ui.label(RichText::new(value).size(22.0).strong().color(theme::CYAN_400));
        ui.label(RichText::new(label).size(11.0).color(theme::SLATE_400));
    });
}

/// Sample an arc as a polyline; angles in degrees, 0 = east, clockwise screen
/// coordinates
fn arc_points(center: Pos2, radius: f32, start_deg: f32, sweep_deg: f32) -> Vec<Pos2> {
    let segments = 64;
    (0..=segments)
        .map(|i| {
            let angle = (start_deg + sweep_deg * i as f32 / segments as f32).to_radians();
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
