//! Animated fleet map widget
//!
//! Owns the frame scheduler that drives the render loop. Each GUI frame it
//! asks the scheduler for an animation time, renders the scene into draw
//! commands and paints them, then layers the interactive vehicle markers on
//! top. Once the scheduler is cancelled nothing touches the painter again.

use eframe::egui::{
    self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind,
    Vec2,
};

use logix_domain::marker::{marker_position, style_for, surface_percent, MarkerIcon};
use logix_domain::selection::SelectionState;
use logix_scene::{render_frame, CancellationHandle, FrameScheduler, MapGeometry};
use logix_types::{FleetDataset, VehicleId, VehicleStatus, SURFACE_HEIGHT, SURFACE_WIDTH};

use crate::shapes::{command_shapes, MapTransform};
use crate::theme;

const MARKER_RADIUS: f32 = 14.0;

pub struct MapView {
    scheduler: FrameScheduler,
    handle: CancellationHandle,
}

impl MapView {
    pub fn new() -> Self {
        let (scheduler, handle) = FrameScheduler::new();
        Self { scheduler, handle }
    }

    /// Stop the render loop; every later `ui()` call is a no-op
    pub fn teardown(&self) {
        self.handle.cancel();
    }

    /// Paint one frame of the map. Returns the vehicle clicked this frame,
    /// if any.
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        dataset: &FleetDataset,
        selection: &SelectionState,
        show_street_labels: bool,
    ) -> Option<VehicleId> {
        let width = ui.available_width();
        let size = Vec2::new(width, width * SURFACE_HEIGHT / SURFACE_WIDTH);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;
        if rect.width() < 1.0 || rect.height() < 1.0 {
            return None;
        }

        // No surface time once cancelled; skip the whole render step
        let Some(time) = self.scheduler.tick() else {
            return None;
        };

        let transform = MapTransform::new(rect);
        let geometry = MapGeometry::from_dataset(dataset);
        let frame = render_frame(&geometry, time);
        for cmd in frame.commands() {
            painter.extend(command_shapes(cmd, &transform));
        }

        if show_street_labels {
            self.paint_street_labels(&painter, dataset, rect);
        }
        self.paint_depot_label(&painter, dataset, &transform);

        let mut clicked = None;
        for vehicle in &dataset.vehicles {
            let (px, py) = surface_percent(marker_position(vehicle.id, &dataset.routes));
            let center = Pos2::new(
                rect.min.x + px / 100.0 * rect.width(),
                rect.min.y + py / 100.0 * rect.height(),
            );

            let hit = Rect::from_center_size(center, Vec2::splat(MARKER_RADIUS * 2.0));
            let id = ui.id().with(("vehicle_marker", vehicle.id.0));
            let marker_response = ui.interact(hit, id, Sense::click());
            if marker_response.clicked() {
                clicked = Some(vehicle.id);
            }

            let selected = selection.is_selected(vehicle.id);
            self.paint_marker(
                &painter,
                center,
                vehicle.status,
                selected,
                marker_response.hovered(),
                time.halo_phase(),
            );

            if selected {
                paint_info_card(&painter, center, vehicle);
            }
        }

        paint_legend(&painter, rect);
        paint_live_indicator(&painter, rect, time.halo_phase());

        // Continuous animation
        ui.ctx().request_repaint();
        clicked
    }

    fn paint_marker(
        &self,
        painter: &egui::Painter,
        center: Pos2,
        status: VehicleStatus,
        selected: bool,
        hovered: bool,
        halo_phase: f32,
    ) {
        let style = style_for(status);
        let fill = theme::color32(style.color);

        if style.halo {
            let halo_radius = MARKER_RADIUS + 10.0 * halo_phase;
            let alpha = ((1.0 - halo_phase) * 110.0) as u8;
            painter.circle_filled(
                center,
                halo_radius,
                Color32::from_rgba_unmultiplied(style.color.r, style.color.g, style.color.b, alpha),
            );
        }

        let radius = if selected || hovered {
            MARKER_RADIUS * 1.15
        } else {
            MARKER_RADIUS
        };
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius, Stroke::new(2.0, Color32::WHITE));
        if selected {
            painter.circle_stroke(center, radius + 4.0, Stroke::new(2.0, Color32::WHITE));
        }

        match style.icon {
            MarkerIcon::Navigation => paint_arrow_icon(painter, center, radius),
            MarkerIcon::Truck => paint_truck_icon(painter, center, radius),
        }
    }

    fn paint_street_labels(&self, painter: &egui::Painter, dataset: &FleetDataset, rect: Rect) {
        let font = FontId::proportional(10.0);
        for street in &dataset.streets {
            let Some(name) = &street.name else { continue };
            if street.is_horizontal() {
                let y = rect.min.y + street.start.y / SURFACE_HEIGHT * rect.height();
                painter.text(
                    Pos2::new(rect.min.x + 6.0, y - 4.0),
                    Align2::LEFT_BOTTOM,
                    name,
                    font.clone(),
                    theme::SLATE_500,
                );
            } else if street.is_vertical() {
                let x = rect.min.x + street.start.x / SURFACE_WIDTH * rect.width();
                painter.text(
                    Pos2::new(x + 4.0, rect.min.y + 6.0),
                    Align2::LEFT_TOP,
                    name,
                    font.clone(),
                    theme::SLATE_500,
                );
            }
        }
    }

    fn paint_depot_label(
        &self,
        painter: &egui::Painter,
        dataset: &FleetDataset,
        transform: &MapTransform,
    ) {
        let anchor = transform.to_screen(dataset.depot) - Vec2::new(0.0, 26.0);
        painter.text(
            anchor,
            Align2::CENTER_BOTTOM,
            &dataset.depot_label,
            FontId::proportional(11.0),
            theme::EMERALD_400,
        );
    }
}

impl Drop for MapView {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}

fn paint_arrow_icon(painter: &egui::Painter, center: Pos2, r: f32) {
    let points = vec![
        center + Vec2::new(0.0, -0.55 * r),
        center + Vec2::new(-0.5 * r, 0.45 * r),
        center + Vec2::new(0.5 * r, 0.45 * r),
    ];
    painter.add(Shape::convex_polygon(points, Color32::WHITE, Stroke::NONE));
}

fn paint_truck_icon(painter: &egui::Painter, center: Pos2, r: f32) {
    let body = Rect::from_min_size(
        center + Vec2::new(-0.55 * r, -0.35 * r),
        Vec2::new(0.7 * r, 0.5 * r),
    );
    let cab = Rect::from_min_size(
        center + Vec2::new(0.15 * r, -0.15 * r),
        Vec2::new(0.4 * r, 0.3 * r),
    );
    painter.rect_filled(body, CornerRadius::same(1), Color32::WHITE);
    painter.rect_filled(cab, CornerRadius::same(1), Color32::WHITE);
    painter.circle_filled(center + Vec2::new(-0.3 * r, 0.35 * r), 0.14 * r, Color32::WHITE);
    painter.circle_filled(center + Vec2::new(0.3 * r, 0.35 * r), 0.14 * r, Color32::WHITE);
}

fn paint_info_card(painter: &egui::Painter, marker: Pos2, vehicle: &logix_types::Vehicle) {
    let card = Rect::from_min_size(
        marker + Vec2::new(-80.0, MARKER_RADIUS + 12.0),
        Vec2::new(160.0, 74.0),
    );
    painter.rect_filled(
        card,
        CornerRadius::same(6),
        Color32::from_rgba_unmultiplied(0x0f, 0x17, 0x2a, 0xf0),
    );
    painter.rect_stroke(
        card,
        CornerRadius::same(6),
        Stroke::new(1.0, theme::SLATE_700),
        StrokeKind::Inside,
    );

    let style = style_for(vehicle.status);
    let left = card.min.x + 10.0;
    painter.text(
        Pos2::new(left, card.min.y + 8.0),
        Align2::LEFT_TOP,
        format!("Vehículo {}", vehicle.id),
        FontId::proportional(12.0),
        Color32::WHITE,
    );
    painter.text(
        Pos2::new(left, card.min.y + 25.0),
        Align2::LEFT_TOP,
        format!("Estado: {}", vehicle.status.label()),
        FontId::proportional(11.0),
        theme::color32(style.color),
    );
    painter.text(
        Pos2::new(left, card.min.y + 41.0),
        Align2::LEFT_TOP,
        format!("Velocidad: {}", vehicle.speed_label()),
        FontId::proportional(11.0),
        theme::SLATE_300,
    );
    painter.text(
        Pos2::new(left, card.min.y + 57.0),
        Align2::LEFT_TOP,
        format!("Carga: {}", vehicle.cargo_label()),
        FontId::proportional(11.0),
        theme::SLATE_300,
    );
}

fn paint_legend(painter: &egui::Painter, rect: Rect) {
    let card = Rect::from_min_size(
        Pos2::new(rect.min.x + 12.0, rect.max.y - 86.0),
        Vec2::new(130.0, 74.0),
    );
    painter.rect_filled(
        card,
        CornerRadius::same(6),
        Color32::from_rgba_unmultiplied(0x0f, 0x17, 0x2a, 0xd8),
    );
    painter.rect_stroke(
        card,
        CornerRadius::same(6),
        Stroke::new(1.0, theme::SLATE_800),
        StrokeKind::Inside,
    );

    let entries = [
        (VehicleStatus::EnRoute, "En ruta"),
        (VehicleStatus::Stopped, "Detenido"),
        (VehicleStatus::Returning, "Retornando"),
    ];
    for (i, (status, label)) in entries.iter().enumerate() {
        let y = card.min.y + 14.0 + i as f32 * 20.0;
        let color = theme::color32(style_for(*status).color);
        painter.circle_filled(Pos2::new(card.min.x + 14.0, y), 5.0, color);
        painter.text(
            Pos2::new(card.min.x + 26.0, y),
            Align2::LEFT_CENTER,
            *label,
            FontId::proportional(11.0),
            theme::SLATE_300,
        );
    }
}

fn paint_live_indicator(painter: &egui::Painter, rect: Rect, phase: f32) {
    let card = Rect::from_min_size(Pos2::new(rect.min.x + 12.0, rect.min.y + 12.0), Vec2::new(210.0, 26.0));
    painter.rect_filled(
        card,
        CornerRadius::same(13),
        Color32::from_rgba_unmultiplied(0x0f, 0x17, 0x2a, 0xd8),
    );
    let alpha = (120.0 + phase * 135.0) as u8;
    painter.circle_filled(
        Pos2::new(card.min.x + 14.0, card.center().y),
        4.0,
        Color32::from_rgba_unmultiplied(0x34, 0xd3, 0x99, alpha),
    );
    painter.text(
        Pos2::new(card.min.x + 26.0, card.center().y),
        Align2::LEFT_CENTER,
        "Live Tracking • Santiago, Chile",
        FontId::proportional(11.0),
        theme::SLATE_300,
    );
}
