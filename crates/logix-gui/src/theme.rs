//! Dark dashboard palette shared by every screen

use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};
use logix_types::Rgba;

pub const SLATE_950: Color32 = Color32::from_rgb(0x02, 0x06, 0x17);
pub const SLATE_900: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a);
pub const SLATE_800: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b);
pub const SLATE_700: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);
pub const SLATE_500: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b);
pub const SLATE_400: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);
pub const SLATE_300: Color32 = Color32::from_rgb(0xcb, 0xd5, 0xe1);
pub const CYAN_400: Color32 = Color32::from_rgb(0x22, 0xd3, 0xee);
pub const CYAN_500: Color32 = Color32::from_rgb(0x06, 0xb6, 0xd4);
pub const EMERALD_400: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99);
pub const EMERALD_500: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const RED_400: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);
pub const AMBER_400: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24);

/// Convert a scene color into an egui color
pub fn color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Standard card container used all over the dashboard
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(SLATE_900)
        .stroke(Stroke::new(1.0, SLATE_800))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(14))
}

/// Flat panel background without a border
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(SLATE_950)
        .inner_margin(Margin::same(18))
}
