//! Fixed colors of the map scene

use logix_types::Rgba;

/// Flat background fill
pub const BACKGROUND: Rgba = Rgba::rgb(0xe5, 0xe7, 0xeb);
/// City block tiles
pub const BLOCK: Rgba = Rgba::rgb(0xf3, 0xf4, 0xf6);
/// Park rectangles
pub const PARK: Rgba = Rgba::rgb(0xbb, 0xf7, 0xd0);
/// Dashed center lane marking on main streets
pub const LANE: Rgba = Rgba::rgb(0xfe, 0xf3, 0xc7);
/// Curb lines along street edges
pub const CURB: Rgba = Rgba::rgb(0xd1, 0xd5, 0xdb);
/// Distribution center marker
pub const DEPOT: Rgba = Rgba::rgb(0x10, 0xb9, 0x81);
/// Depot inner ring
pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
