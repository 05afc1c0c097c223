//! Legible foreground (black or white) for an arbitrary background.

use super::convert::{HexColor, Rgb};

/// Luma threshold on the 0..=255 scale; at or above it the background counts as light.
pub const LUMA_THRESHOLD: u32 = 128;

/// BT.601 luma `(299R + 587G + 114B) / 1000`.
pub fn luma(rgb: Rgb) -> f64 {
    f64::from(weighted_sum(rgb)) / 1000.0
}

/// `#000000` on light backgrounds, `#FFFFFF` on dark ones.
pub fn contrast_color(background: &HexColor) -> HexColor {
    // Integer comparison keeps the Y == 128 tie exact.
    if weighted_sum(background.to_rgb()) >= LUMA_THRESHOLD * 1000 {
        HexColor::BLACK
    } else {
        HexColor::WHITE
    }
}

fn weighted_sum(rgb: Rgb) -> u32 {
    299 * u32::from(rgb.r) + 587 * u32::from(rgb.g) + 114 * u32::from(rgb.b)
}
