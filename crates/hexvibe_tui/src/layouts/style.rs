//! Map theme palette to ratatui styles for use in layout components.
//!
//! Chrome colors come from [ChromePalette](crate::theme::ChromePalette);
//! swatch colors come straight from the palette being edited.

use hexvibe_core::{HexColor, contrast_color};
use ratatui::style::{Color, Modifier, Style};

use crate::theme::Rgb;

/// Convert theme [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Convert a palette color to ratatui [Color].
#[inline]
pub fn hex_to_color(hex: HexColor) -> Color {
    rgb_to_color(hex.to_rgb())
}

/// Style for panel borders (border color, no fill).
pub fn border_style(border_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_rgb))
}

/// Style for panel background only (e.g. inner fill).
pub fn background_style(bg_rgb: Rgb) -> Style {
    Style::default().bg(rgb_to_color(bg_rgb))
}

/// Style for focused panel border (e.g. accent).
pub fn border_focused_style(border_focused_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_focused_rgb))
}

/// Style for primary text on a panel (e.g. palette.text).
pub fn text_style(text_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_rgb))
}

/// Style for muted/secondary text (e.g. palette.text_muted).
pub fn text_muted_style(text_muted_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted_rgb))
}

pub fn success_style(success_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(success_rgb))
}

pub fn danger_style(danger_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(danger_rgb))
}

/// Style for warning state (e.g. AI request in flight).
pub fn warning_style(warning_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(warning_rgb))
}

/// Swatch fill with its label drawn in the contrast color.
pub fn swatch_style(hex: HexColor) -> Style {
    Style::default()
        .bg(hex_to_color(hex))
        .fg(hex_to_color(contrast_color(&hex)))
}

/// Swatch label: same as [swatch_style], bold.
pub fn swatch_label_style(hex: HexColor) -> Style {
    swatch_style(hex).add_modifier(Modifier::BOLD)
}

/// Highlighted row in a list (history drawer).
pub fn selected_row_style(accent_rgb: Rgb, text_rgb: Rgb) -> Style {
    Style::default()
        .fg(rgb_to_color(text_rgb))
        .bg(rgb_to_color(accent_rgb))
        .add_modifier(Modifier::BOLD)
}
