//! One palette slot on screen: colored fill, hex label in the contrast color,
//! lock marker and 1-based index. The selected slot gets an accent border.

use hexvibe_core::PaletteSlot;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::style::{border_focused_style, swatch_label_style, swatch_style};
use crate::theme::ChromePalette;

pub const LOCK_MARKER: &str = "■ locked";
pub const UNLOCK_MARKER: &str = "□";

/// Lines for a swatch of `height` rows: hex and lock marker around the middle,
/// index on the last row. Short swatches keep only the hex.
pub fn swatch_lines(slot: &PaletteSlot, index: usize, height: u16) -> Vec<Line<'static>> {
    let h = height as usize;
    if h == 0 {
        return Vec::new();
    }
    let style = swatch_style(slot.hex);
    let hex = Line::from(Span::styled(slot.hex.to_string(), swatch_label_style(slot.hex)));
    if h < 3 {
        let mut lines = vec![hex];
        lines.resize(h, Line::styled("", style));
        return lines;
    }

    let marker = if slot.locked { LOCK_MARKER } else { UNLOCK_MARKER };
    let mut lines = vec![Line::styled("", style); h];
    let mid = (h - 1) / 2;
    lines[mid.saturating_sub(1)] = hex;
    lines[mid] = Line::styled(marker.to_string(), style);
    lines[h - 1] = Line::styled(format!("{}", index + 1), style);
    lines
}

pub fn render_swatch(
    frame: &mut Frame,
    area: Rect,
    slot: &PaletteSlot,
    index: usize,
    selected: bool,
    palette: &ChromePalette,
) {
    let fill = swatch_style(slot.hex);
    let mut block = Block::default().style(fill);
    if selected {
        block = block
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(border_focused_style(palette.accent).bg(fill.bg.unwrap_or_default()));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = swatch_lines(slot, index, inner.height);
    frame.render_widget(
        Paragraph::new(lines).style(fill).alignment(Alignment::Center),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(hex: &str, locked: bool) -> PaletteSlot {
        PaletteSlot {
            hex: hex.parse().unwrap(),
            locked,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn tall_swatch_has_hex_marker_and_index() {
        let lines = swatch_lines(&slot("#3a7bd5", true), 2, 9);
        assert_eq!(lines.len(), 9);
        assert_eq!(text(&lines[3]), "#3A7BD5");
        assert_eq!(text(&lines[4]), LOCK_MARKER);
        assert_eq!(text(&lines[8]), "3");
    }

    #[test]
    fn unlocked_marker() {
        let lines = swatch_lines(&slot("#000000", false), 0, 5);
        assert_eq!(text(&lines[1]), "#000000");
        assert_eq!(text(&lines[2]), UNLOCK_MARKER);
        assert_eq!(text(&lines[4]), "1");
    }

    #[test]
    fn short_swatch_keeps_only_hex() {
        let lines = swatch_lines(&slot("#FFFFFF", true), 4, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), "#FFFFFF");
        assert!(swatch_lines(&slot("#FFFFFF", true), 4, 0).is_empty());
    }

    #[test]
    fn label_uses_contrast_color() {
        let lines = swatch_lines(&slot("#FFFFFF", false), 0, 1);
        assert_eq!(lines[0].spans[0].style.fg, Some(ratatui::style::Color::Rgb(0, 0, 0)));
    }
}
