//! Bordered panel layout: outer area, inner padded content area, and theme-backed block.
//!
//! Used for the history drawer and the logs screen.

use ratatui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders},
};

use super::style::{background_style, border_focused_style, border_style};
use crate::theme::ChromePalette;
use crate::utils::{HORIZONTAL_PADDING, padding};

/// Bordered panel: computes inner [Rect] and a [Block] to render.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    pub outer: Rect,
    /// Inner area after border and padding (where content goes).
    pub inner: Rect,
}

impl PanelLayout {
    /// Panel with a 1-cell border then `padding_h` columns of inner padding.
    pub fn new(area: Rect, padding_h: u16) -> Self {
        let after_border = padding(area, 1, 1);
        let inner = padding(after_border, padding_h, 0);
        Self { outer: area, inner }
    }

    /// Panel with default horizontal padding from utils.
    pub fn bordered(area: Rect) -> Self {
        Self::new(area, HORIZONTAL_PADDING)
    }
}

/// Draw this block in `layout.outer`, then render content in `layout.inner`.
pub fn block_for_panel(title: &str, palette: &ChromePalette, focused: bool) -> Block<'static> {
    let border = if focused {
        border_focused_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(background_style(palette.surface_background))
}
