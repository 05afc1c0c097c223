//! Header strip layout: top bar with title and right-aligned status (with colored dot).
//!
//! Uses [crate::utils] for padding and [crate::theme] for colors.

use ratatui::Frame;
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::style::{
    background_style, border_style, danger_style, success_style, text_muted_style, text_style,
    warning_style,
};
use crate::theme::ChromePalette;
use crate::utils::horizontal_padding;

/// Layout for the main app header: outer area and padded inner rect for content.
#[derive(Debug, Clone)]
pub struct HeadLayout {
    pub area: Rect,
    /// Inner rect with horizontal padding for title and right text.
    pub inner: Rect,
}

impl HeadLayout {
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }
}

/// What the status dot should signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTone {
    Ready,
    Busy,
    Error,
}

/// Build header line: title (bold) and subtitle left, then right-aligned status with colored dot.
pub fn header_line(
    title: &str,
    subtitle: &str,
    right: &str,
    tone: HeaderTone,
    palette: &ChromePalette,
    width: u16,
) -> Line<'static> {
    let title_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let dot_style = match tone {
        HeaderTone::Error => danger_style(palette.danger),
        HeaderTone::Busy => warning_style(palette.warning),
        HeaderTone::Ready => success_style(palette.success),
    };
    let muted = text_muted_style(palette.text_muted);
    let left_len = title.width() + 2 + subtitle.width();
    let right_len = 2 + right.width(); // "● " + status
    let gap = (width as usize).saturating_sub(left_len + right_len);
    Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw("  "),
        Span::styled(subtitle.to_string(), muted),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ".to_string(), dot_style),
        Span::styled(right.to_string(), muted),
    ])
}

/// Block for the header bar: full-width background, bottom border on second line.
pub fn block_for_head(palette: &ChromePalette) -> Block<'static> {
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(background_style(palette.surface_background))
}

pub const HEADER_TITLE: &str = hexvibe_constant::app::DISPLAY_NAME;

/// Default status when none is set.
pub const HEADER_STATUS_READY: &str = "Ready";

/// Draw the header: two-line block (title line, then border), status with colored dot.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &ChromePalette,
    subtitle: &str,
    status: &str,
    tone: HeaderTone,
) {
    let layout = HeadLayout::new(area);
    let block = block_for_head(palette);
    let line = header_line(HEADER_TITLE, subtitle, status, tone, palette, layout.inner.width);
    let bg = background_style(palette.surface_background);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line).style(bg), layout.inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_right_aligns_status() {
        let palette = ChromePalette::dark();
        let line = header_line("HexVibe", "dark", "Ready", HeaderTone::Ready, &palette, 40);
        let total: usize = line.spans.iter().map(|s| s.content.width()).sum();
        assert_eq!(total, 40);
        assert_eq!(line.spans.last().map(|s| s.content.as_ref()), Some("Ready"));
    }

    #[test]
    fn header_dot_follows_tone() {
        let palette = ChromePalette::dark();
        let busy = header_line("t", "", "AI…", HeaderTone::Busy, &palette, 20);
        assert_eq!(busy.spans[4].style, warning_style(palette.warning));
        let err = header_line("t", "", "x", HeaderTone::Error, &palette, 20);
        assert_eq!(err.spans[4].style, danger_style(palette.danger));
    }
}
