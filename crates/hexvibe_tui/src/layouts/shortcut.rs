//! Shortcut hint layout: fixed line below the prompt (muted style), context-aware hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::text_muted_style;
use crate::state::{Focus, Screen};
use crate::theme::ChromePalette;

/// Horizontal inset so hints align with the prompt content (border + padding).
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// Rect for the shortcut line, aligned with the prompt content above.
pub fn shortcut_inner_rect(area: Rect) -> Rect {
    let inset = SHORTCUT_INSET_H;
    let w = area.width.saturating_sub(inset.saturating_mul(2));
    Rect {
        x: area.x.saturating_add(inset),
        y: area.y,
        width: w,
        height: area.height,
    }
}

/// Hint text for the current screen and focus.
pub fn shortcut_hint(screen: Screen, focus: Focus, loading: bool) -> &'static str {
    match (screen, focus) {
        (Screen::Logs, _) => "↑↓: scroll  ·  Esc/Ctrl+D: close",
        (Screen::History, _) => "↑↓: select  ·  Enter: load  ·  x: delete  ·  Esc: close",
        (Screen::Main, Focus::Prompt) if loading => "Generating…  ·  Esc: back to palette  ·  Ctrl+C: quit",
        (Screen::Main, Focus::Prompt) => "Enter: generate  ·  Ctrl+U: clear  ·  Esc: back to palette",
        (Screen::Main, Focus::Palette) => {
            "Space: regenerate  ·  1-5/l: lock  ·  a/c/t/m: harmony  ·  y: copy  ·  s: save  ·  h: history  ·  e: export  ·  d: theme  ·  /: prompt  ·  q: quit"
        }
    }
}

pub fn shortcut_line(palette: &ChromePalette, screen: Screen, focus: Focus, loading: bool) -> Line<'static> {
    Line::from(vec![Span::styled(
        shortcut_hint(screen, focus, loading).to_string(),
        text_muted_style(palette.text_muted),
    )])
}
