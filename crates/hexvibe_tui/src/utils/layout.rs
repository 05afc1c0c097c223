//! Layout helpers for Rects and lines.
//!
//! Use these with [ratatui::layout::Rect] to apply padding, compute
//! dynamic heights and lay the swatch strip out.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::utils::constants::*;

/// Apply horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

/// Apply horizontal padding with a custom amount.
#[inline]
pub fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(pad),
        y: area.y,
        width: area.width.saturating_sub(pad.saturating_mul(2)),
        height: area.height,
    }
}

/// Apply padding on all four sides.
#[inline]
pub fn padding(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(horizontal),
        y: area.y.saturating_add(vertical),
        width: area.width.saturating_sub(horizontal.saturating_mul(2)),
        height: area.height.saturating_sub(vertical.saturating_mul(2)),
    }
}

/// Clamp height for popups between [MIN_COMPONENT_HEIGHT] and
/// [POPUP_MAX_HEIGHT_PERCENT] of `terminal_height`.
pub fn dynamic_height(desired_height: u16, terminal_height: u16) -> u16 {
    let max_h = (terminal_height as f32 * POPUP_MAX_HEIGHT_PERCENT) as u16;
    let max_h = max_h.max(MIN_COMPONENT_HEIGHT);
    desired_height.clamp(MIN_COMPONENT_HEIGHT, max_h)
}

/// Split `area` into `count` equal columns separated by [SWATCH_GAP].
/// The last column absorbs the remainder. Empty when `count` is zero.
pub fn swatch_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as u16;
    let gaps = SWATCH_GAP.saturating_mul(n.saturating_sub(1));
    let usable = area.width.saturating_sub(gaps);
    let base = usable / n;
    let mut x = area.x;
    (0..n)
        .map(|i| {
            let width = if i + 1 == n {
                area.x.saturating_add(area.width).saturating_sub(x)
            } else {
                base
            };
            let rect = Rect {
                x,
                y: area.y,
                width,
                height: area.height,
            };
            x = x.saturating_add(base).saturating_add(SWATCH_GAP);
            rect
        })
        .collect()
}

/// Build a single line with left label, flexible spacing, and right-aligned value.
pub fn right_aligned_row(
    label: &str,
    value: &str,
    width: u16,
    label_style: Style,
    value_style: Style,
) -> Line<'static> {
    let label_len = label.width() as u16;
    let value_len = value.width() as u16;
    let right_pad = HORIZONTAL_PADDING;
    let gap = width.saturating_sub(label_len + value_len + right_pad);

    Line::from(vec![
        Span::styled(label.to_string(), label_style),
        Span::raw(" ".repeat(gap as usize)),
        Span::styled(value.to_string(), value_style),
    ])
}

/// Compute scroll offset: clamp so we never skip past the end of content.
pub fn scroll_with_buffer(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    let max_offset = content_height.saturating_sub(viewport_height);
    offset.min(max_offset)
}

/// First visible row so that `selected` stays inside a `viewport_height` window.
pub fn window_start(selected: usize, viewport_height: usize) -> usize {
    if viewport_height == 0 {
        return selected;
    }
    selected.saturating_sub(viewport_height - 1)
}
