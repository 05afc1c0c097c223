//! Prompt box layout: the AI description input above the shortcut line.

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding},
};

use super::style::{background_style, border_focused_style, border_style, text_muted_style, text_style, warning_style};
use crate::theme::ChromePalette;

/// Horizontal padding inside the prompt block (each side).
pub const INPUT_PADDING_H: u16 = 2;

/// Icon shown at the start of the prompt line.
pub const INPUT_ICON: &str = "✦ ";

/// Shown when the prompt is empty.
pub const INPUT_PLACEHOLDER: &str = "Describe a vibe (e.g. misty forest at dawn) · press / to type";

/// Block for the prompt with rounded border. Focused uses the accent color.
pub fn block_for_input_bordered(palette: &ChromePalette, focused: bool) -> Block<'static> {
    let border = if focused {
        border_focused_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(background_style(palette.surface_background))
        .padding(Padding::new(INPUT_PADDING_H, INPUT_PADDING_H, 0, 0))
}

/// Prompt content line. `cursor` is a byte offset into `buffer` and is only drawn when focused.
pub fn input_line(
    palette: &ChromePalette,
    buffer: &str,
    cursor: usize,
    focused: bool,
    loading: bool,
) -> Line<'static> {
    let icon_style = if loading {
        warning_style(palette.warning)
    } else {
        text_style(palette.text_accent)
    };
    let mut spans = vec![Span::styled(INPUT_ICON.to_string(), icon_style)];

    if buffer.is_empty() && !focused {
        spans.push(Span::styled(
            INPUT_PLACEHOLDER.to_string(),
            text_muted_style(palette.text_muted),
        ));
        return Line::from(spans);
    }

    let text = text_style(palette.text);
    if !focused {
        spans.push(Span::styled(buffer.to_string(), text));
        return Line::from(spans);
    }

    let cursor = cursor.min(buffer.len());
    let (before, after) = buffer.split_at(cursor);
    let mut rest = after.chars();
    let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    spans.push(Span::styled(before.to_string(), text));
    spans.push(Span::styled(under, text.add_modifier(Modifier::REVERSED)));
    spans.push(Span::styled(rest.as_str().to_string(), text));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn placeholder_when_empty_and_unfocused() {
        let p = ChromePalette::dark();
        let line = input_line(&p, "", 0, false, false);
        assert!(plain(&line).contains("Describe a vibe"));
    }

    #[test]
    fn cursor_splits_buffer() {
        let p = ChromePalette::dark();
        let line = input_line(&p, "sunset", 3, true, false);
        assert_eq!(line.spans[1].content, "sun");
        assert_eq!(line.spans[2].content, "s");
        assert!(line.spans[2].style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(line.spans[3].content, "et");
    }

    #[test]
    fn cursor_at_end_draws_block() {
        let p = ChromePalette::dark();
        let line = input_line(&p, "ab", 2, true, false);
        assert_eq!(line.spans[2].content, " ");
    }

    #[test]
    fn utf8_under_cursor() {
        let p = ChromePalette::dark();
        let line = input_line(&p, "café", 3, true, false);
        assert_eq!(line.spans[2].content, "é");
    }
}
