//! TUI view: header (fixed top), swatch strip, detail line, prompt + shortcuts (fixed bottom).
//! The history drawer draws over the swatches; the logs screen replaces everything.

use hexvibe_core::{SavedPalette, luma};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::layouts::{
    HEADER_HEIGHT, FOOTER_HEIGHT, HEADER_STATUS_READY, HeaderTone, PanelLayout, background_style,
    block_for_input_bordered, block_for_panel, bottom_drawer, hex_to_color, input_line, main_splits,
    render_header, render_swatch, selected_row_style, shortcut_inner_rect, shortcut_line, text_muted_style,
    text_style, vertical_split,
};
use crate::state::{Focus, Screen, TuiState};
use crate::theme::ChromePalette;
use crate::utils::{LEFT_PADDING, dynamic_height, scroll_with_buffer, swatch_columns, truncate_ellipsis, window_start};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw the full TUI for the current screen.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect, provider_label: Option<&str>) {
    frame.render_widget(Block::default().style(background_style(state.palette.background)), area);
    match state.screen {
        Screen::Logs => draw_logs(frame, state, area),
        Screen::Main => draw_main(frame, state, area, provider_label),
        Screen::History => {
            draw_main(frame, state, area, provider_label);
            draw_history(frame, state, area);
        }
    }
}

/// Runtime logs screen: tracing output, newest at the bottom. Ctrl+D or Esc to close.
fn draw_logs(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let palette = &state.palette;
    let layout = PanelLayout::bordered(area);
    frame.render_widget(block_for_panel("Runtime logs (Ctrl+D to close)", palette, false), layout.outer);

    let viewport_height = layout.inner.height as usize;
    let content_height = state.trace_lines.len();
    let max_scroll = scroll_with_buffer(usize::MAX, content_height, viewport_height);
    state.trace_scroll = state.trace_scroll.min(max_scroll);
    let start = max_scroll - state.trace_scroll;

    let muted = text_muted_style(palette.text_muted);
    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(start)
        .take(viewport_height)
        .map(|s| Line::from(Span::styled(s.clone(), muted)))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), layout.inner);
}

fn draw_main(frame: &mut Frame, state: &TuiState, area: Rect, provider_label: Option<&str>) {
    let splits = main_splits(area);
    let palette = &state.palette;
    let loading = state.session.is_ai_loading();

    // ---- Header ----
    let subtitle = format!(
        "{} · {}",
        state.session.appearance(),
        provider_label.unwrap_or("no AI provider")
    );
    let (status, tone) = header_status(state, loading);
    render_header(frame, splits.header, palette, &subtitle, &status, tone);

    // ---- Swatches ----
    let slots = state.session.palette().slots();
    for (i, (slot, rect)) in slots.iter().zip(swatch_columns(splits.swatches, slots.len())).enumerate() {
        render_swatch(frame, rect, slot, i, i == state.selected, palette);
    }

    // ---- Detail line ----
    if let Some(line) = detail_line(state) {
        frame.render_widget(Paragraph::new(line), splits.detail);
    }

    // ---- Footer: prompt + shortcuts ----
    let (input_area, shortcut_area) = vertical_split(splits.footer, 3);
    let focused = state.focus == Focus::Prompt && state.screen == Screen::Main;
    let block = block_for_input_bordered(palette, focused);
    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);
    frame.render_widget(
        Paragraph::new(input_line(palette, &state.prompt_buffer, state.prompt_cursor, focused, loading)),
        inner,
    );
    frame.render_widget(
        Paragraph::new(shortcut_line(palette, state.screen, state.focus, loading)),
        shortcut_inner_rect(shortcut_area),
    );
}

fn header_status(state: &TuiState, loading: bool) -> (String, HeaderTone) {
    if loading {
        let frame = SPINNER[(state.frame_count as usize / 2) % SPINNER.len()];
        let text = if state.status.is_empty() {
            "Generating palette…"
        } else {
            state.status.as_str()
        };
        return (format!("{frame} {text}"), HeaderTone::Busy);
    }
    if state.status.is_empty() {
        return (HEADER_STATUS_READY.to_string(), HeaderTone::Ready);
    }
    let tone = if state.status_is_error {
        HeaderTone::Error
    } else {
        HeaderTone::Ready
    };
    (state.status.clone(), tone)
}

/// `#RRGGBB  rgb(..)  hsl(..)  luma ..  locks n/5` for the selected slot.
pub fn detail_line(state: &TuiState) -> Option<Line<'static>> {
    let palette = state.session.palette();
    let slot = palette.slot(state.selected)?;
    let rgb = slot.hex.to_rgb();
    let hsl = slot.hex.to_hsl();
    let chrome = &state.palette;
    let muted = text_muted_style(chrome.text_muted);
    Some(Line::from(vec![
        Span::styled("██ ", text_style(chrome.text).fg(hex_to_color(slot.hex))),
        Span::styled(slot.hex.to_string(), text_style(chrome.text)),
        Span::styled(
            format!(
                "  rgb({}, {}, {})  hsl({:.0}, {:.0}%, {:.0}%)  luma {:.0}",
                rgb.r,
                rgb.g,
                rgb.b,
                hsl.h,
                hsl.s,
                hsl.l,
                luma(rgb)
            ),
            muted,
        ),
        Span::styled(format!("  locks {}/{}", palette.locked_count(), palette.len()), muted),
    ]))
}

fn draw_history(frame: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    let history = state.session.history();
    let body = Rect {
        y: area.y.saturating_add(HEADER_HEIGHT),
        height: area.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT),
        ..area
    };
    let rows = history.len().max(1) as u16;
    let drawer = bottom_drawer(body, dynamic_height(rows + 2, area.height));
    let layout = PanelLayout::bordered(drawer);
    frame.render_widget(Clear, layout.outer);
    let title = format!("History ({}/{})", history.len(), hexvibe_constant::app::HISTORY_LIMIT);
    frame.render_widget(block_for_panel(&title, palette, true), layout.outer);

    if history.is_empty() {
        let line = Line::styled("No saved palettes yet.", text_muted_style(palette.text_muted));
        frame.render_widget(Paragraph::new(line), layout.inner);
        return;
    }

    let viewport = layout.inner.height as usize;
    let start = window_start(state.history_selected, viewport);
    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .skip(start)
        .take(viewport)
        .map(|(i, entry)| history_row(entry, i == state.history_selected, layout.inner.width, palette))
        .collect();
    frame.render_widget(Paragraph::new(lines), layout.inner);
}

/// One drawer row: color chips, name, and save time right-aligned.
pub fn history_row(entry: &SavedPalette, selected: bool, width: u16, palette: &ChromePalette) -> Line<'static> {
    let text = if selected {
        selected_row_style(palette.accent, palette.text)
    } else {
        text_style(palette.text)
    };
    let muted = if selected { text } else { text_muted_style(palette.text_muted) };

    let mut spans = vec![Span::styled(LEFT_PADDING.to_string(), text)];
    for hex in &entry.colors {
        spans.push(Span::styled("██", text.fg(hex_to_color(*hex))));
    }
    let chips = LEFT_PADDING.len() + entry.colors.len() * 2 + 1;

    let when = entry
        .saved_at()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    let room = (width as usize).saturating_sub(chips + when.len() + 2);
    let name = truncate_ellipsis(&entry.name, room);
    let gap = room.saturating_sub(name.chars().count());

    spans.push(Span::styled(" ".to_string(), text));
    spans.push(Span::styled(name, text));
    spans.push(Span::styled(" ".repeat(gap + 1), text));
    spans.push(Span::styled(when, muted));
    spans.push(Span::styled(" ".to_string(), text));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hexvibe_core::{MemoryStorage, PaletteSession};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use unicode_width::UnicodeWidthStr;

    use crate::state::SessionStorage;

    fn state() -> TuiState {
        let mut rng = StdRng::seed_from_u64(11);
        let storage: SessionStorage = Box::new(MemoryStorage::new());
        TuiState::with_rng(PaletteSession::open(storage, &mut rng), rng)
    }

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn detail_line_describes_selected_slot() {
        let mut s = state();
        s.selected = 3;
        let hex = s.session.palette().slots()[3].hex.to_string();
        let text = plain(&detail_line(&s).unwrap());
        assert!(text.contains(&hex));
        assert!(text.contains("rgb("));
        assert!(text.contains("locks 0/5"));
    }

    #[test]
    fn detail_line_none_when_selection_out_of_range() {
        let mut s = state();
        s.selected = 9;
        assert!(detail_line(&s).is_none());
    }

    #[test]
    fn history_row_fits_width() {
        let palette = ChromePalette::dark();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let entry = SavedPalette::new(
            "A very long palette name that will not fit",
            vec!["#112233".parse().unwrap(), "#445566".parse().unwrap()],
            now,
        );
        let line = history_row(&entry, true, 50, &palette);
        let text = plain(&line);
        assert_eq!(text.width(), 50);
        assert!(text.contains("2024-05-01 12:30"));
        assert!(text.contains('…'));
    }

    #[test]
    fn header_status_shows_spinner_while_loading() {
        let mut s = state();
        s.session.begin_ai_request("dusk").unwrap();
        let (text, tone) = header_status(&s, true);
        assert_eq!(tone, HeaderTone::Busy);
        assert!(text.ends_with("Generating palette…"));

        let s = state();
        assert_eq!(header_status(&s, false), (HEADER_STATUS_READY.to_string(), HeaderTone::Ready));
    }

    #[test]
    fn header_status_error_tone() {
        let mut s = state();
        s.set_error_status("Export failed");
        assert_eq!(header_status(&s, false).1, HeaderTone::Error);
    }
}
