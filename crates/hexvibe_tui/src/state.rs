//! TUI state: the palette session plus everything the view needs to render.
//!
//! [TuiState] owns the [PaletteSession]; palette, history and appearance are
//! read from it on every draw. UI-only state (screen, focus, selection,
//! prompt buffer, status line, log lines) lives next to it.

use std::path::PathBuf;
use std::time::Instant;

use hexvibe_core::{Appearance, PaletteSession, Storage};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::theme::ChromePalette;
use crate::utils::MAX_TRACE_LINES;

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Main,
    /// History drawer over the main screen.
    History,
    /// Runtime tracing output (Ctrl+D).
    Logs,
}

/// Where key input goes on the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Palette,
    Prompt,
}

/// Session storage as the TUI holds it: SQLite normally, memory with `--ephemeral`.
pub type SessionStorage = Box<dyn Storage>;

/// TUI application state.
pub struct TuiState {
    /// Palette, history, appearance and AI request state.
    pub session: PaletteSession<SessionStorage>,
    /// Chrome palette for the current appearance.
    pub palette: ChromePalette,
    pub screen: Screen,
    /// Screen to return to when the logs screen closes.
    pub previous_screen: Screen,
    pub focus: Focus,
    /// Selected swatch (0-based).
    pub selected: usize,
    /// Selected row in the history drawer.
    pub history_selected: usize,
    /// AI prompt being edited.
    pub prompt_buffer: String,
    /// Cursor position within prompt_buffer (byte offset, 0..=len).
    pub prompt_cursor: usize,
    /// Status text for the header right side.
    pub status: String,
    /// When set, status is transient and should auto-clear after duration.
    pub status_set_at: Option<Instant>,
    /// True when the current status reports a failure (red dot).
    pub status_is_error: bool,
    /// When the in-flight AI request was sent.
    pub ai_started_at: Option<Instant>,
    /// Where `e` writes `hexvibe-palette.json`. None disables export.
    pub export_dir: Option<PathBuf>,
    /// Random source for regenerate / harmony fill / history load.
    pub rng: StdRng,
    /// Incremented each draw.
    pub frame_count: u64,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Log lines for the logs screen. Newest at end.
    pub trace_lines: Vec<String>,
    /// Scroll offset for the logs view (lines scrolled up from the bottom).
    pub trace_scroll: usize,
}

impl TuiState {
    pub fn new(session: PaletteSession<SessionStorage>) -> Self {
        Self::with_rng(session, StdRng::from_entropy())
    }

    pub fn with_rng(session: PaletteSession<SessionStorage>, rng: StdRng) -> Self {
        let palette = ChromePalette::for_appearance(session.appearance());
        Self {
            session,
            palette,
            screen: Screen::Main,
            previous_screen: Screen::Main,
            focus: Focus::Palette,
            selected: 0,
            history_selected: 0,
            prompt_buffer: String::new(),
            prompt_cursor: 0,
            status: String::new(),
            status_set_at: None,
            status_is_error: false,
            ai_started_at: None,
            export_dir: None,
            rng,
            frame_count: 0,
            needs_redraw: true,
            trace_lines: Vec::new(),
            trace_scroll: 0,
        }
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    /// Transient status, cleared by the run loop after a few seconds.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.status_set_at = Some(Instant::now());
        self.status_is_error = false;
        self.needs_redraw = true;
    }

    pub fn set_error_status(&mut self, text: impl Into<String>) {
        self.set_status(text);
        self.status_is_error = true;
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
        self.status_set_at = None;
        self.status_is_error = false;
        self.needs_redraw = true;
    }

    /// Re-derive chrome colors after an appearance change.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.palette = ChromePalette::for_appearance(appearance);
        self.needs_redraw = true;
    }

    pub fn select_prev(&mut self) {
        let len = self.session.palette().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
        self.needs_redraw = true;
    }

    pub fn select_next(&mut self) {
        let len = self.session.palette().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
        self.needs_redraw = true;
    }

    pub fn history_up(&mut self) {
        self.history_selected = self.history_selected.saturating_sub(1);
        self.needs_redraw = true;
    }

    pub fn history_down(&mut self) {
        let len = self.session.history().len();
        if self.history_selected + 1 < len {
            self.history_selected += 1;
        }
        self.needs_redraw = true;
    }

    /// Keep the history selection inside the list after deletes.
    pub fn clamp_history_selection(&mut self) {
        let len = self.session.history().len();
        self.history_selected = self.history_selected.min(len.saturating_sub(1));
    }

    /// Prompt: insert character at cursor.
    pub fn prompt_insert(&mut self, c: char) {
        self.prompt_buffer.insert(self.prompt_cursor, c);
        self.prompt_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Prompt: delete character before cursor (UTF-8 safe).
    pub fn prompt_backspace(&mut self) {
        if self.prompt_cursor == 0 {
            return;
        }
        let start = prev_boundary(&self.prompt_buffer, self.prompt_cursor);
        self.prompt_buffer.drain(start..self.prompt_cursor);
        self.prompt_cursor = start;
        self.needs_redraw = true;
    }

    /// Prompt: delete character at cursor (forward delete, UTF-8 safe).
    pub fn prompt_delete(&mut self) {
        if self.prompt_cursor >= self.prompt_buffer.len() {
            return;
        }
        let end = next_boundary(&self.prompt_buffer, self.prompt_cursor);
        self.prompt_buffer.drain(self.prompt_cursor..end);
        self.needs_redraw = true;
    }

    pub fn prompt_left(&mut self) {
        self.prompt_cursor = prev_boundary(&self.prompt_buffer, self.prompt_cursor);
        self.needs_redraw = true;
    }

    pub fn prompt_right(&mut self) {
        self.prompt_cursor = next_boundary(&self.prompt_buffer, self.prompt_cursor);
        self.needs_redraw = true;
    }

    pub fn prompt_home(&mut self) {
        self.prompt_cursor = 0;
        self.needs_redraw = true;
    }

    pub fn prompt_end(&mut self) {
        self.prompt_cursor = self.prompt_buffer.len();
        self.needs_redraw = true;
    }

    /// Clear the prompt (Ctrl+U).
    pub fn prompt_clear(&mut self) {
        self.prompt_buffer.clear();
        self.prompt_cursor = 0;
        self.needs_redraw = true;
    }

    /// Append a line to the logs buffer. Drops oldest if over capacity.
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            self.trace_lines.drain(0..self.trace_lines.len() - MAX_TRACE_LINES);
        }
        self.needs_redraw = true;
    }

    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }

    /// Ctrl+D: enter logs, or go back to wherever we were.
    pub fn toggle_logs(&mut self) {
        if self.screen == Screen::Logs {
            self.screen = self.previous_screen;
        } else {
            self.previous_screen = self.screen;
            self.screen = Screen::Logs;
        }
        self.needs_redraw = true;
    }
}

fn prev_boundary(s: &str, at: usize) -> usize {
    s[..at].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_boundary(s: &str, at: usize) -> usize {
    s[at..].chars().next().map(|c| at + c.len_utf8()).unwrap_or(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexvibe_core::MemoryStorage;

    fn state() -> TuiState {
        let mut rng = StdRng::seed_from_u64(7);
        let storage: SessionStorage = Box::new(MemoryStorage::new());
        let session = PaletteSession::open(storage, &mut rng);
        TuiState::with_rng(session, rng)
    }

    #[test]
    fn starts_on_main_with_palette_focus() {
        let s = state();
        assert_eq!(s.screen, Screen::Main);
        assert_eq!(s.focus, Focus::Palette);
        assert_eq!(s.session.palette().len(), 5);
        assert_eq!(s.palette, ChromePalette::for_appearance(Appearance::Light));
    }

    #[test]
    fn selection_wraps() {
        let mut s = state();
        s.select_prev();
        assert_eq!(s.selected, 4);
        s.select_next();
        assert_eq!(s.selected, 0);
    }

    #[test]
    fn prompt_editing_is_utf8_safe() {
        let mut s = state();
        for c in "café au lait".chars() {
            s.prompt_insert(c);
        }
        s.prompt_home();
        for _ in 0..4 {
            s.prompt_right();
        }
        assert_eq!(&s.prompt_buffer[..s.prompt_cursor], "café");
        s.prompt_backspace();
        assert_eq!(s.prompt_buffer, "caf au lait");
        s.prompt_left();
        s.prompt_delete();
        assert_eq!(s.prompt_buffer, "ca au lait");
        s.prompt_end();
        assert_eq!(s.prompt_cursor, s.prompt_buffer.len());
        s.prompt_clear();
        assert!(s.prompt_buffer.is_empty());
        assert_eq!(s.prompt_cursor, 0);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut s = state();
        s.prompt_insert('a');
        s.prompt_home();
        s.prompt_backspace();
        assert_eq!(s.prompt_buffer, "a");
    }

    #[test]
    fn trace_lines_are_capped() {
        let mut s = state();
        for i in 0..MAX_TRACE_LINES + 10 {
            s.push_trace_line(format!("line {i}"));
        }
        assert_eq!(s.trace_lines.len(), MAX_TRACE_LINES);
        assert_eq!(s.trace_lines[0], "line 10");
    }

    #[test]
    fn logs_toggle_returns_to_previous_screen() {
        let mut s = state();
        s.screen = Screen::History;
        s.toggle_logs();
        assert_eq!(s.screen, Screen::Logs);
        s.toggle_logs();
        assert_eq!(s.screen, Screen::History);
    }

    #[test]
    fn error_status_flag_resets_on_plain_status() {
        let mut s = state();
        s.set_error_status("AI request failed");
        assert!(s.status_is_error);
        s.set_status("Saved");
        assert!(!s.status_is_error);
        s.clear_status();
        assert!(s.status.is_empty());
        assert!(s.status_set_at.is_none());
    }

    #[test]
    fn history_selection_stays_in_bounds() {
        let mut s = state();
        s.history_down();
        assert_eq!(s.history_selected, 0);
        s.history_selected = 3;
        s.clamp_history_selection();
        assert_eq!(s.history_selected, 0);
    }
}
