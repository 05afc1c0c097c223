//! TUI run loop: terminal setup, event handling, draw, AI round-trips.
//!
//! Key events are read in a dedicated thread so the main loop never blocks on terminal
//! input. AI requests run as tokio tasks; their [AiOutcome] comes back over a channel
//! and is applied on the loop thread, so the session is only ever touched here.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use hexvibe_core::{AiApplied, AiOutcome, HexVibeError, PaletteSession};
use hexvibe_llms::PaletteParaphraser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::runtime::Handle;
use tokio::sync::mpsc as tokio_mpsc;

use crate::keymap::{self, Action};
use crate::state::{Focus, Screen, SessionStorage, TuiState};
use crate::utils::format_duration;
use crate::view;

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything the TUI needs besides the session.
#[derive(Default)]
pub struct TuiOptions {
    /// AI backend. None: the prompt reports that no provider is configured.
    pub paraphraser: Option<PaletteParaphraser>,
    /// Formatted tracing lines for the logs screen (Ctrl+D).
    pub log_rx: Option<tokio_mpsc::Receiver<String>>,
    /// Where `e` writes the export file.
    pub export_dir: Option<PathBuf>,
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Sends AI requests to the tokio runtime and collects their outcomes.
pub struct AiDispatch {
    paraphraser: Option<Arc<PaletteParaphraser>>,
    handle: Handle,
    tx: tokio_mpsc::UnboundedSender<AiOutcome>,
    rx: tokio_mpsc::UnboundedReceiver<AiOutcome>,
}

impl AiDispatch {
    pub fn new(paraphraser: Option<PaletteParaphraser>, handle: Handle) -> Self {
        let (tx, rx) = tokio_mpsc::unbounded_channel();
        Self {
            paraphraser: paraphraser.map(Arc::new),
            handle,
            tx,
            rx,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.paraphraser.is_some()
    }

    /// Human label for the header, e.g. `gemini · gemini-2.5-flash`.
    pub fn label(&self) -> Option<String> {
        self.paraphraser
            .as_ref()
            .map(|p| format!("{} · {}", p.provider_id(), p.model()))
    }

    fn send(&self, prompt: String) -> bool {
        let Some(paraphraser) = self.paraphraser.clone() else {
            return false;
        };
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = paraphraser.request_palette(&prompt).await;
            let _ = tx.send(outcome);
        });
        true
    }

    /// Next finished request, if any. Never blocks.
    pub fn try_recv(&mut self) -> Option<AiOutcome> {
        self.rx.try_recv().ok()
    }
}

/// Run the TUI on the current terminal until the user quits.
///
/// Must be called from inside a multi-threaded tokio runtime: the loop blocks
/// this thread while AI requests run on the runtime's workers.
pub fn run_tui(session: PaletteSession<SessionStorage>, options: TuiOptions) -> anyhow::Result<()> {
    let handle = Handle::try_current()
        .map_err(|e| anyhow::anyhow!("TUI needs a tokio runtime: {e}"))?;
    let mut ai = AiDispatch::new(options.paraphraser, handle);
    let mut state = TuiState::new(session);
    if let Some(dir) = options.export_dir {
        state = state.with_export_dir(dir);
    }
    if !ai.is_configured() {
        state.push_trace_line("[log] No AI provider configured; prompt disabled. Run `hexvibe config api`.".to_string());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(ai = ai.label().as_deref().unwrap_or("none"), "TUI started");
    let result = run_loop(&mut terminal, &mut state, &mut ai, options.log_rx);

    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    ai: &mut AiDispatch,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false)
                && let Ok(ev) = event::read()
                && key_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    let provider_label = ai.label();
    loop {
        // Multi-line log records become separate lines on the logs screen.
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }

        while let Some(outcome) = ai.try_recv() {
            finish_ai(state, outcome);
        }

        if let Some(set_at) = state.status_set_at
            && !state.session.is_ai_loading()
            && set_at.elapsed() > STATUS_TIMEOUT
        {
            state.clear_status();
        }

        // Keep the spinner moving while a request is out.
        if state.session.is_ai_loading() {
            state.needs_redraw = true;
        }

        if state.needs_redraw {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area(), provider_label.as_deref()))?;
            state.needs_redraw = false;
        }

        match key_rx.try_recv() {
            Ok(Event::Key(e)) => {
                if e.kind != KeyEventKind::Press {
                    continue;
                }
                let action = keymap::resolve(&e, state.screen, state.focus);
                if apply_action(state, action, ai) == Flow::Quit {
                    break;
                }
            }
            Ok(Event::Resize(_, _)) => state.needs_redraw = true,
            Ok(_) => {}
            Err(_) => std::thread::sleep(Duration::from_millis(50)),
        }
    }
    Ok(())
}

/// Apply one resolved key action to the state.
pub fn apply_action(state: &mut TuiState, action: Action, ai: &mut AiDispatch) -> Flow {
    match action {
        Action::Quit => return Flow::Quit,
        Action::ToggleLogs => state.toggle_logs(),
        Action::None => {}

        Action::Regenerate => {
            state.session.regenerate(&mut state.rng);
            state.needs_redraw = true;
        }
        Action::ToggleLock(index) => {
            if index < state.session.palette().len() {
                state.selected = index;
            }
            toggle_lock(state, index);
        }
        Action::ToggleLockSelected => toggle_lock(state, state.selected),
        Action::SelectPrev => state.select_prev(),
        Action::SelectNext => state.select_next(),
        Action::CopySelected => copy_selected(state),
        Action::Harmony(rule) => {
            state.session.apply_harmony(rule, &mut state.rng);
            state.set_status(format!("Applied {rule} harmony"));
        }
        Action::Save => match state.session.save_current(Utc::now()) {
            Ok(saved) => state.set_status(format!("Saved \"{}\"", saved.name)),
            Err(e) => report(state, "Save failed", &e),
        },
        Action::OpenHistory => {
            state.screen = Screen::History;
            state.history_selected = 0;
            if state.session.history().is_empty() {
                state.set_status("No saved palettes yet (press s to save)");
            }
            state.needs_redraw = true;
        }
        Action::Export => export(state),
        Action::ToggleAppearance => match state.session.toggle_appearance() {
            Ok(appearance) => {
                state.set_appearance(appearance);
                state.set_status(format!("{appearance} mode"));
            }
            Err(e) => report(state, "Could not save theme", &e),
        },
        Action::FocusPrompt => {
            state.focus = Focus::Prompt;
            state.prompt_end();
        }
        Action::FocusPalette => {
            state.focus = Focus::Palette;
            state.needs_redraw = true;
        }

        Action::PromptInsert(c) => state.prompt_insert(c),
        Action::PromptBackspace => state.prompt_backspace(),
        Action::PromptDelete => state.prompt_delete(),
        Action::PromptLeft => state.prompt_left(),
        Action::PromptRight => state.prompt_right(),
        Action::PromptHome => state.prompt_home(),
        Action::PromptEnd => state.prompt_end(),
        Action::PromptClear => state.prompt_clear(),
        Action::SubmitPrompt => submit_prompt(state, ai),

        Action::HistoryUp => state.history_up(),
        Action::HistoryDown => state.history_down(),
        Action::HistoryLoad => load_selected(state),
        Action::HistoryDelete => delete_selected(state),
        Action::CloseHistory => {
            state.screen = Screen::Main;
            state.needs_redraw = true;
        }

        Action::LogsScrollUp(n) => state.trace_scroll_up(n),
        Action::LogsScrollDown(n) => state.trace_scroll_down(n),
        Action::CloseLogs => state.toggle_logs(),
    }
    Flow::Continue
}

fn report(state: &mut TuiState, what: &str, err: &HexVibeError) {
    tracing::error!(error = %err, "{what}");
    state.set_error_status(format!("{what}: {err}"));
}

fn toggle_lock(state: &mut TuiState, index: usize) {
    match state.session.toggle_lock(index) {
        Ok(true) => state.set_status(format!("Locked slot {}", index + 1)),
        Ok(false) => state.set_status(format!("Unlocked slot {}", index + 1)),
        Err(e) => state.set_error_status(e.to_string()),
    }
}

fn copy_selected(state: &mut TuiState) {
    let Some(slot) = state.session.palette().slot(state.selected) else {
        return;
    };
    let hex = slot.hex.to_string();
    match cli_clipboard::set_contents(hex.clone()) {
        Ok(()) => state.set_status(format!("Copied {hex}")),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            state.set_error_status(format!("Clipboard unavailable ({hex})"));
        }
    }
}

fn export(state: &mut TuiState) {
    let Some(dir) = state.export_dir.clone() else {
        state.set_error_status("Export disabled in this session");
        return;
    };
    let doc = state.session.export(Utc::now());
    match doc.write_to(&dir) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "palette exported");
            state.set_status(format!("Exported to {}", path.display()));
        }
        Err(e) => report(state, "Export failed", &e),
    }
}

fn submit_prompt(state: &mut TuiState, ai: &mut AiDispatch) {
    if !ai.is_configured() {
        state.set_error_status("No AI provider configured (run `hexvibe config api`)");
        return;
    }
    match state.session.begin_ai_request(&state.prompt_buffer) {
        Ok(prompt) => {
            if ai.send(prompt) {
                state.ai_started_at = Some(Instant::now());
                state.set_status("Generating palette…");
            }
        }
        Err(HexVibeError::AiBusy) => state.set_status("AI request already in progress"),
        Err(HexVibeError::EmptyPrompt) => state.set_status("Describe a vibe first"),
        Err(e) => state.set_error_status(e.to_string()),
    }
}

/// Apply a finished AI request. Failures only reach the logs; the status
/// line just points there. The prompt is cleared whatever the outcome.
pub fn finish_ai(state: &mut TuiState, outcome: AiOutcome) {
    let elapsed = state.ai_started_at.take().map(|t| t.elapsed());
    state.prompt_clear();
    match state.session.finish_ai_request(outcome, Utc::now()) {
        Ok(AiApplied::Applied { saved }) => {
            let took = elapsed.map(format_duration).unwrap_or_default();
            state.set_status(format!("AI palette applied {took} · saved as \"{}\"", saved.name));
        }
        Ok(AiApplied::Unchanged { .. }) => {
            state.set_error_status("No palette change · details in logs (Ctrl+D)");
        }
        Err(e) => report(state, "Could not save AI palette", &e),
    }
}

fn load_selected(state: &mut TuiState) {
    let Some(entry) = state.session.history().get(state.history_selected).cloned() else {
        return;
    };
    match state.session.load_saved(&entry.id, &mut state.rng) {
        Ok(()) => {
            state.screen = Screen::Main;
            state.set_status(format!("Loaded \"{}\"", entry.name));
        }
        Err(e) => report(state, "Load failed", &e),
    }
}

fn delete_selected(state: &mut TuiState) {
    let Some(entry) = state.session.history().get(state.history_selected).cloned() else {
        return;
    };
    match state.session.delete_saved(&entry.id) {
        Ok(_) => {
            state.clamp_history_selection();
            state.set_status(format!("Deleted \"{}\"", entry.name));
        }
        Err(e) => report(state, "Delete failed", &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexvibe_core::{Appearance, HarmonyRule, HexColor, MemoryStorage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state() -> TuiState {
        let mut rng = StdRng::seed_from_u64(42);
        let storage: SessionStorage = Box::new(MemoryStorage::new());
        let session = PaletteSession::open(storage, &mut rng);
        TuiState::with_rng(session, rng)
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread().build().unwrap()
    }

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    #[test]
    fn quit_stops_loop() {
        let rt = runtime();
        let mut ai = AiDispatch::new(None, rt.handle().clone());
        let mut s = state();
        assert_eq!(apply_action(&mut s, Action::Quit, &mut ai), Flow::Quit);
        assert_eq!(apply_action(&mut s, Action::None, &mut ai), Flow::Continue);
    }

    #[test]
    fn regenerate_keeps_locked_slot() {
        let rt = runtime();
        let mut ai = AiDispatch::new(None, rt.handle().clone());
        let mut s = state();
        apply_action(&mut s, Action::ToggleLock(2), &mut ai);
        assert_eq!(s.selected, 2);
        assert_eq!(s.status, "Locked slot 3");
        let locked = s.session.palette().slots()[2].hex;
        for _ in 0..5 {
            apply_action(&mut s, Action::Regenerate, &mut ai);
        }
        assert_eq!(s.session.palette().slots()[2].hex, locked);
    }

    #[test]
    fn harmony_sets_status() {
        let rt = runtime();
        let mut ai = AiDispatch::new(None, rt.handle().clone());
        let mut s = state();
        apply_action(&mut s, Action::Harmony(HarmonyRule::Triadic), &mut ai);
        assert_eq!(s.status, "Applied triadic harmony");
    }

    #[test]
    fn save_open_load_and_delete_history() {
        let rt = runtime();
        let mut ai = AiDispatch::new(None, rt.handle().clone());
        let mut s = state();
        apply_action(&mut s, Action::Save, &mut ai);
        let saved_colors = s.session.palette().colors();
        apply_action(&mut s, Action::Regenerate, &mut ai);

        apply_action(&mut s, Action::OpenHistory, &mut ai);
        assert_eq!(s.screen, Screen::History);
        apply_action(&mut s, Action::HistoryLoad, &mut ai);
        assert_eq!(s.screen, Screen::Main);
        assert_eq!(s.session.palette().colors(), saved_colors);

        apply_action(&mut s, Action::OpenHistory, &mut ai);
        apply_action(&mut s, Action::HistoryDelete, &mut ai);
        assert!(s.session.history().is_empty());
        assert_eq!(s.history_selected, 0);
        apply_action(&mut s, Action::HistoryDelete, &mut ai);
        apply_action(&mut s, Action::CloseHistory, &mut ai);
        assert_eq!(s.screen, Screen::Main);
    }

    #[test]
    fn appearance_toggle_updates_chrome() {
        let rt = runtime();
        let mut ai = AiDispatch::new(None, rt.handle().clone());
        let mut s = state();
        apply_action(&mut s, Action::ToggleAppearance, &mut ai);
        assert_eq!(s.session.appearance(), Appearance::Dark);
        assert_eq!(s.palette, crate::theme::ChromePalette::dark());
    }

    #[test]
    fn export_without_dir_reports_error() {
        let rt = runtime();
        let mut ai = AiDispatch::new(None, rt.handle().clone());
        let mut s = state();
        apply_action(&mut s, Action::Export, &mut ai);
        assert!(s.status_is_error);
    }

    #[test]
    fn export_writes_file() {
        let rt = runtime();
        let mut ai = AiDispatch::new(None, rt.handle().clone());
        let dir = tempfile::tempdir().unwrap();
        let mut s = state().with_export_dir(dir.path());
        apply_action(&mut s, Action::Export, &mut ai);
        assert!(!s.status_is_error, "{}", s.status);
        assert!(dir.path().join("hexvibe-palette.json").exists());
    }

    #[test]
    fn submit_without_provider_is_rejected() {
        let rt = runtime();
        let mut ai = AiDispatch::new(None, rt.handle().clone());
        let mut s = state();
        s.prompt_buffer = "ocean".to_string();
        apply_action(&mut s, Action::SubmitPrompt, &mut ai);
        assert!(s.status_is_error);
        assert!(!s.session.is_ai_loading());
    }

    #[test]
    fn failure_points_to_logs() {
        let mut s = state();
        s.session.begin_ai_request("first").unwrap();
        finish_ai(&mut s, AiOutcome::Failure("timeout".into()));
        assert!(!s.session.is_ai_loading());
        assert!(s.status.contains("logs"));
    }

    #[test]
    fn prompt_cleared_after_any_outcome() {
        let mut s = state();
        for outcome in [
            AiOutcome::Failure("timeout".into()),
            AiOutcome::Success(vec![hex("#123456")]),
        ] {
            s.prompt_buffer = "misty harbor".to_string();
            s.prompt_cursor = s.prompt_buffer.len();
            s.session.begin_ai_request(&s.prompt_buffer.clone()).unwrap();
            finish_ai(&mut s, outcome);
            assert!(s.prompt_buffer.is_empty());
            assert_eq!(s.prompt_cursor, 0);
        }
    }

    #[test]
    fn successful_outcome_applies_and_saves() {
        let mut s = state();
        s.session.begin_ai_request("sunset").unwrap();
        s.ai_started_at = Some(Instant::now());
        finish_ai(&mut s, AiOutcome::Success(vec![hex("#FF5E5B"), hex("#D8D8D8")]));
        assert_eq!(s.session.palette().slots()[0].hex, hex("#FF5E5B"));
        assert_eq!(s.session.palette().slots()[1].hex, hex("#D8D8D8"));
        assert_eq!(s.session.history().len(), 1);
        assert!(s.status.starts_with("AI palette applied"));
        assert!(s.ai_started_at.is_none());
    }

    #[test]
    fn failed_outcome_leaves_palette() {
        let mut s = state();
        let before = s.session.palette().clone();
        s.session.begin_ai_request("sunset").unwrap();
        finish_ai(&mut s, AiOutcome::Empty);
        assert_eq!(s.session.palette(), &before);
        assert!(s.session.history().is_empty());
        assert!(s.status_is_error);
    }

    #[test]
    fn focus_prompt_moves_cursor_to_end() {
        let rt = runtime();
        let mut ai = AiDispatch::new(None, rt.handle().clone());
        let mut s = state();
        s.prompt_buffer = "neon".to_string();
        apply_action(&mut s, Action::FocusPrompt, &mut ai);
        assert_eq!(s.focus, Focus::Prompt);
        assert_eq!(s.prompt_cursor, 4);
        apply_action(&mut s, Action::PromptInsert(' '), &mut ai);
        assert_eq!(s.prompt_buffer, "neon ");
        apply_action(&mut s, Action::FocusPalette, &mut ai);
        assert_eq!(s.focus, Focus::Palette);
    }
}
