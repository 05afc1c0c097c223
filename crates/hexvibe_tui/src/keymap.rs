//! Key resolution: a pure map from a key event plus UI context to an [Action].
//!
//! Kept free of terminal and session state so every binding is testable.
//! The run loop applies the resulting action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hexvibe_core::HarmonyRule;

use crate::state::{Focus, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleLogs,

    // Main, palette focus
    Regenerate,
    ToggleLock(usize),
    ToggleLockSelected,
    SelectPrev,
    SelectNext,
    CopySelected,
    Harmony(HarmonyRule),
    Save,
    OpenHistory,
    Export,
    ToggleAppearance,
    FocusPrompt,

    // Main, prompt focus
    FocusPalette,
    PromptInsert(char),
    PromptBackspace,
    PromptDelete,
    PromptLeft,
    PromptRight,
    PromptHome,
    PromptEnd,
    PromptClear,
    SubmitPrompt,

    // History drawer
    HistoryUp,
    HistoryDown,
    HistoryLoad,
    HistoryDelete,
    CloseHistory,

    // Logs
    LogsScrollUp(usize),
    LogsScrollDown(usize),
    CloseLogs,

    None,
}

pub fn resolve(key: &KeyEvent, screen: Screen, focus: Focus) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Char('d') if ctrl => return Action::ToggleLogs,
        _ => {}
    }

    match screen {
        Screen::Logs => resolve_logs(key),
        Screen::History => resolve_history(key),
        Screen::Main => match focus {
            Focus::Palette => resolve_palette(key, ctrl),
            Focus::Prompt => resolve_prompt(key, ctrl),
        },
    }
}

fn resolve_palette(key: &KeyEvent, ctrl: bool) -> Action {
    if ctrl {
        return Action::None;
    }
    match key.code {
        KeyCode::Char(' ') => Action::Regenerate,
        KeyCode::Char(c @ '1'..='5') => Action::ToggleLock(c as usize - '1' as usize),
        KeyCode::Left => Action::SelectPrev,
        KeyCode::Right => Action::SelectNext,
        KeyCode::Char('l') => Action::ToggleLockSelected,
        KeyCode::Char('y') => Action::CopySelected,
        KeyCode::Char('a') => Action::Harmony(HarmonyRule::Analogous),
        KeyCode::Char('c') => Action::Harmony(HarmonyRule::Complementary),
        KeyCode::Char('t') => Action::Harmony(HarmonyRule::Triadic),
        KeyCode::Char('m') => Action::Harmony(HarmonyRule::Monochromatic),
        KeyCode::Char('s') => Action::Save,
        KeyCode::Char('h') => Action::OpenHistory,
        KeyCode::Char('e') => Action::Export,
        KeyCode::Char('d') => Action::ToggleAppearance,
        KeyCode::Char('/') | KeyCode::Char('i') => Action::FocusPrompt,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

/// Every printable character edits the prompt, space included.
fn resolve_prompt(key: &KeyEvent, ctrl: bool) -> Action {
    match key.code {
        KeyCode::Char('u') if ctrl => Action::PromptClear,
        KeyCode::Char('a') if ctrl => Action::PromptHome,
        KeyCode::Char('e') if ctrl => Action::PromptEnd,
        KeyCode::Char(_) if ctrl => Action::None,
        KeyCode::Char(c) => Action::PromptInsert(c),
        KeyCode::Enter => Action::SubmitPrompt,
        KeyCode::Esc => Action::FocusPalette,
        KeyCode::Backspace => Action::PromptBackspace,
        KeyCode::Delete => Action::PromptDelete,
        KeyCode::Left => Action::PromptLeft,
        KeyCode::Right => Action::PromptRight,
        KeyCode::Home => Action::PromptHome,
        KeyCode::End => Action::PromptEnd,
        _ => Action::None,
    }
}

fn resolve_history(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::HistoryUp,
        KeyCode::Down | KeyCode::Char('j') => Action::HistoryDown,
        KeyCode::Enter => Action::HistoryLoad,
        KeyCode::Char('x') | KeyCode::Delete => Action::HistoryDelete,
        KeyCode::Esc | KeyCode::Char('h') => Action::CloseHistory,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

fn resolve_logs(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Up => Action::LogsScrollUp(1),
        KeyCode::Down => Action::LogsScrollDown(1),
        KeyCode::PageUp => Action::LogsScrollUp(10),
        KeyCode::PageDown => Action::LogsScrollDown(10),
        KeyCode::Esc => Action::CloseLogs,
        _ => Action::None,
    }
}
