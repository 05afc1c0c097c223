//! Application state shared by the TUI and CLI: palette, cached history,
//! appearance and the single in-flight AI request.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{HarmonyRule, HexColor};
use crate::error::{HexVibeError, Result};
use crate::export::PaletteExport;
use crate::history::{HistoryStore, SavedPalette, default_name};
use crate::palette::PaletteState;
use crate::settings::{Appearance, load_appearance, save_appearance};
use crate::storage::Storage;

/// Result of one AI palette request, as seen by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiOutcome {
    Success(Vec<HexColor>),
    /// The model answered but no usable colors came back.
    Empty,
    Failure(String),
}

impl AiOutcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        AiOutcome::Failure(reason.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AiRequestState {
    #[default]
    Idle,
    Loading { prompt: String },
}

impl AiRequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AiRequestState::Loading { .. })
    }
}

/// What `finish_ai_request` did to the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiApplied {
    /// Palette updated and auto-saved to history.
    Applied { saved: SavedPalette },
    Unchanged { reason: String },
}

pub struct PaletteSession<S: Storage> {
    palette: PaletteState,
    history: Vec<SavedPalette>,
    appearance: Appearance,
    ai: AiRequestState,
    storage: S,
}

impl<S: Storage> PaletteSession<S> {
    /// Loads history and appearance from `storage`; starts from a random palette.
    pub fn open<R: Rng + ?Sized>(mut storage: S, rng: &mut R) -> Self {
        let history = HistoryStore::new(&mut storage).load();
        let appearance = load_appearance(&storage);
        tracing::debug!(history = history.len(), appearance = %appearance, "session opened");
        Self {
            palette: PaletteState::random(rng),
            history,
            appearance,
            ai: AiRequestState::Idle,
            storage,
        }
    }

    pub fn palette(&self) -> &PaletteState {
        &self.palette
    }

    pub fn history(&self) -> &[SavedPalette] {
        &self.history
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn ai_state(&self) -> &AiRequestState {
        &self.ai
    }

    pub fn is_ai_loading(&self) -> bool {
        self.ai.is_loading()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.palette = self.palette.regenerate(rng);
    }

    /// Returns the slot's new lock flag.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool> {
        self.palette = self.palette.toggle_lock(index)?;
        Ok(self.palette.slots()[index].locked)
    }

    pub fn apply_harmony<R: Rng + ?Sized>(&mut self, rule: HarmonyRule, rng: &mut R) {
        self.palette = self.palette.apply_harmony(rule, rng);
        tracing::debug!(rule = %rule, "harmony applied");
    }

    /// Saves under the default `Palette {n}` name.
    pub fn save_current(&mut self, now: DateTime<Utc>) -> Result<SavedPalette> {
        let name = default_name(self.history.len());
        self.save_current_as(name, now)
    }

    pub fn save_current_as(&mut self, name: impl Into<String>, now: DateTime<Utc>) -> Result<SavedPalette> {
        let saved = SavedPalette::new(name, self.palette.colors(), now);
        self.history = HistoryStore::new(&mut self.storage).push(saved.clone())?;
        tracing::info!(id = %saved.id, name = %saved.name, "palette saved");
        Ok(saved)
    }

    /// Persists `palette` to history first; the session only changes once the write succeeded.
    fn commit_saved(&mut self, palette: PaletteState, now: DateTime<Utc>) -> Result<SavedPalette> {
        let saved = SavedPalette::new(default_name(self.history.len()), palette.colors(), now);
        let history = HistoryStore::new(&mut self.storage).push(saved.clone())?;
        self.palette = palette;
        self.history = history;
        tracing::info!(id = %saved.id, name = %saved.name, "palette saved");
        Ok(saved)
    }

    /// Replaces the palette with a saved one; all slots unlocked.
    pub fn load_saved<R: Rng + ?Sized>(&mut self, id: &str, rng: &mut R) -> Result<()> {
        let saved = self
            .history
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| HexVibeError::PaletteNotFound(id.to_string()))?;
        self.palette = PaletteState::with_loaded_colors(&saved.colors, rng);
        Ok(())
    }

    /// Returns whether the entry existed.
    pub fn delete_saved(&mut self, id: &str) -> Result<bool> {
        let mut store = HistoryStore::new(&mut self.storage);
        let existed = store.delete(id)?;
        self.history = store.load();
        Ok(existed)
    }

    pub fn toggle_appearance(&mut self) -> Result<Appearance> {
        let next = self.appearance.toggle();
        save_appearance(&mut self.storage, next)?;
        self.appearance = next;
        Ok(next)
    }

    pub fn export(&self, now: DateTime<Utc>) -> PaletteExport {
        PaletteExport::dated(self.palette.colors(), now)
    }

    /// Marks a request as in flight and returns the trimmed prompt to send.
    pub fn begin_ai_request(&mut self, prompt: &str) -> Result<String> {
        if self.ai.is_loading() {
            return Err(HexVibeError::AiBusy);
        }
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(HexVibeError::EmptyPrompt);
        }
        self.ai = AiRequestState::Loading {
            prompt: prompt.to_string(),
        };
        Ok(prompt.to_string())
    }

    /// Always returns to idle. Only a non-empty success touches the palette.
    pub fn finish_ai_request(&mut self, outcome: AiOutcome, now: DateTime<Utc>) -> Result<AiApplied> {
        let prompt = match std::mem::take(&mut self.ai) {
            AiRequestState::Loading { prompt } => prompt,
            AiRequestState::Idle => String::new(),
        };
        match outcome {
            AiOutcome::Success(colors) if !colors.is_empty() => {
                let saved = self.commit_saved(self.palette.apply_ai_colors(&colors), now)?;
                tracing::info!(prompt = %prompt, colors = colors.len(), "AI palette applied");
                Ok(AiApplied::Applied { saved })
            }
            AiOutcome::Success(_) | AiOutcome::Empty => {
                tracing::warn!(prompt = %prompt, "AI returned no usable colors");
                Ok(AiApplied::Unchanged {
                    reason: "AI returned no colors".to_string(),
                })
            }
            AiOutcome::Failure(reason) => {
                tracing::error!(prompt = %prompt, reason = %reason, "AI palette request failed");
                Ok(AiApplied::Unchanged { reason })
            }
        }
    }
}
