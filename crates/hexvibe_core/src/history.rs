//! Saved palettes persisted as one JSON array under `hexvibe_history`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hexvibe_constant::app::{HISTORY_KEY, HISTORY_LIMIT};

use crate::color::HexColor;
use crate::error::Result;
use crate::storage::Storage;

/// Immutable snapshot of a palette. Field names match the persisted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub id: String,
    pub name: String,
    pub colors: Vec<HexColor>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl SavedPalette {
    pub fn new(name: impl Into<String>, colors: Vec<HexColor>, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            colors,
            timestamp: now.timestamp_millis(),
        }
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// `Palette {n}` where `n` is one past the current history length.
pub fn default_name(history_len: usize) -> String {
    format!("Palette {}", history_len + 1)
}

pub struct HistoryStore<'a, S: Storage + ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: Storage + ?Sized> HistoryStore<'a, S> {
    pub fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// Newest first. Missing or unreadable data reads as an empty history.
    pub fn load(&self) -> Vec<SavedPalette> {
        let raw = match self.storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "history read failed");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<SavedPalette>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "stored history is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Persists at most `HISTORY_LIMIT` entries; returns what was written.
    pub fn save(&mut self, mut list: Vec<SavedPalette>) -> Result<Vec<SavedPalette>> {
        list.truncate(HISTORY_LIMIT);
        let json = serde_json::to_string(&list)?;
        self.storage.set(HISTORY_KEY, &json)?;
        Ok(list)
    }

    pub fn push(&mut self, entry: SavedPalette) -> Result<Vec<SavedPalette>> {
        let mut list = self.load();
        list.insert(0, entry);
        self.save(list)
    }

    /// Returns whether an entry with `id` existed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let mut list = self.load();
        let before = list.len();
        list.retain(|p| p.id != id);
        if list.len() == before {
            return Ok(false);
        }
        self.save(list)?;
        Ok(true)
    }

    pub fn find(&self, id: &str) -> Option<SavedPalette> {
        self.load().into_iter().find(|p| p.id == id)
    }
}
