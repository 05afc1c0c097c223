//! JSON export of the current or a saved palette.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use hexvibe_constant::app::{EXPORT_FILE_STEM, EXPORT_NAME_PREFIX};

use crate::color::HexColor;
use crate::error::Result;
use crate::history::SavedPalette;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteExport {
    pub name: String,
    /// ISO-8601 UTC with milliseconds, e.g. `2024-05-01T12:00:00.000Z`.
    pub exported_at: String,
    pub colors: Vec<HexColor>,
}

impl PaletteExport {
    pub fn new(name: impl Into<String>, colors: Vec<HexColor>, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            exported_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            colors,
        }
    }

    /// Named `HexVibe Palette {YYYY-MM-DD}`.
    pub fn dated(colors: Vec<HexColor>, now: DateTime<Utc>) -> Self {
        Self::new(default_export_name(now), colors, now)
    }

    pub fn from_saved(saved: &SavedPalette, now: DateTime<Utc>) -> Self {
        Self::new(saved.name.clone(), saved.colors.clone(), now)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes `<dir>/hexvibe-palette.json`, replacing any earlier export.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(export_file_name());
        std::fs::write(&path, self.to_json_pretty()?)?;
        tracing::info!(path = %path.display(), colors = self.colors.len(), "palette exported");
        Ok(path)
    }
}

pub fn default_export_name(now: DateTime<Utc>) -> String {
    format!("{} {}", EXPORT_NAME_PREFIX, now.format("%Y-%m-%d"))
}

pub fn export_file_name() -> String {
    format!("{EXPORT_FILE_STEM}.json")
}
