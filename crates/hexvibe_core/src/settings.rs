use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use hexvibe_constant::app::THEME_KEY;

use crate::error::{HexVibeError, Result};
use crate::storage::Storage;

/// Light or dark chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }
}

impl FromStr for Appearance {
    type Err = HexVibeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            _ => Err(HexVibeError::UnknownAppearance(s.to_string())),
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only an exact `"dark"` selects dark; anything else (or a read error) is light.
pub fn load_appearance<S: Storage + ?Sized>(storage: &S) -> Appearance {
    match storage.get(THEME_KEY) {
        Ok(Some(v)) if v == "dark" => Appearance::Dark,
        Ok(_) => Appearance::Light,
        Err(e) => {
            tracing::warn!(error = %e, "theme read failed");
            Appearance::Light
        }
    }
}

pub fn save_appearance<S: Storage + ?Sized>(storage: &mut S, appearance: Appearance) -> Result<()> {
    storage.set(THEME_KEY, appearance.as_str())
}
