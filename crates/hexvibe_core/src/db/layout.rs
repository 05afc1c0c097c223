//! Data dir layout (`~/.hexvibe` unless overridden).
//!
//! - `hexvibe.db` + WAL: string key/value table (history, theme, provider config).
//! - `logs/`, `exports/`: subdirs for log files and exported palettes.
//! - `env`: file synced from the uppercase config keys for `source ~/.hexvibe/env`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use hexvibe_constant::app::{DB_FILE, ENV_FILE, EXPORTS_DIR, LOGS_DIR};

/// Default data dir: `$HEXVIBE_DATA_DIR`, else `~/.hexvibe`, else `./.hexvibe`.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(hexvibe_constant::app::DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(hexvibe_constant::app::DATA_DIR)
}

/// Ensures `data_dir`, `data_dir/logs`, `data_dir/exports` exist; returns path to hexvibe.db.
pub fn ensure_data_dir(data_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir).context("create data dir")?;
    std::fs::create_dir_all(data_dir.join(LOGS_DIR)).context("create logs dir")?;
    std::fs::create_dir_all(data_dir.join(EXPORTS_DIR)).context("create exports dir")?;
    Ok(data_dir.join(DB_FILE))
}
