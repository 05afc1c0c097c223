//! Application metadata constants

pub const NAME: &str = "hexvibe";
pub const DISPLAY_NAME: &str = "HexVibe";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Color palette generator with harmonies, history and AI palettes";

/// Directory name for HexVibe data under the home directory
pub const DATA_DIR: &str = ".hexvibe";
/// Env var that overrides the data directory
pub const DATA_DIR_ENV: &str = "HEXVIBE_DATA_DIR";
/// Basename of the key-value store (SQLite creates .db-wal and .db-shm alongside)
pub const DB_FILE: &str = "hexvibe.db";
/// Env file under the data dir (synced from stored config keys)
pub const ENV_FILE: &str = "env";
/// Subdir for log files
pub const LOGS_DIR: &str = "logs";
/// Subdir for exported palettes written by the TUI
pub const EXPORTS_DIR: &str = "exports";

/// Storage key holding the saved-palette history (JSON array)
pub const HISTORY_KEY: &str = "hexvibe_history";
/// Storage key holding the theme flag ("dark" | "light")
pub const THEME_KEY: &str = "hexvibe_theme";

/// Number of swatches in a palette
pub const PALETTE_SIZE: usize = 5;
/// Most recent saved palettes kept in history
pub const HISTORY_LIMIT: usize = 20;
/// File stem of an exported palette (`hexvibe-palette.json`)
pub const EXPORT_FILE_STEM: &str = "hexvibe-palette";
/// Prefix of the default export name, followed by the local date
pub const EXPORT_NAME_PREFIX: &str = "HexVibe Palette";
