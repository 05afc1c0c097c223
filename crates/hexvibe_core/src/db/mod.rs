//! SQLite DB under the data dir.
//!
//! - `hexvibe.db` + WAL: one `kv` table (history, theme, provider config).
//! - `logs/`, `exports/`: directories for logs and exported palettes.
//! - `env`: optional file synced from the uppercase config keys.

mod config;
mod connection;
mod layout;
mod migrations;

pub use config::{delete_value, get_all, get_config, get_value, is_env_key, set_value, sync_env_file};
pub use connection::{open_db, open_in_memory};
pub use layout::{DB_FILE, ENV_FILE, EXPORTS_DIR, LOGS_DIR, default_data_dir, ensure_data_dir};
pub use migrations::run_all as run_migrations;
