//! CLI entry point for HexVibe.

mod cli;
mod commands;
mod output;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::Cli;

/// Strip one level of surrounding double quotes from a config value (DB may store quoted).
fn unquote_config_value(v: &str) -> &str {
    let v = v.trim();
    if v.len() >= 2 && v.starts_with('"') && v.ends_with('"') {
        &v[1..v.len() - 1]
    } else {
        v
    }
}

/// Stored pairs that should be exported: keys not already in the environment.
fn pending_exports<'a>(
    stored: &'a [(String, String)],
    is_set: impl Fn(&str) -> bool,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    stored
        .iter()
        .filter(move |(k, _)| !is_set(k))
        .map(|(k, v)| (k.as_str(), unquote_config_value(v)))
}

/// Nearest `name` in `start` or one of its parents.
fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .take(32)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Load configuration into the process env. Existing env values always win.
/// Order: 1) `<data_dir>/hexvibe.db` uppercase keys  2) `<data_dir>/env`  3) nearest `.env`
fn load_hexvibe_config(data_dir: &Path) {
    // 1) Stored provider config. Only read an existing DB; never create one here.
    if data_dir.join(hexvibe_core::db::DB_FILE).exists() {
        if let Ok(conn) = hexvibe_core::db::open_db(data_dir) {
            if let Ok(pairs) = hexvibe_core::db::get_config(&conn) {
                for (k, v) in pending_exports(&pairs, |k| std::env::var_os(k).is_some()) {
                    // SAFETY: runs before the tokio runtime starts any other thread.
                    unsafe { std::env::set_var(k, v) };
                }
            }
        }
    }
    // 2) Env file synced by `hexvibe config api`
    let env_file = data_dir.join(hexvibe_core::db::ENV_FILE);
    if env_file.exists() {
        let _ = dotenvy::from_path(&env_file);
    }
    // 3) Project .env
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(env_file) = find_upwards(&cwd, ".env") {
            let _ = dotenvy::from_path(&env_file);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(hexvibe_core::db::default_data_dir);
    load_hexvibe_config(&data_dir);
    output::init(cli.output);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            output::error(&format!("Failed to start async runtime: {e}"));
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(commands::handle(cli, data_dir)) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
