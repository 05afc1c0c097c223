//! Command dispatch.

pub mod ai;
pub mod config;
pub mod history;
pub mod palette;
pub mod providers;
pub mod theme;
pub mod tui;

use std::path::Path;

use anyhow::{Context, Result};
use hexvibe_core::{HexColor, HexVibeError, SqliteStorage};
use hexvibe_observability::{ObservabilityConfig, init};

use crate::cli::{Cli, Command};
use crate::output;

pub async fn handle(cli: Cli, data_dir: std::path::PathBuf) -> Result<()> {
    if let Command::Tui {
        provider,
        model,
        ephemeral,
    } = cli.command
    {
        return tui::handle(&data_dir, provider, model, ephemeral, cli.verbose).await;
    }

    init_logging(&data_dir, cli.verbose);

    match cli.command {
        Command::Random { count } => palette::random(count),
        Command::Convert { hex } => palette::convert(&hex),
        Command::Contrast { hex } => palette::contrast(&hex),
        Command::Harmony { hex, rule } => palette::harmony(&hex, &rule),
        Command::Save { colors, name } => palette::save(&data_dir, &colors, name),
        Command::Export { colors, name, target } => palette::export(&colors, name, &target),
        Command::Ai {
            prompt,
            provider,
            model,
            no_save,
        } => ai::handle(&data_dir, &prompt, provider, model, no_save).await,
        Command::History { action } => history::handle(&data_dir, action),
        Command::Theme { appearance } => theme::handle(&data_dir, appearance),
        Command::Providers { action } => providers::handle(action).await,
        Command::Config { action } => config::handle(&data_dir, action),
        Command::Tui { .. } => Ok(()),
    }
}

/// Console logs on stderr only with `--verbose`; otherwise warnings and errors still reach stderr.
fn init_logging(data_dir: &Path, verbose: bool) {
    let mut config = ObservabilityConfig::from_env("hexvibe-cli").with_version(hexvibe_constant::app::VERSION);
    if verbose {
        config = config.with_log_level("debug");
    } else if config.log_level.is_none() {
        config = config.with_log_level("warn");
    }
    let logs_dir = data_dir.join(hexvibe_core::db::LOGS_DIR);
    if logs_dir.is_dir() {
        config = config.with_log_file(logs_dir.join("hexvibe.log"));
    }
    if let Err(e) = init(config) {
        output::warning(&format!("Logging init failed (continuing): {e}"));
    }
}

/// Opens the SQLite store, creating the data dir layout on first use.
pub fn open_storage(data_dir: &Path) -> Result<SqliteStorage> {
    SqliteStorage::open(data_dir).with_context(|| format!("open data dir {}", data_dir.display()))
}

/// Parses every argument as a hex color; the first bad one fails with `invalid hex color: …`.
pub fn parse_colors(raw: &[String]) -> Result<Vec<HexColor>> {
    raw.iter().map(|s| parse_color(s)).collect()
}

/// `#RRGGBB`, or the six digits alone since `#` needs quoting in most shells.
pub fn parse_color(raw: &str) -> Result<HexColor> {
    let trimmed = raw.trim();
    let candidate = if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    };
    candidate
        .parse::<HexColor>()
        .map_err(|_| HexVibeError::InvalidHex(raw.to_string()).into())
}
