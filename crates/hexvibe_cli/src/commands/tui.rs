//! `hexvibe tui`: run the interactive TUI.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use hexvibe_core::db::{EXPORTS_DIR, LOGS_DIR};
use hexvibe_core::{MemoryStorage, PaletteSession};
use hexvibe_llms::PaletteParaphraser;
use hexvibe_observability::{LogSink, ObservabilityConfig, init};
use hexvibe_tui::{SessionStorage, TuiOptions, run_tui};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;

use super::{ai, open_storage};
use crate::output;

pub async fn handle(
    data_dir: &Path,
    provider: Option<String>,
    model: Option<String>,
    ephemeral: bool,
    verbose: bool,
) -> Result<()> {
    // Channel for tracing output → TUI logs screen (Ctrl+D)
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });

    // The TUI owns the terminal: no console layer, logs go to the sink (and a file when persistent).
    let mut obs_config = ObservabilityConfig::from_env("hexvibe-tui")
        .with_version(hexvibe_constant::app::VERSION)
        .with_console(false)
        .with_log_sink(log_sink);
    if verbose {
        obs_config = obs_config.with_log_level("debug");
    } else if obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level("info");
    }

    let storage: SessionStorage = if ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        let storage = open_storage(data_dir)?;
        obs_config = obs_config.with_log_file(data_dir.join(LOGS_DIR).join("hexvibe-tui.log"));
        Box::new(storage)
    };
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Logging init failed (continuing): {e}"));
    }

    let paraphraser = resolve_paraphraser(provider.as_deref(), model)?;
    let session = PaletteSession::open(storage, &mut StdRng::from_entropy());
    tracing::info!(
        ephemeral,
        ai = paraphraser.is_some(),
        data_dir = %data_dir.display(),
        "starting TUI"
    );

    let options = TuiOptions {
        paraphraser,
        log_rx: Some(log_rx),
        export_dir: Some(data_dir.join(EXPORTS_DIR)),
    };
    run_tui(session, options)
}

/// A missing key only disables the prompt, unless `--provider` asked for one explicitly.
fn resolve_paraphraser(provider: Option<&str>, model: Option<String>) -> Result<Option<PaletteParaphraser>> {
    match ai::paraphraser(provider, model) {
        Ok(p) => Ok(Some(p)),
        Err(e) if provider.is_some() => Err(e),
        Err(e) => {
            tracing::warn!(error = %e, "AI prompt disabled");
            Ok(None)
        }
    }
}
