//! `hexvibe ai <PROMPT>`: one AI palette request, saved to history unless `--no-save`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};
use chrono::Utc;
use hexvibe_core::{AiApplied, AiOutcome, MemoryStorage, PaletteSession, Storage};
use hexvibe_llms::{AiConfig, PaletteParaphraser, ProviderKind};
use hexvibe_observability::{palette_span, record_duration, record_error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::Instrument;

use super::open_storage;
use super::palette::short_id;
use crate::output;

/// Provider and model from flags, falling back to `HEXVIBE_PROVIDER` / `HEXVIBE_MODEL`.
pub fn ai_config(
    provider: Option<&str>,
    model: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AiConfig> {
    let mut config = match provider {
        Some(raw) => {
            let kind: ProviderKind = raw.parse()?;
            AiConfig::from_lookup(&lookup)
                .map(|c| c.with_provider(kind))
                .unwrap_or_else(|_| AiConfig::new(kind))
        }
        None => AiConfig::from_lookup(&lookup)?,
    };
    if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
        config = config.with_model(model.trim());
    }
    Ok(config)
}

pub fn paraphraser(provider: Option<&str>, model: Option<String>) -> Result<PaletteParaphraser> {
    let config = ai_config(provider, model, |key| std::env::var(key).ok())?;
    let client = config.build_provider()?;
    Ok(PaletteParaphraser::new(client, config.model))
}

pub async fn handle(
    data_dir: &Path,
    prompt: &str,
    provider: Option<String>,
    model: Option<String>,
    no_save: bool,
) -> Result<()> {
    let paraphraser = paraphraser(provider.as_deref(), model)?;
    let storage: Box<dyn Storage> = if no_save {
        Box::new(MemoryStorage::new())
    } else {
        Box::new(open_storage(data_dir)?)
    };
    let mut rng = StdRng::from_entropy();
    let mut session = PaletteSession::open(storage, &mut rng);
    let prompt = session.begin_ai_request(prompt)?;

    let label = format!("{} · {}", paraphraser.provider_id(), paraphraser.model());
    let spinner = output::spinner(&format!("Asking {label} for \"{prompt}\"..."));
    let span = palette_span!("ai", paraphraser.provider_id());
    let outcome = async {
        let started = Instant::now();
        let outcome = paraphraser.request_palette(&prompt).await;
        record_duration("duration_ms", started.elapsed());
        if let AiOutcome::Failure(reason) = &outcome {
            record_error(reason);
        }
        outcome
    }
    .instrument(span)
    .await;

    match session.finish_ai_request(outcome, Utc::now())? {
        AiApplied::Applied { saved } => {
            output::spinner_success(&spinner, &format!("Palette from {label}"));
            output::data("palette", &saved);
            if !output::is_json() {
                output::colors(&saved.colors);
                if no_save {
                    output::dim("Not saved (--no-save).");
                } else {
                    output::dim(&format!("Saved as \"{}\" ({})", saved.name, short_id(&saved.id)));
                }
            }
            Ok(())
        }
        AiApplied::Unchanged { reason } => {
            output::spinner_error(&spinner, "No palette generated");
            bail!("AI request failed: {reason}")
        }
    }
}
