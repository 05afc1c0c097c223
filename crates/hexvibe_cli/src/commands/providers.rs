//! `hexvibe providers` subcommands.

use anyhow::{Result, anyhow};
use comfy_table::{Cell, Color};
use hexvibe_llms::{ProviderKind, ProviderRegistry};
use serde::Serialize;

use crate::cli::ProvidersAction;
use crate::output;

#[derive(Serialize)]
struct ProviderInfo {
    id: &'static str,
    api_key_env: &'static str,
    configured: bool,
    default_model: &'static str,
}

fn provider_infos(registry: &ProviderRegistry) -> Vec<ProviderInfo> {
    let registered = registry.list_providers();
    ProviderKind::ALL
        .iter()
        .map(|kind| ProviderInfo {
            id: kind.as_str(),
            api_key_env: kind.api_key_env(),
            configured: registered.iter().any(|id| id == kind.as_str()),
            default_model: kind.default_model(),
        })
        .collect()
}

pub async fn handle(action: ProvidersAction) -> Result<()> {
    let registry = ProviderRegistry::from_env();
    match action {
        ProvidersAction::List => list(&registry),
        ProvidersAction::Models { provider } => models(&registry, &provider).await,
        ProvidersAction::Test { provider } => test(&registry, &provider).await,
    }
}

fn list(registry: &ProviderRegistry) -> Result<()> {
    let infos = provider_infos(registry);

    output::header("AI providers");
    let mut table = output::table();
    output::table_header(&mut table, &["Provider", "Status", "Default model", "Key"]);
    for info in &infos {
        let status = if info.configured {
            Cell::new("configured").fg(Color::Green)
        } else {
            Cell::new("missing API key").fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(info.id).fg(Color::Green),
            status,
            Cell::new(info.default_model),
            Cell::new(info.api_key_env).fg(Color::DarkGrey),
        ]);
    }
    output::table_print(&table, &infos);

    if registry.is_empty() {
        output::dim("No provider configured. Run `hexvibe config api` to add a key.");
    }
    Ok(())
}

async fn test(registry: &ProviderRegistry, provider_id: &str) -> Result<()> {
    let provider = registry.get_provider(provider_id)?;
    let spinner = output::spinner(&format!("Testing {provider_id} connectivity..."));

    match provider.list_models().await {
        Ok(models) => {
            output::spinner_success(&spinner, &format!("{provider_id} is reachable ({} models)", models.len()));
            Ok(())
        }
        Err(e) => {
            output::spinner_error(&spinner, &format!("{provider_id} connection failed"));
            Err(anyhow!("Provider test failed: {e}"))
        }
    }
}

async fn models(registry: &ProviderRegistry, provider_id: &str) -> Result<()> {
    let provider = registry.get_provider(provider_id)?;
    let spinner = output::spinner(&format!("Fetching models for {provider_id}..."));

    let models = match provider.list_models().await {
        Ok(models) => models,
        Err(e) => {
            output::spinner_error(&spinner, "Failed to fetch models");
            return Err(anyhow!("Failed to list models: {e}"));
        }
    };
    spinner.finish_and_clear();

    output::header(&format!("Models for {provider_id}"));
    if models.is_empty() {
        output::dim("No models returned (provider may not support listing)");
        return Ok(());
    }
    let default = provider.default_model().to_string();
    let mut table = output::table();
    output::table_header(&mut table, &["Model", ""]);
    for model in &models {
        let marker = if *model == default { "default" } else { "" };
        table.add_row(vec![Cell::new(model).fg(Color::Green), Cell::new(marker)]);
    }
    output::table_print(&table, &models);
    Ok(())
}
