//! `hexvibe history` subcommands.

use std::path::Path;

use anyhow::{Result, bail};
use chrono::Utc;
use comfy_table::{Cell, Color};
use hexvibe_core::{HexVibeError, HistoryStore, PaletteExport, SavedPalette, Storage};
use serde::Serialize;

use super::open_storage;
use super::palette::{short_id, write_export};
use crate::cli::HistoryAction;
use crate::output;

pub fn handle(data_dir: &Path, action: HistoryAction) -> Result<()> {
    let mut storage = open_storage(data_dir)?;
    match action {
        HistoryAction::List => list(&mut storage),
        HistoryAction::Show { id } => show(&mut storage, &id),
        HistoryAction::Delete { id } => delete(&mut storage, &id),
        HistoryAction::Export { id, target } => {
            let entry = resolve(&HistoryStore::new(&mut storage).load(), &id)?;
            write_export(&PaletteExport::from_saved(&entry, Utc::now()), &target)
        }
    }
}

#[derive(Serialize)]
struct Row<'a> {
    id: &'a str,
    name: &'a str,
    colors: Vec<String>,
    saved_at: String,
}

fn saved_at(entry: &SavedPalette) -> String {
    entry
        .saved_at()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn list<S: Storage + ?Sized>(storage: &mut S) -> Result<()> {
    let history = HistoryStore::new(storage).load();

    output::header(&format!(
        "Saved palettes ({}/{})",
        history.len(),
        hexvibe_constant::app::HISTORY_LIMIT
    ));
    if history.is_empty() {
        output::dim("No saved palettes yet. Try `hexvibe save` or `s` in the TUI.");
        return Ok(());
    }

    let mut table = output::table();
    output::table_header(&mut table, &["ID", "Name", "Colors", "Saved"]);
    let rows: Vec<Row> = history
        .iter()
        .map(|entry| {
            let colors: Vec<String> = entry.colors.iter().map(ToString::to_string).collect();
            table.add_row(vec![
                Cell::new(short_id(&entry.id)).fg(Color::Green),
                Cell::new(&entry.name),
                Cell::new(format!("{}{}", output::chips(&entry.colors), colors.join(" "))),
                Cell::new(saved_at(entry)).fg(Color::DarkGrey),
            ]);
            Row {
                id: &entry.id,
                name: &entry.name,
                colors,
                saved_at: saved_at(entry),
            }
        })
        .collect();
    output::table_print(&table, &rows);
    Ok(())
}

fn show<S: Storage + ?Sized>(storage: &mut S, id: &str) -> Result<()> {
    let entry = resolve(&HistoryStore::new(storage).load(), id)?;
    output::data("palette", &entry);
    if !output::is_json() {
        output::header(&entry.name);
        output::kv("id", &entry.id);
        output::kv("saved", &saved_at(&entry));
        output::colors(&entry.colors);
    }
    Ok(())
}

fn delete<S: Storage + ?Sized>(storage: &mut S, id: &str) -> Result<()> {
    let mut store = HistoryStore::new(storage);
    let entry = resolve(&store.load(), id)?;
    store.delete(&entry.id)?;
    tracing::info!(id = %entry.id, "saved palette deleted");
    output::success(&format!("Deleted \"{}\" ({})", entry.name, short_id(&entry.id)));
    Ok(())
}

/// Exact id, or a prefix that matches exactly one entry.
pub fn resolve(history: &[SavedPalette], id: &str) -> Result<SavedPalette> {
    let id = id.trim();
    if let Some(entry) = history.iter().find(|e| e.id == id) {
        return Ok(entry.clone());
    }
    let matches: Vec<&SavedPalette> = if id.is_empty() {
        Vec::new()
    } else {
        history.iter().filter(|e| e.id.starts_with(id)).collect()
    };
    match matches.as_slice() {
        [entry] => Ok((*entry).clone()),
        [] => Err(HexVibeError::PaletteNotFound(id.to_string()).into()),
        _ => bail!("id prefix '{id}' matches {} palettes; use more characters", matches.len()),
    }
}
