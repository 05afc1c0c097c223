//! Stateless color commands plus `save` and `export`.

use std::path::Path;

use anyhow::{Result, bail};
use chrono::Utc;
use hexvibe_core::color::random_palette;
use hexvibe_core::export::default_export_name;
use hexvibe_core::history::default_name;
use hexvibe_core::{HarmonyRule, HexColor, HistoryStore, PaletteExport, SavedPalette, contrast_color, generate_harmony, luma};
use serde::Serialize;

use super::{open_storage, parse_color, parse_colors};
use crate::cli::ExportTarget;
use crate::output;

const MAX_RANDOM: usize = 64;

#[derive(Debug, Serialize)]
struct ColorInfo {
    hex: HexColor,
    rgb: [u8; 3],
    hsl: [f64; 3],
    luma: f64,
    contrast: HexColor,
}

impl ColorInfo {
    fn of(hex: HexColor) -> Self {
        let rgb = hex.to_rgb();
        let hsl = hex.to_hsl();
        Self {
            hex,
            rgb: [rgb.r, rgb.g, rgb.b],
            hsl: [hsl.h.round(), hsl.s.round(), hsl.l.round()],
            luma: (luma(rgb) * 10.0).round() / 10.0,
            contrast: contrast_color(&hex),
        }
    }
}

pub fn random(count: usize) -> Result<()> {
    if count == 0 || count > MAX_RANDOM {
        bail!("count must be between 1 and {MAX_RANDOM}");
    }
    let colors = random_palette(&mut rand::thread_rng(), count);
    output::data("colors", &colors);
    output::colors(&colors);
    Ok(())
}

pub fn convert(raw: &str) -> Result<()> {
    let info = ColorInfo::of(parse_color(raw)?);
    if output::is_json() {
        output::data("color", &info);
        return Ok(());
    }
    output::header(&format!("{}{}", output::chip(info.hex), info.hex));
    output::kv("rgb", &format!("rgb({}, {}, {})", info.rgb[0], info.rgb[1], info.rgb[2]));
    output::kv("hsl", &format!("hsl({}, {}%, {}%)", info.hsl[0], info.hsl[1], info.hsl[2]));
    output::kv("luma", &format!("{:.1}", info.luma));
    output::kv("contrast", &format!("{}{}", output::chip(info.contrast), info.contrast));
    Ok(())
}

pub fn contrast(raw: &str) -> Result<()> {
    let text = contrast_color(&parse_color(raw)?);
    if output::is_json() {
        output::data("contrast", &text);
    } else {
        output::raw(&text.to_string());
    }
    Ok(())
}

pub fn harmony(raw: &str, rule: &str) -> Result<()> {
    let base = parse_color(raw)?;
    let rule: HarmonyRule = rule.parse()?;
    let colors = generate_harmony(&base, rule);
    tracing::debug!(base = %base, rule = %rule, count = colors.len(), "harmony generated");
    output::data(rule.as_str(), &colors);
    if !output::is_json() {
        output::header(&format!("{} of {}", rule, base));
        output::colors(&colors);
    }
    Ok(())
}

pub fn save(data_dir: &Path, raw: &[String], name: Option<String>) -> Result<()> {
    let colors = parse_colors(raw)?;
    let mut storage = open_storage(data_dir)?;
    let saved = save_to_history(&mut storage, colors, name)?;
    output::data("saved", &saved);
    if !output::is_json() {
        output::success(&format!("Saved \"{}\" ({})", saved.name, short_id(&saved.id)));
        output::colors(&saved.colors);
    }
    Ok(())
}

/// Prepends to history (capped) and returns the stored entry.
pub fn save_to_history<S: hexvibe_core::Storage + ?Sized>(
    storage: &mut S,
    colors: Vec<HexColor>,
    name: Option<String>,
) -> Result<SavedPalette> {
    if colors.len() > hexvibe_constant::app::PALETTE_SIZE {
        bail!("a palette holds at most {} colors", hexvibe_constant::app::PALETTE_SIZE);
    }
    let mut store = HistoryStore::new(storage);
    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| default_name(store.load().len()));
    let saved = SavedPalette::new(name, colors, Utc::now());
    store.push(saved.clone())?;
    Ok(saved)
}

pub fn export(raw: &[String], name: Option<String>, target: &ExportTarget) -> Result<()> {
    let colors = parse_colors(raw)?;
    let now = Utc::now();
    let name = name.unwrap_or_else(|| default_export_name(now));
    write_export(&PaletteExport::new(name, colors, now), target)
}

/// `--stdout` prints the document; otherwise writes `hexvibe-palette.json` into `--out` or the cwd.
pub fn write_export(export: &PaletteExport, target: &ExportTarget) -> Result<()> {
    if target.stdout {
        output::raw(&export.to_json_pretty()?);
        return Ok(());
    }
    let dir = match &target.out {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let path = export.write_to(&dir)?;
    output::data("exported", &serde_json::json!({ "path": path, "name": export.name }));
    if !output::is_json() {
        output::success(&format!("Exported \"{}\" to {}", export.name, path.display()));
    }
    Ok(())
}

/// First 8 characters of an id, as shown in tables.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
