//! Terminal output helpers. Styled text for humans, structured JSON for scripts.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `crossterm` for true-color swatch chips
//! - `comfy-table` for structured data
//! - `indicatif` for the AI spinner

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use crossterm::style::Stylize;
use hexvibe_core::HexColor;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn envelope(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg { level, message, data };
    serde_json::to_string(&msg).unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"))
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    println!("{}", envelope(level, message, data));
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text, None);
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", envelope("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Raw JSON document (exports): printed as-is in both modes so it can be piped to a file.
pub fn raw(text: &str) {
    println!("{text}");
}

/// Emit a serializable value. Text mode prints nothing; callers render their own view.
pub fn data<T: Serialize>(label: &str, value: &T) {
    if is_json() {
        let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
        emit_json("data", label, Some(&json_val));
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        emit_json("info", key, Some(&data));
    } else {
        println!("  {} {}", style(format!("{key:<9}")).cyan().bold(), value);
    }
}

// ── Colors ─────────────────────────────────────────────────────────

/// Two-cell true-color chip for a hex color. Plain text when stdout is not a color terminal.
pub fn chip(hex: HexColor) -> String {
    if !console::colors_enabled() {
        return String::new();
    }
    let (r, g, b) = hex.to_rgb().tuple();
    format!("{} ", "██".with(crossterm::style::Color::Rgb { r, g, b }))
}

/// One line per color: chip and hex, with an optional index column.
pub fn colors(colors: &[HexColor]) {
    if is_json() {
        return;
    }
    for (i, hex) in colors.iter().enumerate() {
        println!("  {} {}{}", style(i + 1).dim(), chip(*hex), hex);
    }
}

/// Chips only, for table cells and one-line summaries.
pub fn chips(colors: &[HexColor]) -> String {
    colors.iter().map(|hex| chip(*hex)).collect::<String>()
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled table for listing items.
pub fn table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Add a header row to the table.
pub fn table_header(table: &mut Table, columns: &[&str]) {
    table.set_header(
        columns
            .iter()
            .map(|c| Cell::new(c).fg(Color::Cyan).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
}

/// Print a table; JSON mode emits `items` instead.
pub fn table_print<T: Serialize>(table: &Table, items: &[T]) {
    if is_json() {
        let data = serde_json::json!({ "items": items });
        emit_json("list", "", Some(&data));
    } else {
        println!("{table}");
    }
}

// ── Spinners ───────────────────────────────────────────────────────

/// Create a spinner for async operations. Hidden in JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Finish spinner with success message.
pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    success(message);
}

/// Finish spinner with error message.
pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    error(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_skips_missing_data() {
        assert_eq!(envelope("info", "hi", None), r#"{"level":"info","message":"hi"}"#);
        let data = serde_json::json!({ "n": 1 });
        assert_eq!(
            envelope("data", "x", Some(&data)),
            r#"{"level":"data","message":"x","data":{"n":1}}"#
        );
    }

    #[test]
    fn chips_are_plain_without_colors() {
        console::set_colors_enabled(false);
        let hex: HexColor = "#FF0000".parse().unwrap();
        assert_eq!(chips(&[hex, hex]), "");
    }
}
