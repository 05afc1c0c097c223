//! `hexvibe config` subcommands.

use std::env;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Result, anyhow};
use hexvibe_core::db;
use hexvibe_llms::ProviderKind;

use crate::cli::ConfigAction;
use crate::output;

fn description(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Gemini => "Google Gemini (structured JSON output)",
        ProviderKind::Zai => "Z.AI GLM models (OpenAI-compatible)",
        ProviderKind::OpenAI => "OpenAI chat completions",
    }
}

pub fn handle(data_dir: &Path, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Api { provider } => configure_api(data_dir, provider),
        ConfigAction::Show => show(data_dir),
    }
}

fn configure_api(data_dir: &Path, provider: Option<String>) -> Result<()> {
    let kind = match provider {
        Some(p) => p.parse::<ProviderKind>().map_err(|_| {
            anyhow!(
                "Unknown provider '{}'. Available: {}",
                p,
                ProviderKind::ALL.map(|k| k.as_str()).join(", ")
            )
        })?,
        None => select_provider()?,
    };
    let env_var = kind.api_key_env();

    output::header(&format!("Configure {kind}"));
    println!("  {}", description(kind));
    println!();

    if let Ok(current) = env::var(env_var) {
        println!("  Current: {}", mask_key(&current));
        println!();
    }

    let key = prompt_api_key(kind.as_str())?;
    if key.is_empty() {
        output::warning("No key entered, cancelled.");
        return Ok(());
    }

    store_api_key(data_dir, env_var, &key)?;
    tracing::info!(provider = %kind, "API key stored");
    output::success(&format!("Saved {} to {}", env_var, data_dir.join(db::DB_FILE).display()));
    output::dim(&format!(
        "Also written to {} for `source`.",
        data_dir.join(db::ENV_FILE).display()
    ));
    Ok(())
}

/// Writes the key to the kv table and re-syncs `<data_dir>/env` from every stored config key.
fn store_api_key(data_dir: &Path, env_var: &str, key: &str) -> Result<()> {
    let conn = db::open_db(data_dir)?;
    db::set_value(&conn, env_var, key)?;
    db::sync_env_file(data_dir, &db::get_config(&conn)?)?;
    Ok(())
}

fn show(data_dir: &Path) -> Result<()> {
    let db_path = data_dir.join(db::DB_FILE);
    let stored = if db_path.exists() {
        db::get_config(&db::open_db(data_dir)?)?
    } else {
        Vec::new()
    };
    let masked: Vec<(String, String)> = stored
        .into_iter()
        .map(|(k, v)| {
            let shown = if k.ends_with("_KEY") { mask_key(&v) } else { v };
            (k, shown)
        })
        .collect();

    output::data("config", &serde_json::json!({ "data_dir": data_dir, "values": masked }));
    if output::is_json() {
        return Ok(());
    }
    output::header("HexVibe configuration");
    output::kv("data dir", &data_dir.display().to_string());
    if masked.is_empty() {
        output::dim("No stored keys. Run `hexvibe config api` to add one.");
    }
    for (k, v) in &masked {
        output::kv(k, v);
    }
    Ok(())
}

fn select_provider() -> Result<ProviderKind> {
    println!("Select a provider to configure:\n");

    for (i, kind) in ProviderKind::ALL.iter().enumerate() {
        let status = if env::var(kind.api_key_env()).is_ok_and(|v| !v.trim().is_empty()) {
            console::style("(configured)").green()
        } else {
            console::style("(not set)").dim()
        };
        println!("  {}) {} {} - {}", i + 1, kind, status, description(*kind));
    }
    println!();

    print!("Enter choice [1-{}]: ", ProviderKind::ALL.len());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let choice: usize = input.trim().parse().map_err(|_| anyhow!("Invalid choice"))?;
    ProviderKind::ALL
        .get(choice.wrapping_sub(1))
        .copied()
        .ok_or_else(|| anyhow!("Choice must be 1-{}", ProviderKind::ALL.len()))
}

/// Reads a key without echoing it: raw mode, one `*` per character.
fn prompt_api_key(provider: &str) -> Result<String> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal,
    };

    println!("Enter API key for {provider}:");
    print!("> ");
    io::stdout().flush()?;

    let mut key = String::new();
    terminal::enable_raw_mode()?;

    let result = loop {
        match event::read() {
            Ok(Event::Key(k)) if k.kind != KeyEventKind::Release => match k.code {
                KeyCode::Enter => break Ok(key.trim().to_string()),
                KeyCode::Backspace => {
                    if key.pop().is_some() {
                        print!("\x08 \x08");
                        let _ = io::stdout().flush();
                    }
                }
                KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => break Ok(String::new()),
                KeyCode::Char(c) => {
                    key.push(c);
                    print!("*");
                    let _ = io::stdout().flush();
                }
                KeyCode::Esc => break Ok(String::new()),
                _ => {}
            },
            Ok(Event::Paste(text)) => {
                key.push_str(&text);
                print!("{}", "*".repeat(text.chars().count()));
                let _ = io::stdout().flush();
            }
            Ok(_) => {}
            Err(e) => break Err(e.into()),
        }
    };

    terminal::disable_raw_mode()?;
    println!();
    result
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
