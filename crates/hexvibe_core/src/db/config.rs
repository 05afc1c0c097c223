//! kv table access and `<data_dir>/env` sync.

use anyhow::{Context, Result};
use std::path::Path;

use super::layout;

/// Reads all key-value pairs from the DB.
pub fn get_all(conn: &rusqlite::Connection) -> Result<Vec<(String, String)>> {
    let mut stmt = conn.prepare("SELECT key, value FROM kv ORDER BY key")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}

/// Provider config only: keys that look like env vars (`GEMINI_API_KEY`, `HEXVIBE_MODEL`).
pub fn get_config(conn: &rusqlite::Connection) -> Result<Vec<(String, String)>> {
    Ok(get_all(conn)?.into_iter().filter(|(k, _)| is_env_key(k)).collect())
}

/// Reads one value by key, if present.
pub fn get_value(conn: &rusqlite::Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
    let mut rows = stmt.query(rusqlite::params![key])?;
    Ok(rows.next()?.map(|row| row.get::<_, String>(0)).transpose()?)
}

/// Sets one key (insert or replace).
pub fn set_value(conn: &rusqlite::Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = ?2",
        rusqlite::params![key, value],
    )?;
    Ok(())
}

pub fn delete_value(conn: &rusqlite::Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM kv WHERE key = ?1", rusqlite::params![key])?;
    Ok(())
}

/// `[A-Z0-9_]+` starting with a letter.
pub fn is_env_key(key: &str) -> bool {
    key.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && key.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Writes `data_dir/env` from config entries (for `source ~/.hexvibe/env`).
/// Values are shell-quoted (one layer) so URLs and secrets are valid when sourced.
pub fn sync_env_file(data_dir: &Path, config: &[(String, String)]) -> Result<()> {
    let path = data_dir.join(layout::ENV_FILE);
    let mut content = String::from("# HexVibe configuration\n# Source this file: source ~/.hexvibe/env\n\n");
    for (k, v) in config.iter().filter(|(k, _)| is_env_key(k)) {
        let raw = unquote_value(v);
        let escaped = raw.replace('\\', "\\\\").replace('"', "\\\"");
        content.push_str(&format!("export {}=\"{}\"\n", k, escaped));
    }
    std::fs::write(&path, content).context("write env file")?;
    Ok(())
}

/// Strip one layer of surrounding double quotes (DB may store quoted).
fn unquote_value(v: &str) -> &str {
    let v = v.trim();
    if v.len() >= 2 && v.starts_with('"') && v.ends_with('"') {
        &v[1..v.len() - 1]
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    #[test]
    fn set_get_overwrite() {
        let conn = open_in_memory().unwrap();
        assert_eq!(get_value(&conn, "k").unwrap(), None);
        set_value(&conn, "k", "a").unwrap();
        set_value(&conn, "k", "b").unwrap();
        assert_eq!(get_value(&conn, "k").unwrap().as_deref(), Some("b"));
        delete_value(&conn, "k").unwrap();
        assert_eq!(get_value(&conn, "k").unwrap(), None);
    }

    #[test]
    fn config_only_returns_env_keys() {
        let conn = open_in_memory().unwrap();
        set_value(&conn, "hexvibe_theme", "dark").unwrap();
        set_value(&conn, "GEMINI_API_KEY", "secret").unwrap();
        let config = get_config(&conn).unwrap();
        assert_eq!(config, vec![("GEMINI_API_KEY".to_string(), "secret".to_string())]);
    }

    #[test]
    fn env_key_shape() {
        assert!(is_env_key("ZAI_API_KEY"));
        assert!(is_env_key("HEXVIBE_AI_TIMEOUT_SECS"));
        assert!(!is_env_key("hexvibe_history"));
        assert!(!is_env_key("_X"));
        assert!(!is_env_key(""));
    }

    #[test]
    fn env_file_escapes_and_unquotes() {
        let dir = tempfile::tempdir().unwrap();
        let config = vec![
            ("GEMINI_API_KEY".to_string(), "\"quoted\"".to_string()),
            ("HEXVIBE_MODEL".to_string(), "a\"b".to_string()),
            ("hexvibe_theme".to_string(), "dark".to_string()),
        ];
        sync_env_file(dir.path(), &config).unwrap();
        let content = std::fs::read_to_string(dir.path().join(layout::ENV_FILE)).unwrap();
        assert!(content.contains("export GEMINI_API_KEY=\"quoted\"\n"));
        assert!(content.contains("export HEXVIBE_MODEL=\"a\\\"b\"\n"));
        assert!(!content.contains("hexvibe_theme"));
    }
}
