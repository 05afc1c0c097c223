//! SQL schema for the data-dir DB. Applied on open.

/// String key/value store. Lowercase keys hold app state (`hexvibe_history`,
/// `hexvibe_theme`); uppercase keys hold provider config and feed the env file.
pub const KV: &str = "
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);
";

/// Run all migrations on an open connection.
pub fn run_all(conn: &rusqlite::Connection) -> anyhow::Result<()> {
    conn.execute_batch(KV)?;
    Ok(())
}
