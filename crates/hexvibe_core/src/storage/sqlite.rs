use std::path::{Path, PathBuf};

use super::Storage;
use crate::db;
use crate::error::Result;

/// `kv` table in `<data_dir>/hexvibe.db`.
pub struct SqliteStorage {
    conn: rusqlite::Connection,
    data_dir: Option<PathBuf>,
}

impl SqliteStorage {
    /// Opens (and lays out) the data dir.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let conn = db::open_db(data_dir)?;
        tracing::debug!(data_dir = %data_dir.display(), "opened sqlite storage");
        Ok(Self {
            conn,
            data_dir: Some(data_dir.to_path_buf()),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: db::open_in_memory()?,
            data_dir: None,
        })
    }

    /// `None` for in-memory databases.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn connection(&self) -> &rusqlite::Connection {
        &self.conn
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(db::get_value(&self.conn, key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Ok(db::set_value(&self.conn, key, value)?)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Ok(db::delete_value(&self.conn, key)?)
    }
}
