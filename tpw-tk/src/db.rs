//! SQLite-backed key-value store
//!
//! A single `settings` table (key TEXT PRIMARY KEY, value TEXT, updated_at)
//! holds the persisted entries; the engine never sees SQL, only the
//! StateStore contract.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tpw_common::store::StateStore;
use tpw_common::{Error, Result};

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(storage_err)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )",
        )
        .map_err(storage_err)?;
        Ok(SqliteStore { conn })
    }
}

fn storage_err(e: rusqlite::Error) -> Error {
    Error::Storage(e.to_string())
}

impl StateStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(storage_err)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO settings (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)",
                params![key, value],
            )
            .map(|_| ())
            .map_err(storage_err)
    }
}
