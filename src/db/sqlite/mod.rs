//! SQLite database module
//!
//! One small database holding persisted client state (watchlist,
//! preferences) as key/value rows. Access is serialized through a single
//! mutexed connection.

mod kv;
mod migrations;

use crate::error::Result;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;

/// SQLite database wrapper
pub struct SqliteDb {
    conn: Mutex<Connection>,
}

impl SqliteDb {
    /// Open (or create) the database and bring the schema up to date
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for better concurrent access
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        let db = Self {
            conn: Mutex::new(conn),
        };

        db.run_migrations()?;

        Ok(db)
    }

    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn.lock();
        migrations::run_migrations(&conn)
    }

    // ========== Key/Value State Methods ==========

    /// Read one persisted state value
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();
        kv::get_value(&conn, key)
    }

    /// Write one persisted state value, replacing any previous one
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock();
        kv::set_value(&conn, key, value)
    }

    /// Remove one persisted state value
    pub fn delete_value(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock();
        kv::delete_value(&conn, key)
    }
}
