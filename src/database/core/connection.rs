//! Database connection management
//!
//! This module provides the connection wrapper every store operation opens
//! and drops. A `DatabaseConn` is never kept between operations: the SQLite
//! handle is closed when the value goes out of scope, on both the success and
//! the error path.

use anyhow::{anyhow, Result};
use rusqlite::Connection;
use tracing::debug;

/// Core database connection wrapper
///
/// `DatabaseConn` is a thin wrapper around a file-backed SQLite connection
/// with consistent error messages.
pub struct DatabaseConn {
    pub conn: Connection,
}

impl DatabaseConn {
    /// Open the database file at `path`, creating it when absent
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| anyhow!("Failed to open database at '{}': {}", path, e))?;
        debug!("opened database connection ({})", path);
        Ok(DatabaseConn { conn })
    }

    /// Begin an unchecked transaction
    ///
    /// Dropping the transaction without calling `commit` rolls it back.
    pub fn transaction(&self) -> Result<rusqlite::Transaction<'_>> {
        self.conn
            .unchecked_transaction()
            .map_err(|e| anyhow!("Failed to begin transaction: {}", e))
    }

    /// Check if a table exists in the database
    pub fn table_exists(&self, table_name: &str) -> Result<bool> {
        let count: i32 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table_name],
                |row| row.get(0),
            )
            .map_err(|e| anyhow!("Failed to check table existence: {}", e))?;
        Ok(count > 0)
    }

    /// Get the row count for a table
    pub fn table_count(&self, table_name: &str) -> Result<u64> {
        let query = format!("SELECT COUNT(*) FROM {}", table_name);
        let count: u64 = self
            .conn
            .query_row(&query, [], |row| row.get(0))
            .map_err(|e| anyhow!("Failed to get table count: {}", e))?;
        Ok(count)
    }
}
