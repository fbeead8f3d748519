//! Database schema management
//!
//! The record manager owns a single table. Its DDL lives here so the store,
//! the status check, and the tests agree on one definition.

use anyhow::{anyhow, Result};

use super::DatabaseConn;

/// Name of the student records table
pub const STUDENTS_TABLE: &str = "students";

/// Schema definitions for all tables in the database
pub struct SchemaDefinitions;

impl SchemaDefinitions {
    /// SQL for creating the students table
    pub const STUDENTS: &'static str = r#"
        CREATE TABLE IF NOT EXISTS students (
            roll_no INTEGER PRIMARY KEY,
            name TEXT,
            course TEXT,
            marks REAL
        );
    "#;
}

/// Schema manager for the record database
///
/// Creates the table when it is absent. Existing tables are left alone.
pub struct SchemaManager<'a> {
    db: &'a DatabaseConn,
}

impl<'a> SchemaManager<'a> {
    /// Create a new schema manager for the given connection
    pub fn new(db: &'a DatabaseConn) -> Self {
        Self { db }
    }

    /// Initialize the database schema
    ///
    /// Safe to call on every startup.
    pub fn initialize(&self) -> Result<()> {
        self.db
            .conn
            .execute(SchemaDefinitions::STUDENTS, [])
            .map_err(|e| anyhow!("Failed to create {} table: {}", STUDENTS_TABLE, e))?;
        Ok(())
    }

    /// Check the current schema status
    pub fn check_status(&self) -> Result<SchemaStatus> {
        if self.db.table_exists(STUDENTS_TABLE)? {
            Ok(SchemaStatus::Ready)
        } else {
            Ok(SchemaStatus::NotInitialized)
        }
    }
}

/// Status of the database schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// The students table does not exist yet
    NotInitialized,

    /// The students table exists
    Ready,
}

impl std::fmt::Display for SchemaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaStatus::NotInitialized => write!(f, "not initialized"),
            SchemaStatus::Ready => write!(f, "ready"),
        }
    }
}
