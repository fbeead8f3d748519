//! Student record store
//!
//! This module provides data access operations for the `students` table.
//! The store only remembers where the database lives; every operation opens
//! its own connection, runs one statement and lets the connection drop before
//! returning.

use anyhow::{anyhow, Result};
use rusqlite::{params, OptionalExtension};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::database::core::{DatabaseConn, SchemaManager, SchemaStatus, STUDENTS_TABLE};

/// A record from the students table
///
/// Only `roll_no` is constrained by the schema. The other columns may hold
/// NULL in files written by other tools, so they decode to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub roll_no: i64,
    pub name: Option<String>,
    pub course: Option<String>,
    pub marks: Option<f64>,
}

impl Student {
    pub fn new(roll_no: i64, name: impl Into<String>, course: impl Into<String>, marks: f64) -> Self {
        Self {
            roll_no,
            name: Some(name.into()),
            course: Some(course.into()),
            marks: Some(marks),
        }
    }

    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Student {
            roll_no: row.get(0)?,
            name: row.get(1)?,
            course: row.get(2)?,
            marks: row.get(3)?,
        })
    }
}

/// Store for student records
///
/// Holds the database path handed in at construction. No connection is kept
/// between calls.
#[derive(Debug, Clone)]
pub struct StudentStore {
    path: String,
}

impl StudentStore {
    /// Create a store for the database file at `path`
    ///
    /// Nothing is opened until the first operation.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing database file
    pub fn path(&self) -> &str {
        &self.path
    }

    fn connect(&self) -> Result<DatabaseConn> {
        DatabaseConn::open(&self.path)
    }

    /// Run a single mutating statement inside its own transaction
    ///
    /// The transaction rolls back if it is dropped before `commit`.
    fn write<P: rusqlite::Params>(&self, what: &str, sql: &str, params: P) -> Result<usize> {
        let db = self.connect()?;
        let tx = db.transaction()?;
        let changed = tx
            .execute(sql, params)
            .map_err(|e| anyhow!("Failed to {}: {}", what, e))?;
        tx.commit()
            .map_err(|e| anyhow!("Failed to commit transaction: {}", e))?;
        Ok(changed)
    }

    /// Ensure the students table exists
    pub fn initialize(&self) -> Result<()> {
        let db = self.connect()?;
        SchemaManager::new(&db).initialize()?;
        info!("table '{}' is ready at {}", STUDENTS_TABLE, self.path);
        Ok(())
    }

    /// Report whether the students table exists
    pub fn status(&self) -> Result<SchemaStatus> {
        let db = self.connect()?;
        SchemaManager::new(&db).check_status()
    }

    /// Insert a record, or fully replace the record with the same roll number
    pub fn upsert(&self, roll_no: i64, name: &str, course: &str, marks: f64) -> Result<Student> {
        self.write(
            "upsert student",
            "INSERT OR REPLACE INTO students (roll_no, name, course, marks) VALUES (?1, ?2, ?3, ?4)",
            params![roll_no, name, course, marks],
        )?;
        info!("upserted student {}", roll_no);
        Ok(Student::new(roll_no, name, course, marks))
    }

    /// All records, ordered by roll number ascending
    pub fn list_all(&self) -> Result<Vec<Student>> {
        let db = self.connect()?;
        let mut stmt = db
            .conn
            .prepare("SELECT roll_no, name, course, marks FROM students ORDER BY roll_no")
            .map_err(|e| anyhow!("Failed to prepare student listing: {}", e))?;

        let rows = stmt
            .query_map([], Student::from_row)
            .map_err(|e| anyhow!("Failed to list students: {}", e))?;

        let students = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| anyhow!("Failed to read student row: {}", e))?;
        debug!("listed {} students", students.len());
        Ok(students)
    }

    /// Look up one record by roll number
    pub fn get(&self, roll_no: i64) -> Result<Option<Student>> {
        let db = self.connect()?;
        db.conn
            .query_row(
                "SELECT roll_no, name, course, marks FROM students WHERE roll_no = ?1",
                [roll_no],
                Student::from_row,
            )
            .optional()
            .map_err(|e| anyhow!("Failed to look up student {}: {}", roll_no, e))
    }

    /// Set the marks of one record
    ///
    /// Returns the number of rows changed. An unknown roll number changes
    /// nothing and is not an error.
    pub fn update_marks(&self, roll_no: i64, marks: f64) -> Result<usize> {
        let changed = self.write(
            "update marks",
            "UPDATE students SET marks = ?1 WHERE roll_no = ?2",
            params![marks, roll_no],
        )?;
        info!("updated marks for roll {} ({} row(s))", roll_no, changed);
        Ok(changed)
    }

    /// Remove one record
    ///
    /// Returns the number of rows removed; zero when the roll number is unknown.
    pub fn delete(&self, roll_no: i64) -> Result<usize> {
        let changed = self.write(
            "delete student",
            "DELETE FROM students WHERE roll_no = ?1",
            params![roll_no],
        )?;
        info!("deleted roll {} ({} row(s))", roll_no, changed);
        Ok(changed)
    }

    /// Number of stored records
    pub fn count(&self) -> Result<u64> {
        self.connect()?.table_count(STUDENTS_TABLE)
    }
}
