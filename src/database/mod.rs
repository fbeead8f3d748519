//! Database module
//!
//! This module provides all database functionality for rollbook, organized into:
//!
//! - **core**: Core database infrastructure (SQLite connections, schema management)
//! - **students**: The student record store
//!
//! # Architecture
//!
//! ```text
//! database/
//! ├── core/           # Foundation
//! │   ├── connection  # SQLite DatabaseConn wrapper
//! │   └── schema      # students table definition and status check
//! │
//! └── students        # StudentStore: upsert, list, get, update marks, delete
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use rollbook::database::StudentStore;
//!
//! let store = StudentStore::new("students.db");
//! store.initialize()?;
//! store.upsert(101, "Amit Kumar", "BCA", 88.5)?;
//!
//! for student in store.list_all()? {
//!     println!("{} {:?}", student.roll_no, student.name);
//! }
//! ```

pub mod core;
pub mod students;

pub use core::{DatabaseConn, SchemaDefinitions, SchemaManager, SchemaStatus, STUDENTS_TABLE};
pub use students::{Student, StudentStore};
