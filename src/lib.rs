#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Rollbook - a student record manager
//!
//! Rollbook keeps student records in a single SQLite table keyed by roll
//! number. It can be used as both a command-line application and a library.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | `database` | SQLite store only | `rusqlite` |
//! | `lens-core` | Record operations with console rendering | `tabled` |
//! | `display` | Table formatting with `tabled` | `tabled` |
//! | `cli` | CLI binary with interrupt handling | All above + `clap`, `tokio` |
//!
//! # Architecture
//!
//! - **[`database`]**: SQLite connection management, the `students` schema and
//!   the [`StudentStore`]
//! - **[`lens`]**: Confirmation output and listing formats (feature-gated)
//! - **[`config`]**: Configuration management
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rollbook::database::StudentStore;
//!
//! let store = StudentStore::new("students.db");
//! store.initialize()?;
//!
//! store.upsert(102, "Lucky Bhardwaj", "BCA", 75.0)?;
//! store.update_marks(102, 78.5)?;
//!
//! // Unknown roll numbers are a no-op, not an error
//! assert_eq!(store.delete(999)?, 0);
//! ```

pub mod config;

#[cfg(feature = "database")]
pub mod database;

#[cfg(feature = "lens-core")]
pub mod lens;

pub use config::{RollbookConfig, DEFAULT_DB_PATH};

#[cfg(feature = "database")]
pub use database::{
    DatabaseConn, SchemaDefinitions, SchemaManager, SchemaStatus, Student, StudentStore,
    STUDENTS_TABLE,
};

#[cfg(feature = "lens-core")]
pub use lens::utils::OutputFormat;
