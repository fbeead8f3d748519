//! Lens module
//!
//! This module provides high-level "lens" abstractions that combine business logic
//! with output formatting. The CLI drives records through a lens instead of
//! calling the store directly, so confirmation output stays in one place.
//!
//! # Architecture
//!
//! Each lens module exports:
//! - A **Lens struct** (e.g., `StudentLens`) - the main entry point for all operations
//! - **Args structs** - input arguments for lens methods
//! - **Output types** - display rows and rendering helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use rollbook::lens::students::{StudentLens, StudentRollArgs};
//! use rollbook::lens::utils::OutputFormat;
//! ```

pub mod utils;

// StudentLens - record operations with confirmation output
pub mod students;
