//! Student lens arguments
//!
//! These structs double as clap argument groups when the `cli` feature is on.

use serde::{Deserialize, Serialize};

/// Arguments for inserting or replacing a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct StudentAddArgs {
    /// Roll number (replaces any existing record with the same roll)
    #[cfg_attr(feature = "cli", clap(value_name = "ROLL"))]
    pub roll_no: i64,

    /// Student name
    pub name: String,

    /// Course name
    pub course: String,

    /// Marks
    #[cfg_attr(feature = "cli", clap(allow_negative_numbers = true))]
    pub marks: f64,
}

impl StudentAddArgs {
    pub fn new(roll_no: i64, name: impl Into<String>, course: impl Into<String>, marks: f64) -> Self {
        Self {
            roll_no,
            name: name.into(),
            course: course.into(),
            marks,
        }
    }
}

/// Arguments for changing the marks of a record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct StudentUpdateArgs {
    /// Roll number of the record to update
    #[cfg_attr(feature = "cli", clap(value_name = "ROLL"))]
    pub roll_no: i64,

    /// New marks
    #[cfg_attr(feature = "cli", clap(allow_negative_numbers = true))]
    pub marks: f64,
}

/// Arguments naming a single record by roll number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct StudentRollArgs {
    /// Roll number
    #[cfg_attr(feature = "cli", clap(value_name = "ROLL"))]
    pub roll_no: i64,
}
