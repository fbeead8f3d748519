//! Common utility functions for lens modules
//!
//! Output format selection and the small formatting helpers shared by the
//! renderers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default maximum length for name display in tables
pub const DEFAULT_NAME_MAX_LEN: usize = 20;

/// Unified output format for record listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Fixed-width columns with dashed rules (default)
    #[default]
    Plain,
    /// Pretty table with borders
    Table,
    /// Markdown table format
    Markdown,
    /// Compact JSON array
    Json,
    /// Pretty-printed JSON with indentation
    JsonPretty,
    /// JSON Lines format (one JSON object per line)
    JsonLine,
    /// Pipe-separated values with header
    Psv,
}

impl OutputFormat {
    /// Check if this is a JSON variant
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::JsonPretty | Self::JsonLine)
    }

    /// Check if this is a bordered table variant
    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table | Self::Markdown)
    }

    /// Get a list of all format names for help text
    pub fn all_names() -> &'static [&'static str] {
        &[
            "plain",
            "table",
            "markdown",
            "json",
            "json-pretty",
            "json-line",
            "psv",
        ]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Table => write!(f, "table"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
            Self::JsonPretty => write!(f, "json-pretty"),
            Self::JsonLine => write!(f, "json-line"),
            Self::Psv => write!(f, "psv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "table" | "pretty" => Ok(Self::Table),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "json-pretty" | "jsonpretty" => Ok(Self::JsonPretty),
            "json-line" | "jsonline" | "jsonl" | "ndjson" => Ok(Self::JsonLine),
            "psv" | "pipe" => Ok(Self::Psv),
            _ => Err(format!(
                "Unknown output format '{}'. Valid formats: {}",
                s,
                Self::all_names().join(", ")
            )),
        }
    }
}

/// Truncate a string to the specified length, adding "..." if truncated
///
/// # Examples
///
/// ```
/// use rollbook::lens::utils::truncate_name;
///
/// assert_eq!(truncate_name("Short", 20), "Short");
/// assert_eq!(truncate_name("This is a very long name", 20), "This is a very lo...");
/// ```
pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Placeholder shown for a NULL column
pub const NULL_DISPLAY: &str = "None";

/// Render a text column, showing [`NULL_DISPLAY`] for NULL
pub fn display_text(value: Option<&str>) -> &str {
    value.unwrap_or(NULL_DISPLAY)
}

/// Render marks the way they are entered: whole numbers keep one decimal place
///
/// Magnitudes from `1e16` up and below `1e-4` switch to exponent notation
/// with a signed, two-digit exponent. NULL marks render as [`NULL_DISPLAY`].
///
/// ```
/// use rollbook::lens::utils::format_marks;
///
/// assert_eq!(format_marks(Some(75.0)), "75.0");
/// assert_eq!(format_marks(Some(78.5)), "78.5");
/// assert_eq!(format_marks(Some(1e16)), "1e+16");
/// assert_eq!(format_marks(None), "None");
/// ```
pub fn format_marks(marks: Option<f64>) -> String {
    let Some(marks) = marks else {
        return NULL_DISPLAY.to_string();
    };

    if marks.is_nan() {
        return "nan".to_string();
    }
    if marks.is_infinite() {
        return if marks > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = marks.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        // `{:e}` gives the shortest mantissa, e.g. `1.5e-5`
        let sci = format!("{:e}", marks);
        if let Some((mantissa, exponent)) = sci.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }
        return sci;
    }

    if marks.fract() == 0.0 {
        format!("{:.1}", marks)
    } else {
        marks.to_string()
    }
}
