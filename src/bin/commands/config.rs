use anyhow::{anyhow, Result};
use rollbook::{OutputFormat, RollbookConfig, SchemaStatus, StudentStore};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ConfigInfo {
    db_path: String,
    exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    student_count: Option<u64>,
}

pub fn run(config: &RollbookConfig, output_format: OutputFormat) -> Result<()> {
    let db_path = config.db_path.clone();
    let exists = Path::new(&db_path).exists();
    let size_bytes = if exists {
        std::fs::metadata(&db_path).ok().map(|m| m.len())
    } else {
        None
    };

    // Only inspect an existing file; opening would create it
    let (schema_status, student_count) = if exists {
        let store = StudentStore::new(db_path.as_str());
        match store.status() {
            Ok(SchemaStatus::Ready) => (Some(SchemaStatus::Ready), store.count().ok()),
            Ok(status) => (Some(status), None),
            Err(_) => (None, None),
        }
    } else {
        (None, None)
    };

    let info = ConfigInfo {
        db_path,
        exists,
        size_bytes,
        schema_status: schema_status.map(|s| s.to_string()),
        student_count,
    };

    if output_format.is_json() {
        let json = match output_format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(&info),
            _ => serde_json::to_string(&info),
        }
        .map_err(|e| anyhow!("Failed to serialize to JSON: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", config.summary());
    if let Some(size) = info.size_bytes {
        println!("Database Size:      {} bytes", size);
    }
    if let Some(status) = &info.schema_status {
        println!("Schema Status:      {}", status);
    }
    if let Some(count) = info.student_count {
        println!("Students:           {}", count);
    }
    Ok(())
}
