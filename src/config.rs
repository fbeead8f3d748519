use anyhow::{anyhow, Result};
use config::Config;
use std::collections::HashMap;
use std::path::Path;

/// Default database file, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "students.db";

pub struct RollbookConfig {
    /// Path to the SQLite database file holding the students table
    pub db_path: String,
}

const EMPTY_CONFIG: &str = r#"### rollbook configuration file

### SQLite database file, relative paths resolve against the working directory
# db_path = "students.db"
"#;

impl Default for RollbookConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
        }
    }
}

impl RollbookConfig {
    /// Function to create and initialize a new configuration
    ///
    /// Without a config file and without `ROLLBOOK_*` environment variables
    /// this resolves to the defaults.
    pub fn new(path: &Option<String>) -> Result<RollbookConfig> {
        let mut builder = Config::builder();

        // Add in toml configuration file, writing a template when it is missing
        if let Some(p) = path {
            let path = Path::new(p.as_str());
            if path.exists() {
                let path_str = path
                    .to_str()
                    .ok_or_else(|| anyhow!("Could not convert path to string"))?;
                builder = builder.add_source(config::File::with_name(path_str));
            } else {
                std::fs::write(p.as_str(), EMPTY_CONFIG)
                    .map_err(|e| anyhow!("Unable to create config file {}: {}", p, e))?;
            }
        }

        // Add in settings from the environment (with a prefix of ROLLBOOK)
        // E.g., `ROLLBOOK_DB_PATH=/tmp/students.db ./rollbook` would set the database file
        builder = builder.add_source(config::Environment::with_prefix("ROLLBOOK"));

        let settings = builder
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        let config = settings
            .try_deserialize::<HashMap<String, String>>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))?;

        let db_path = match config.get("db_path") {
            Some(p) => expand_home(p)?,
            None => DEFAULT_DB_PATH.to_string(),
        };

        Ok(RollbookConfig { db_path })
    }

    /// Display configuration summary
    pub fn summary(&self) -> String {
        let exists = Path::new(&self.db_path).exists();
        let lines = [
            format!("Database Path:      {}", self.db_path),
            format!("Database Exists:    {}", exists),
        ];
        lines.join("\n")
    }
}

/// Expand a leading `~/` to the user's home directory
fn expand_home(path: &str) -> Result<String> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
            let home_str = home
                .to_str()
                .ok_or_else(|| anyhow!("Could not convert home directory path to string"))?;
            Ok(format!("{}/{}", home_str.trim_end_matches('/'), rest))
        }
        None => Ok(path.to_string()),
    }
}
