pub mod add;
pub mod config;
pub mod delete;
pub mod demo;
pub mod get;
pub mod init;
pub mod list;
pub mod update;

use anyhow::Result;
use rollbook::{RollbookConfig, StudentStore};

/// Store for the configured database, with the table guaranteed to exist
pub(crate) fn open_store(config: &RollbookConfig) -> Result<StudentStore> {
    let store = StudentStore::new(config.db_path.as_str());
    store.initialize()?;
    Ok(store)
}
