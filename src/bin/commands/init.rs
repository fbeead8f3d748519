use anyhow::Result;
use rollbook::lens::students::StudentLens;
use rollbook::{RollbookConfig, StudentStore};

pub fn run(config: &RollbookConfig) -> Result<()> {
    let store = StudentStore::new(config.db_path.as_str());
    StudentLens::new(&store).initialize(&mut std::io::stdout())
}
