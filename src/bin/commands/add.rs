use anyhow::Result;
use rollbook::lens::students::{StudentAddArgs, StudentLens};
use rollbook::RollbookConfig;

use super::open_store;

pub fn run(config: &RollbookConfig, args: StudentAddArgs) -> Result<()> {
    let store = open_store(config)?;
    StudentLens::new(&store).add(&args, &mut std::io::stdout())?;
    Ok(())
}
