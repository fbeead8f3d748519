use anyhow::Result;
use rollbook::lens::students::{StudentLens, StudentUpdateArgs};
use rollbook::RollbookConfig;
use tracing::info;

use super::open_store;

pub fn run(config: &RollbookConfig, args: StudentUpdateArgs) -> Result<()> {
    let store = open_store(config)?;
    let changed = StudentLens::new(&store).update_marks(&args, &mut std::io::stdout())?;
    if changed == 0 {
        info!("no student with roll {}, nothing updated", args.roll_no);
    }
    Ok(())
}
