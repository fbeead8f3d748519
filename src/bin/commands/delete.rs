use anyhow::Result;
use rollbook::lens::students::{StudentLens, StudentRollArgs};
use rollbook::RollbookConfig;
use tracing::info;

use super::open_store;

pub fn run(config: &RollbookConfig, args: StudentRollArgs) -> Result<()> {
    let store = open_store(config)?;
    let changed = StudentLens::new(&store).delete(&args, &mut std::io::stdout())?;
    if changed == 0 {
        info!("no student with roll {}, nothing deleted", args.roll_no);
    }
    Ok(())
}
