use anyhow::Result;
use rollbook::lens::students::{StudentLens, StudentRollArgs};
use rollbook::{OutputFormat, RollbookConfig};

use super::open_store;

pub fn run(config: &RollbookConfig, args: StudentRollArgs, output_format: OutputFormat) -> Result<()> {
    let store = open_store(config)?;
    StudentLens::new(&store).get(&args, output_format, &mut std::io::stdout())?;
    Ok(())
}
