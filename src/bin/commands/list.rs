use anyhow::Result;
use rollbook::lens::students::StudentLens;
use rollbook::{OutputFormat, RollbookConfig};

use super::open_store;

pub fn run(config: &RollbookConfig, output_format: OutputFormat) -> Result<()> {
    let store = open_store(config)?;
    StudentLens::new(&store).list(output_format, &mut std::io::stdout())?;
    Ok(())
}
