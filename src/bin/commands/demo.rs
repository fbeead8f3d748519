use anyhow::Result;
use rollbook::lens::students::StudentLens;
use rollbook::{OutputFormat, RollbookConfig, StudentStore};

/// Run the scripted walkthrough against the configured database
///
/// The lens prints the table confirmation itself, so the store is not
/// pre-initialized here.
pub fn run(config: &RollbookConfig, output_format: OutputFormat) -> Result<()> {
    let store = StudentStore::new(config.db_path.as_str());
    let lens = StudentLens::new(&store);
    lens.run_demo(output_format, &mut std::io::stdout())
}
