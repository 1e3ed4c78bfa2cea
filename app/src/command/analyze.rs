use lexis_config::Config;
use lexis_core::StringEntry;

use crate::output::render;

/// Strategy for analyzing a single string without a store.
///
/// Prints the entry exactly as the shell's `add` would return it.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeStrategy;

impl super::CommandStrategy for AnalyzeStrategy {
    type Input = (Config, String);

    async fn execute(&self, (config, value): Self::Input) -> anyhow::Result<()> {
        let entry = StringEntry::new(value);
        println!("{}", render(&entry, config.output.pretty)?);
        Ok(())
    }
}
