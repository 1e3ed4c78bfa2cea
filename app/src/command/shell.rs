use lexis_config::Config;
use lexis_core::StringService;
use tracing::info;

use crate::shell::Shell;

/// Input parameters for the Shell command strategy.
#[derive(Debug, Clone)]
pub struct ShellInput {
    pub config: Config,
    /// Values from `--seed`, analyzed after the configured seed list
    pub extra_seed: Vec<String>,
}

/// Strategy for the interactive shell.
///
/// Builds one in-memory store for the lifetime of the session, seeds it
/// from config and the command line, then serves stdin line by line.
#[derive(Debug, Clone, Copy)]
pub struct ShellStrategy;

impl super::CommandStrategy for ShellStrategy {
    type Input = ShellInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let shell = Shell::new(StringService::in_memory(), input.config.output.pretty);

        shell.seed(
            input
                .config
                .store
                .seed
                .iter()
                .chain(&input.extra_seed)
                .map(String::as_str),
        );
        info!(
            "Store ready with {} entries",
            shell.service().list_all()?.len()
        );

        let stdin = std::io::stdin();
        shell.run(stdin.lock(), std::io::stdout())?;

        info!(
            "Shell closed with {} entries",
            shell.service().list_all()?.len()
        );
        Ok(())
    }
}
