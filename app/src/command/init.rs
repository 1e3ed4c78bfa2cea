use lexis_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/lexis/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - logging.level: default log filter (RUST_LOG overrides it)");
        println!("   - output.pretty: pretty-print JSON responses");
        println!("   - store.seed: strings analyzed into the store when a shell starts");
        println!();
        Ok(())
    }
}
