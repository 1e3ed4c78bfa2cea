use lexis_config::Config;

/// Strategy for displaying the effective configuration.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        println!("=== lexis Configuration ===\n");

        let path = Config::config_path()?;
        if path.exists() {
            println!("File: {}", path.display());
        } else {
            println!("File: {} (not found, using defaults)", path.display());
        }
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        println!();

        println!("Output:");
        println!("  Pretty: {}", config.output.pretty);
        println!();

        println!("Store:");
        if config.store.seed.is_empty() {
            println!("  Seed: (empty)");
        } else {
            println!("  Seed ({}):", config.store.seed.len());
            for value in &config.store.seed {
                println!("    - {}", truncate(value, 60));
            }
        }

        Ok(())
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}
