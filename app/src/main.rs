#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use lexis_config::Config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;
mod output;
mod shell;

use command::{
    AnalyzeStrategy, CommandStrategy, InfoStrategy, InitStrategy, InterpretStrategy, ShellInput,
    ShellStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "lexis")]
#[command(about = "Analyze strings and query them by their properties", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session over an in-memory store
    Shell {
        /// Extra values to analyze before the prompt opens
        #[arg(short, long)]
        seed: Vec<String>,
    },
    /// Print the properties of a single string
    Analyze {
        value: String,
    },
    /// Show the filters a natural-language query translates to
    Interpret {
        query: String,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Shell { seed } => {
            ShellStrategy
                .execute(ShellInput {
                    config,
                    extra_seed: seed,
                })
                .await
        }
        Commands::Analyze { value } => AnalyzeStrategy.execute((config, value)).await,
        Commands::Interpret { query } => InterpretStrategy.execute((config, query)).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(config).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
