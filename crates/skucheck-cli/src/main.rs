//! skucheck: join an assortment reference table against per-geo stock
//! point exports and write the matched result.

mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "skucheck")]
#[command(about = "Check an assortment against per-geo stock point exports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the join and write the output table
    Run(run::RunArgs),
    /// Print the configured geo set and summary subset
    Geos {
        /// Path to a YAML run configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SKUCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run::execute(&args),
        Commands::Geos { config } => run::print_geos(config.as_deref()),
    }
}
