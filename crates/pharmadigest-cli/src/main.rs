use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pharmadigest_core::AppConfig;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "pharmadigest")]
#[command(author, version, about = "Monthly biotech & pharma news digest")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config.toml (defaults to ~/.config/pharmadigest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Fetch all feeds and write the monthly report (default)
    Report {
        /// Look-back window passed to the fetcher
        #[arg(short, long)]
        days_back: Option<u32>,
        /// Directory to write the workbook to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// List configured feed sources
    Sources,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::debug!("Loaded {} feed sources", config.sources.len());

    match cli.command {
        Some(Commands::Report { days_back, output_dir }) => {
            commands::report::run(&config, days_back, output_dir).await
        }
        None => {
            commands::report::run(&config, None, None).await
        }
        Some(Commands::Sources) => {
            commands::sources::run(&config)
        }
    }
}
