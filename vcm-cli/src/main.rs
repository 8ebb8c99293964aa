//! vcm — personal Discogs collection manager
//!
//! Mirrors a Discogs collection folder into a local SQLite store and
//! answers genre/style queries against it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use vcm_cli::commands;
use vcm_common::Config;

#[derive(Parser, Debug)]
#[command(name = "vcm")]
#[command(about = "Personal Discogs collection manager")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sync the Discogs collection folder into the local store
    Sync,
    /// Pick a genre and list matching releases
    Genre {
        /// Narrow results to releases also tagged with this style
        style: Option<String>,
    },
    /// Pick a style and list matching releases
    Style {
        /// Narrow results to releases also tagged with this genre
        genre: Option<String>,
    },
    /// List releases, or distinct genre/style values
    List {
        /// "genre" or "style"; omit to list releases
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    // Credentials are required before any command dispatch
    let config = Config::from_env()?;

    match cli.command {
        Command::Sync => commands::sync::run(&config).await,
        Command::Genre { style } => commands::genre::run(&config, style).await,
        Command::Style { genre } => commands::style::run(&config, genre).await,
        Command::List { category } => commands::list::run(&config, category).await,
    }
}
