//! itemctl CLI - run the item server and manage items from the terminal
//!
//! - `serve`: HTTP API over Postgres (or an in-memory store)
//! - `items`: list, add, update and delete items through a running server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "itemctl",
    author,
    version,
    about = "Named-number item store: REST server and command-line client"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Manage items through a running server (list, add, update, delete)
    Items(commands::items::ItemsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed args; a missing file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })
        .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Items(args) => commands::run_items(args).await?,
    }
    Ok(())
}
