//! shopdesk CLI - runs the catalog and user CRUD services
//!
//! - `shopdesk catalog`: in-memory product catalog
//! - `shopdesk users`: user records in PostgreSQL

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "shopdesk",
    author,
    version,
    about = "Small CRUD HTTP services: a product catalog and user management"
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
    /// Run the in-memory product catalog service
    Catalog(commands::catalog::CatalogArgs),
    /// Run the user management service (PostgreSQL)
    Users(commands::users::UsersArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; values already in the environment win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Catalog(args) => commands::run_catalog(args).await?,
        Commands::Users(args) => commands::run_users(args).await?,
    }
    Ok(())
}
