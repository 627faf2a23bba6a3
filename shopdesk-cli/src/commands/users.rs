//! `shopdesk users` - run the PostgreSQL-backed user service

use anyhow::{Context, Result};
use clap::Parser;

use shopdesk_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS};
use shopdesk_server::http::{run_user_server, USERS_ADDR};

use super::HttpArgs;

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(flatten)]
    pub http: HttpArgs,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

/// Run the user server (blocks until shutdown)
pub async fn run_users(args: UsersArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let config = args.http.into_config(USERS_ADDR);
    tracing::info!("Starting user service on {}", config.bind_addr);

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    run_user_server(pool, config)
        .await
        .context("User server error")?;

    Ok(())
}
