//! `shopdesk catalog` - run the in-memory product catalog service

use anyhow::{Context, Result};
use clap::Parser;

use shopdesk_server::http::{run_catalog_server, CATALOG_ADDR};
use shopdesk_server::Catalog;

use super::HttpArgs;

/// Arguments for the catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub http: HttpArgs,

    /// Start with an empty catalog instead of the default products
    #[arg(long)]
    pub empty: bool,
}

/// Run the catalog server (blocks until shutdown)
pub async fn run_catalog(args: CatalogArgs) -> Result<()> {
    let catalog = if args.empty {
        Catalog::new()
    } else {
        Catalog::seeded()
    };

    let config = args.http.into_config(CATALOG_ADDR);
    tracing::info!("Starting catalog service on {}", config.bind_addr);

    run_catalog_server(catalog.into_shared(), config)
        .await
        .context("Catalog server error")?;

    Ok(())
}
