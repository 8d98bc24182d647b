#![allow(clippy::result_large_err)]

use dotenvy::dotenv;
use stock_ledger::{
    config::{self, catalog, database},
    core::report,
    errors::Result,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    if let Err(e) = dotenv() {
        warn!("No .env file loaded: {}", e);
    }

    // 3. Load the application configuration
    let app_config = config::load_app_config();

    // 4. Connect and make sure the ledger tables exist
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed the catalog, if one is configured
    if let Some(path) = &app_config.catalog_path {
        let catalog = catalog::load_catalog(path)
            .inspect_err(|e| error!("Failed to load catalog: {}", e))?;
        catalog::seed_catalog(&db, &catalog)
            .await
            .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;
    }

    // 6. Health check and a stock summary
    database::check_health(&db)
        .await
        .inspect_err(|e| error!("Database health check failed: {}", e))?;

    let stats = report::compute_stats(&db).await?;
    info!(
        products = stats.product_count,
        units = stats.total_units,
        value = stats.total_value,
        low_stock = stats.low_stock_count,
        "Inventory ledger ready"
    );

    db.close().await?;
    Ok(())
}
