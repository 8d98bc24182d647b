//! Application configuration assembled from the environment.
//!
//! `.env` is loaded by the binary before [`load_app_config`] runs, so everything here
//! reads plain environment variables.

/// Catalog seed file loading and seeding
pub mod catalog;
/// Database connection, schema creation and health checks
pub mod database;

use std::path::PathBuf;
use tracing::debug;

/// Settings the binary needs to bring the ledger up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SeaORM connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// Optional TOML catalog of products to seed on start-up (`CATALOG_PATH`)
    pub catalog_path: Option<PathBuf>,
}

/// Reads `DATABASE_URL` and `CATALOG_PATH` from the environment.
///
/// `DATABASE_URL` falls back to a local `SQLite` file; an unset or blank
/// `CATALOG_PATH` disables seeding.
#[must_use]
pub fn load_app_config() -> AppConfig {
    let database_url = database::get_database_url();
    let catalog_path = std::env::var("CATALOG_PATH")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from);

    debug!(?catalog_path, "Loaded application configuration");

    AppConfig {
        database_url,
        catalog_path,
    }
}
