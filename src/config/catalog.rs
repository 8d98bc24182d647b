//! Catalog seed loading from a TOML file.
//!
//! A catalog file lists products as `[[products]]` tables with the same fields as
//! [`NewProduct`]. Seeding creates each product whose SKU is not already present,
//! so running it on every start-up is safe.

use crate::{
    core::product::{self, NewProduct},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info, instrument};

/// Contents of a catalog seed file.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CatalogConfig {
    /// Products to create if missing
    #[serde(default)]
    pub products: Vec<NewProduct>,
}

/// Parses a catalog from TOML text.
pub fn parse_catalog(contents: &str) -> Result<CatalogConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog TOML: {e}"),
    })
}

/// Reads and parses the catalog file at `path`.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load catalog from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {path_ref:?}: {e}"),
    })?;
    parse_catalog(&contents)
}

/// Creates every catalog product whose SKU does not exist yet.
///
/// Products go through [`product::create_product`], so starting quantities are recorded
/// as "initial inventory" movements. Returns the number of products created.
#[instrument(skip_all, fields(entries = catalog.products.len()))]
pub async fn seed_catalog(db: &DatabaseConnection, catalog: &CatalogConfig) -> Result<usize> {
    let mut created = 0;

    for entry in &catalog.products {
        if product::get_product_by_sku(db, &entry.sku).await?.is_some() {
            debug!(sku = %entry.sku, "Catalog product already present, skipping");
            continue;
        }

        let product = product::create_product(db, entry.clone()).await?;
        debug!(id = product.id, sku = %product.sku, "Seeded catalog product");
        created += 1;
    }

    info!(created, "Catalog seeding complete");
    Ok(created)
}
