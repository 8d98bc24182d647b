//! Shared test utilities for the inventory ledger.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test products and movements with sensible defaults.

use crate::{
    core::{
        movement,
        product::{self, NewProduct},
    },
    entities::{self, MovementType},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a `NewProduct` with sensible defaults.
///
/// # Defaults
/// * `description`: None
/// * `quantity`: None (starts at zero, no initial movement)
/// * `price`: 10.0
/// * `category`: None
/// * `image_url`: None
#[must_use]
pub fn new_product(name: &str, sku: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: None,
        sku: sku.to_string(),
        quantity: None,
        price: 10.0,
        category: None,
        image_url: None,
    }
}

/// Creates a test product with zero stock and a price of 10.0.
pub async fn create_test_product(
    db: &DatabaseConnection,
    sku: &str,
) -> Result<entities::product::Model> {
    product::create_product(db, new_product(&format!("Product {sku}"), sku)).await
}

/// Creates a test product with a starting quantity and custom price.
/// A positive `quantity` records the "initial inventory" movement.
pub async fn create_stocked_product(
    db: &DatabaseConnection,
    sku: &str,
    quantity: i64,
    price: f64,
) -> Result<entities::product::Model> {
    let mut args = new_product(&format!("Product {sku}"), sku);
    args.quantity = Some(quantity);
    args.price = price;
    product::create_product(db, args).await
}

/// Records a movement with no note.
pub async fn record_test_movement(
    db: &DatabaseConnection,
    product_id: i64,
    movement_type: MovementType,
    quantity: i64,
) -> Result<entities::inventory_transaction::Model> {
    movement::record_movement(db, product_id, movement_type, quantity, None).await
}

/// Sets up a complete test environment with one empty product.
/// Returns (db, product) for movement-related tests.
pub async fn setup_with_product() -> Result<(DatabaseConnection, entities::product::Model)> {
    let db = setup_test_db().await?;
    let product = create_test_product(&db, "TEST-001").await?;
    Ok((db, product))
}

/// A file-backed `SQLite` database in the temp directory, deleted on drop.
///
/// Unlike `sqlite::memory:`, which `SeaORM` limits to a single pooled connection,
/// this pool hands out several connections, so concurrent operations really overlap.
pub struct FileTestDb {
    /// Pooled connection to the file
    pub db: DatabaseConnection,
    path: std::path::PathBuf,
}

impl Drop for FileTestDb {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

/// Creates a file-backed test database with `max_connections` pooled connections.
pub async fn setup_file_test_db(name: &str, max_connections: u32) -> Result<FileTestDb> {
    let path = std::env::temp_dir().join(format!(
        "stock-ledger-{name}-{}-{}.sqlite",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));

    let mut options =
        sea_orm::ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
    options.max_connections(max_connections);
    let db = sea_orm::Database::connect(options).await?;
    crate::config::database::create_tables(&db).await?;

    Ok(FileTestDb { db, path })
}

/// Returns another handle to the same `SQLite` pool.
///
/// `DatabaseConnection` is not `Clone` when sea-orm's `mock` feature is on (as it is
/// for tests), so this stands in for `db.clone()` on pooled connections.
pub fn share_connection(db: &DatabaseConnection) -> DatabaseConnection {
    sea_orm::SqlxSqliteConnector::from_sqlx_sqlite_pool(db.get_sqlite_connection_pool().clone())
}
