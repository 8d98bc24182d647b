//! Database configuration module for the inventory ledger.
//!
//! This module handles the database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the unique SKU constraint, the `IN`/`OUT` column type and the foreign key from
//! `inventory_transactions.product_id` to `products.id` all come from the models.

use crate::entities::{InventoryTransaction, Product};
use crate::errors::{Error, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Used when `DATABASE_URL` is not set. `mode=rwc` lets `SQLite` create the file.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/inventory.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable or returns the
/// default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database at `database_url`.
///
/// The returned handle owns a connection pool; callers pass it by reference into every
/// ledger operation.
#[instrument(skip(database_url))]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Opening database connection");
    let db = Database::connect(database_url).await?;
    info!(backend = ?db.get_database_backend(), "Database connection opened");
    Ok(db)
}

/// Creates the `products` and `inventory_transactions` tables if they do not exist yet.
///
/// `products` is created first so the foreign key on `inventory_transactions` resolves.
/// Only `SQLite` is supported: other backends would need the `movement_type` enum type
/// created separately, so they are rejected with `Config` before anything is executed.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    if builder != DatabaseBackend::Sqlite {
        return Err(Error::Config {
            message: format!("unsupported database backend {builder:?}, expected SQLite"),
        });
    }
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();
    let mut transaction_table = schema.create_table_from_entity(InventoryTransaction);
    transaction_table.if_not_exists();

    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&transaction_table)).await?;

    debug!("Ledger tables ensured");
    Ok(())
}

/// Verifies the store is reachable. Any failure is returned as [`crate::errors::Error::Store`].
pub async fn check_health(db: &DatabaseConnection) -> Result<()> {
    db.ping().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{InventoryTransactionModel, ProductModel};
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        let _: Vec<InventoryTransactionModel> =
            InventoryTransaction::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_repeatable() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_check_health() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        check_health(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_rejects_other_backends() {
        use sea_orm::MockDatabase;

        for backend in [DatabaseBackend::Postgres, DatabaseBackend::MySql] {
            let db = MockDatabase::new(backend).into_connection();
            let result = create_tables(&db).await;
            assert!(matches!(result, Err(Error::Config { .. })));
            // Nothing reached the database
            assert!(db.into_transaction_log().is_empty());
        }
    }
}
