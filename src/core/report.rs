//! Report generation business logic.
//!
//! This module provides the product detail view (a product with its recent movements)
//! and catalog-wide stock statistics. All functions are read-only and return structured
//! data that an outer layer can render.

use crate::{
    core::product::round_to_cents,
    entities::{InventoryTransaction, Product, inventory_transaction, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, TransactionTrait, prelude::*};
use serde::Serialize;

/// Products with fewer units than this count as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Number of movements shown with a product when the caller does not ask for a limit.
pub const DEFAULT_HISTORY_LIMIT: u64 = 10;

/// A product together with its most recent movements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductHistory {
    /// The product, as currently stored
    pub product: product::Model,
    /// Recent movements, newest first
    pub transactions: Vec<inventory_transaction::Model>,
}

/// Aggregate stock figures across the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InventoryStats {
    /// Number of products in the catalog
    pub product_count: u64,
    /// Sum of all product quantities. Wider than a single quantity so that any
    /// catalog of valid products sums without overflow.
    pub total_units: i128,
    /// Sum of quantity × price, rounded to cents
    pub total_value: f64,
    /// Products with quantity below [`LOW_STOCK_THRESHOLD`]
    pub low_stock_count: u64,
}

/// Fetches a product with its most recent movements.
///
/// # Arguments
/// * `db` - Database connection
/// * `product_id` - ID of the product to show
/// * `limit` - Maximum number of movements to include (default 10)
///
/// Movements are ordered newest first; movements recorded in the same instant are
/// ordered by descending ID. Both reads run in one transaction, so the returned quantity
/// matches the returned movements even while other movements are being recorded.
///
/// # Errors
/// Returns `ProductNotFound` if the product does not exist.
pub async fn get_product_with_history(
    db: &DatabaseConnection,
    product_id: i64,
    limit: Option<u64>,
) -> Result<ProductHistory> {
    let txn = db.begin().await?;

    let Some(product) = Product::find_by_id(product_id).one(&txn).await? else {
        txn.rollback().await?;
        return Err(Error::ProductNotFound { id: product_id });
    };

    let transactions = product
        .find_related(InventoryTransaction)
        .order_by_desc(inventory_transaction::Column::CreatedAt)
        .order_by_desc(inventory_transaction::Column::Id)
        .limit(limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
        .all(&txn)
        .await?;

    txn.commit().await?;

    Ok(ProductHistory {
        product,
        transactions,
    })
}

/// Folds a set of products into catalog statistics.
#[must_use]
pub fn summarize(products: &[product::Model]) -> InventoryStats {
    let mut stats = products.iter().fold(
        InventoryStats {
            product_count: 0,
            total_units: 0,
            total_value: 0.0,
            low_stock_count: 0,
        },
        |mut stats, product| {
            stats.product_count += 1;
            stats.total_units += i128::from(product.quantity);
            // Quantities past 2^53 lose precision here, which a currency total tolerates
            #[allow(clippy::cast_precision_loss)]
            let line_value = product.quantity as f64 * product.price;
            stats.total_value += line_value;
            if product.quantity < LOW_STOCK_THRESHOLD {
                stats.low_stock_count += 1;
            }
            stats
        },
    );
    stats.total_value = round_to_cents(stats.total_value);
    stats
}

/// Computes catalog-wide stock statistics. Pure read.
pub async fn compute_stats(db: &DatabaseConnection) -> Result<InventoryStats> {
    let products = Product::find().all(db).await?;
    Ok(summarize(&products))
}
