//! Movement business logic - Recording IN/OUT stock movements and reading the ledger.
//!
//! Every movement changes the product's stock and appends one `inventory_transactions`
//! row inside a single database transaction, so `products.quantity` always equals the
//! sum of IN movements minus the sum of OUT movements. The stock change is applied with
//! a store-side `quantity = quantity + delta` update rather than read-modify-write.
//! OUT movements are allowed to take stock below zero.

use crate::{
    core::product::optional_text,
    entities::{InventoryTransaction, MovementType, Product, inventory_transaction, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*, sea_query::Expr};

/// Records a stock movement and applies it to the product's quantity.
///
/// # Arguments
/// * `product_id` - The product whose stock moves
/// * `movement_type` - IN adds `quantity`, OUT subtracts it
/// * `quantity` - Units moved, must be positive
/// * `notes` - Optional free text; blank notes are stored as `None`
///
/// # Errors
/// Returns an error if:
/// - `quantity` is zero or negative (`Validation`)
/// - The product does not exist (`ProductNotFound`)
/// - The resulting stock would not fit in an `i64` (`Validation`)
/// - Either write fails (`Store`); the transaction is rolled back and nothing changes
pub async fn record_movement(
    db: &DatabaseConnection,
    product_id: i64,
    movement_type: MovementType,
    quantity: i64,
    notes: Option<String>,
) -> Result<inventory_transaction::Model> {
    if quantity <= 0 {
        return Err(Error::validation(
            "quantity",
            format!("movement quantity must be positive, got {quantity}"),
        ));
    }

    // Use a transaction to ensure atomicity
    let txn = db.begin().await?;
    let now = chrono::Utc::now();

    // Atomically update the stock: quantity = quantity + delta, only while the
    // result stays inside the i64 column range
    let delta = movement_type.signed(quantity);
    let in_range = if delta > 0 {
        product::Column::Quantity.lte(i64::MAX - delta)
    } else {
        product::Column::Quantity.gte(i64::MIN - delta)
    };
    let updated = Product::update_many()
        .col_expr(
            product::Column::Quantity,
            Expr::col(product::Column::Quantity).add(delta),
        )
        .col_expr(product::Column::UpdatedAt, Expr::value(now))
        .filter(product::Column::Id.eq(product_id))
        .filter(in_range)
        .exec(&txn)
        .await?;

    if updated.rows_affected == 0 {
        let exists = Product::find_by_id(product_id).one(&txn).await?.is_some();
        txn.rollback().await?;
        if !exists {
            return Err(Error::ProductNotFound { id: product_id });
        }
        return Err(Error::validation(
            "quantity",
            format!("{movement_type} of {quantity} would overflow the stock level"),
        ));
    }

    let movement = inventory_transaction::ActiveModel {
        product_id: Set(product_id),
        transaction_type: Set(movement_type),
        quantity: Set(quantity),
        notes: Set(optional_text(notes)),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    // Commit the transaction
    txn.commit().await?;

    Ok(movement)
}

/// Retrieves a product's full movement history, newest first.
///
/// Movements recorded in the same instant are ordered by descending ID.
/// An unknown product simply has no history.
pub async fn get_transactions_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<inventory_transaction::Model>> {
    InventoryTransaction::find()
        .filter(inventory_transaction::Column::ProductId.eq(product_id))
        .order_by_desc(inventory_transaction::Column::CreatedAt)
        .order_by_desc(inventory_transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Sums a movement history into the stock level it implies (IN minus OUT).
///
/// Accumulates in `i128` so no ordering of the history can overflow.
#[must_use]
pub fn net_quantity(movements: &[inventory_transaction::Model]) -> i128 {
    movements
        .iter()
        .map(|movement| i128::from(movement.transaction_type.signed(movement.quantity)))
        .sum()
}

/// Recomputes a product's stock from its ledger, for auditing the cached `quantity`.
///
/// # Errors
/// Returns `ProductNotFound` if the product does not exist.
pub async fn ledger_quantity(db: &DatabaseConnection, product_id: i64) -> Result<i64> {
    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    let movements = product.find_related(InventoryTransaction).all(db).await?;
    let net = net_quantity(&movements);
    i64::try_from(net).map_err(|_| {
        Error::validation("quantity", format!("ledger total {net} is outside the i64 range"))
    })
}
