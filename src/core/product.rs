//! Product business logic - Creating products and looking them up.
//!
//! A product's stock starts out consistent with its ledger: when a starting quantity is
//! given, the matching IN movement is written in the same database transaction as the
//! product row. All functions are async and return Result types for error handling.

use crate::{
    entities::{MovementType, Product, inventory_transaction, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, SqlErr, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

/// Note attached to the movement that records a product's starting quantity.
pub const INITIAL_INVENTORY_NOTE: &str = "initial inventory";

/// Input for [`create_product`]. Also the shape of a `[[products]]` entry in a catalog file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Display name, required
    pub name: String,
    /// Optional long-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Stock keeping unit, required and unique
    pub sku: String,
    /// Starting stock; treated as zero when absent
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Unit price, must be non-negative
    pub price: f64,
    /// Optional grouping label
    #[serde(default)]
    pub category: Option<String>,
    /// Optional image URL
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Rounds a currency amount to two fractional digits.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn required_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn sku_conflict(err: DbErr, sku: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Error::DuplicateSku {
            sku: sku.to_string(),
        },
        _ => Error::Store(err),
    }
}

/// Retrieves every product, ordered alphabetically by name.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a product by SKU. Surrounding whitespace is ignored, matching how SKUs are stored.
pub async fn get_product_by_sku(
    db: &DatabaseConnection,
    sku: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Sku.eq(sku.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product, recording its starting quantity as an IN movement.
///
/// Name and SKU are trimmed and must not be empty. Blank optional fields are stored as
/// `None`. The price is rounded to cents.
///
/// # Errors
/// Returns an error if:
/// - The name or SKU is empty or whitespace-only (`Validation`)
/// - The price is negative or not finite (`Validation`)
/// - The starting quantity is negative (`Validation`)
/// - Another product already uses the SKU (`DuplicateSku`)
/// - The database insert fails (`Store`); nothing is written in that case
pub async fn create_product(
    db: &DatabaseConnection,
    new_product: NewProduct,
) -> Result<product::Model> {
    let NewProduct {
        name,
        description,
        sku,
        quantity,
        price,
        category,
        image_url,
    } = new_product;

    // Validate inputs
    let name = required_text("name", &name)?;
    let sku = required_text("sku", &sku)?;

    if !price.is_finite() || price < 0.0 {
        return Err(Error::validation(
            "price",
            format!("{price} is not a non-negative amount"),
        ));
    }

    let quantity = quantity.unwrap_or(0);
    if quantity < 0 {
        return Err(Error::validation(
            "quantity",
            format!("starting quantity {quantity} cannot be negative"),
        ));
    }

    // Product row and initial movement commit together
    let txn = db.begin().await?;

    let existing = Product::find()
        .filter(product::Column::Sku.eq(sku.as_str()))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(Error::DuplicateSku { sku });
    }

    let now = chrono::Utc::now();
    let product = product::ActiveModel {
        name: Set(name),
        description: Set(optional_text(description)),
        sku: Set(sku.clone()),
        quantity: Set(quantity),
        price: Set(round_to_cents(price)),
        category: Set(optional_text(category)),
        image_url: Set(optional_text(image_url)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|err| sku_conflict(err, &sku))?;

    if quantity > 0 {
        inventory_transaction::ActiveModel {
            product_id: Set(product.id),
            transaction_type: Set(MovementType::In),
            quantity: Set(quantity),
            notes: Set(Some(INITIAL_INVENTORY_NOTE.to_string())),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    Ok(product)
}
