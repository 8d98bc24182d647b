//! Product entity - Represents a catalog item and its current stock level.
//!
//! `quantity` is a denormalized running total of the product's movements. It is only
//! ever changed together with an `inventory_transactions` insert, inside one database
//! transaction.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Blue Widget")
    pub name: String,
    /// Optional long-form description
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Stock keeping unit, unique across the catalog
    #[sea_orm(unique)]
    pub sku: String,
    /// Units currently in stock; may go negative after an OUT movement
    pub quantity: i64,
    /// Unit price, rounded to cents
    pub price: f64,
    /// Optional grouping label (e.g., "hardware")
    pub category: Option<String>,
    /// Public URL of the product image, if one was uploaded
    pub image_url: Option<String>,
    /// When the product was created
    pub created_at: DateTimeUtc,
    /// When the product or its stock level last changed
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product has many inventory transactions
    #[sea_orm(has_many = "super::inventory_transaction::Entity")]
    InventoryTransactions,
}

impl Related<super::inventory_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryTransactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
