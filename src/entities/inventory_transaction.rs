//! Inventory transaction entity - One IN or OUT stock movement for a product.
//!
//! Rows are append-only. `quantity` is always the positive amount moved; the direction
//! lives in `transaction_type`.

use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Direction of a stock movement, stored as `"IN"` / `"OUT"`
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "movement_type")]
pub enum MovementType {
    /// Stock received
    #[sea_orm(string_value = "IN")]
    #[serde(rename = "IN")]
    In,
    /// Stock removed
    #[sea_orm(string_value = "OUT")]
    #[serde(rename = "OUT")]
    Out,
}

impl MovementType {
    /// Converts a positive movement quantity into the change it makes to a product's stock.
    #[must_use]
    pub const fn signed(self, quantity: i64) -> i64 {
        match self {
            Self::In => quantity,
            Self::Out => -quantity,
        }
    }

    /// The stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("IN") {
            Ok(Self::In)
        } else if trimmed.eq_ignore_ascii_case("OUT") {
            Ok(Self::Out)
        } else {
            Err(Error::validation(
                "transaction_type",
                format!("'{s}' is not IN or OUT"),
            ))
        }
    }
}

/// Inventory transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the product whose stock moved
    pub product_id: i64,
    /// IN or OUT
    pub transaction_type: MovementType,
    /// Units moved, always positive
    pub quantity: i64,
    /// Free-text note (e.g., "initial inventory", a supplier reference)
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    /// When the movement was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `InventoryTransaction` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
