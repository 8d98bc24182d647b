//! Entity module - Contains the SeaORM entity definitions for the ledger tables.
//! `products` holds current stock state and `inventory_transactions` is the
//! append-only movement history behind it.

pub mod inventory_transaction;
pub mod product;

// Re-export specific types to avoid conflicts
pub use inventory_transaction::{
    Column as InventoryTransactionColumn, Entity as InventoryTransaction,
    Model as InventoryTransactionModel, MovementType,
};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
