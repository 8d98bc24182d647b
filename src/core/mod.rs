//! Core business logic - the framework-agnostic inventory ledger.
//!
//! Every operation takes the database handle as an argument; the caller owns the
//! connection and decides its lifetime.

/// Stock movements and the ledger behind each product's quantity
pub mod movement;
/// Product creation and lookups
pub mod product;
/// Product detail view and catalog statistics
pub mod report;

pub use movement::{get_transactions_for_product, ledger_quantity, record_movement};
pub use product::{
    NewProduct, create_product, get_product_by_id, get_product_by_sku, list_products,
};
pub use report::{InventoryStats, ProductHistory, compute_stats, get_product_with_history};
