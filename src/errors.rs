//! Unified error type for the inventory ledger.
//!
//! The first three variants are caller mistakes (bad input, a taken SKU, an unknown
//! product). `Store` wraps whatever the database reported and is passed through untouched.

use thiserror::Error;

/// Every failure the ledger and its bootstrapping can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Input was missing, malformed or out of range.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the offending input field
        field: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Another product already uses this SKU.
    #[error("A product with SKU '{sku}' already exists")]
    DuplicateSku {
        /// The SKU that was requested
        sku: String,
    },

    /// No product has this ID.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The ID that was looked up
        id: i64,
    },

    /// The database failed or rejected a statement; passed through as reported.
    #[error("Database error: {0}")]
    Store(#[from] sea_orm::DbErr),

    /// Start-up configuration (catalog file, backend) could not be used.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },
}

impl Error {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// True when the failure was caused by the request itself and retrying it
    /// unchanged cannot succeed.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::DuplicateSku { .. } | Self::ProductNotFound { .. }
        )
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
