//! Unified error handling for marketplace operations.
//!
//! Provides a unified `MarketError` type. Every [`crate::state::Marketplace`]
//! operation returns `Result<T, MarketError>` so a front-end has a single
//! type to render.

use ecoswap_core::ProductId;
use thiserror::Error;

use crate::forms::ValidationError;
use crate::store::StoreError;

/// Application-level error type for the marketplace.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Form input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reading or writing the persistent store failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// No listed product has this identifier.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

impl MarketError {
    /// Whether the error is the user's to fix (re-prompt) rather than an
    /// environment failure.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ProductNotFound(_))
    }
}

/// Result type alias for `MarketError`.
pub type Result<T> = std::result::Result<T, MarketError>;
