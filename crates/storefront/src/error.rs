//! Unified error handling.
//!
//! Each engine defines its own error enum; `StorefrontError` wraps them so
//! callers that drive several engines can use a single `Result` type.

use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;

/// Library-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Cart transition failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// Returns `true` when the error came from operating on a missing line item.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Cart(CartError::NotFound(_)))
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
