//! Crate-level error type.
//!
//! Individual modules define their own errors; this wrapper exists for
//! callers (the CLI, embedding applications) that drive several modules
//! and want a single `Result` type.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Any error the storefront core can produce.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog construction or loading failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A checkout transition was rejected.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Configuration loading failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for [`StorefrontError`].
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::from(CheckoutError::EmptyCart);
        assert_eq!(err.to_string(), "checkout error: cart is empty");
    }
}
