//! Integration tests for Plainwear.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p plainwear-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `browsing` - Filter, sort, wishlist, and viewing-history flows
//! - `checkout_flow` - Full cart-to-confirmation sessions through the
//!   session controller
//!
//! These tests drive [`plainwear_storefront::StorefrontSession`] directly:
//! the core has no network surface, so the controller's operations are the
//! integration boundary.

pub use plainwear_storefront::StorefrontSession;
