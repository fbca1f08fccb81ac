//! Plainwear storefront core.
//!
//! An in-memory, single-session storefront: a read-only catalog, filter
//! and sort projections over it, an ordered cart, a wishlist, a bounded
//! viewing history, and a multi-step checkout flow with a simulated
//! settlement call. The crate is a pure state/behavior contract - a
//! rendering layer subscribes to the reads on [`session::StorefrontSession`]
//! and drives the writes; nothing here renders, routes, or persists.
//!
//! # Modules
//!
//! - [`catalog`] - static product list, compiled-in fixture or JSON file
//! - [`selection`] - category filter and sort order projections
//! - [`cart`] - ordered multiset of cart lines with derived totals
//! - [`wishlist`] - toggled set of marked product IDs
//! - [`history`] - recency-ordered log of viewed products, capped at 4
//! - [`checkout`] - the Details -> Payment -> Confirmation state machine
//! - [`session`] - the controller owning all of the above
//! - [`config`] - environment-variable configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod history;
pub mod selection;
pub mod session;
pub mod wishlist;

pub use error::StorefrontError;
pub use session::StorefrontSession;
