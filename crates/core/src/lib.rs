//! Plainwear Core - Shared types library.
//!
//! This crate provides common types used across all Plainwear components:
//! - `storefront` - In-memory storefront core (catalog, cart, checkout)
//! - `cli` - Command-line tools for catalog inspection and demo sessions
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no rendering.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails,
//!   ratings, and the catalog product record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
