//! Cart engine.
//!
//! An ordered multiset of cart lines. Adding the same product twice makes
//! two lines; removal by ID takes out the first matching line only, so one
//! instance can be removed while the other stays.

use plainwear_core::{Price, Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product instance currently held in the cart.
///
/// A snapshot of the catalog product at add time, so the rendering layer
/// can show the line without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog ID of the product on this line.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Price,
    /// Image URL for the rendering layer.
    pub image: String,
}

impl CartLine {
    fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Ordered multiset of selected products with derived totals.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line for the product. Always succeeds: the catalog has no
    /// stock limits.
    pub fn add(&mut self, product: &Product) {
        tracing::debug!(product_id = %product.id, "Added to cart");
        self.lines.push(CartLine::for_product(product));
    }

    /// Remove the first line matching the product ID.
    ///
    /// Returns `false` without changing the cart when no line matches;
    /// the UI only offers removal of lines it knows exist, so an unmatched
    /// ID is a silent no-op rather than an error.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        match self.lines.iter().position(|l| &l.product_id == product_id) {
            Some(index) => {
                self.lines.remove(index);
                tracing::debug!(%product_id, "Removed from cart");
                true
            }
            None => false,
        }
    }

    /// Sum of unit prices of all current lines; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::zero(), |total, line| {
                total.checked_add(line.unit_price).unwrap_or(total)
            })
    }

    /// Current lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line. Used when a completed checkout resets.
    pub fn clear(&mut self) {
        tracing::debug!(lines = self.lines.len(), "Cart cleared");
        self.lines.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::catalog::Catalog;

    use super::*;

    fn product<'a>(catalog: &'a Catalog, id: &str) -> &'a Product {
        catalog.get(&ProductId::new(id)).unwrap()
    }

    #[test]
    fn test_total_tracks_lines() {
        let catalog = Catalog::fixture();
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Price::zero());

        cart.add(product(&catalog, "TS-201"));
        cart.add(product(&catalog, "HC-101"));
        assert_eq!(cart.total(), Price::from_dollars(80));

        assert!(cart.remove(&ProductId::new("TS-201")));
        assert_eq!(cart.total(), Price::from_dollars(35));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines().first().unwrap().product_id.as_str(), "HC-101");
    }

    #[test]
    fn test_duplicate_lines_removed_one_at_a_time() {
        let catalog = Catalog::fixture();
        let mut cart = Cart::new();
        cart.add(product(&catalog, "TS-201"));
        cart.add(product(&catalog, "TS-201"));
        assert_eq!(cart.len(), 2);

        assert!(cart.remove(&ProductId::new("TS-201")));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::from_dollars(45));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let catalog = Catalog::fixture();
        let mut cart = Cart::new();
        cart.add(product(&catalog, "HC-101"));

        assert!(!cart.remove(&ProductId::new("XX-000")));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::from_dollars(35));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = Catalog::fixture();
        let mut cart = Cart::new();
        for id in ["PS-102", "TS-201", "HC-101"] {
            cart.add(product(&catalog, id));
        }

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["PS-102", "TS-201", "HC-101"]);
    }

    #[test]
    fn test_clear() {
        let catalog = Catalog::fixture();
        let mut cart = Cart::new();
        cart.add(product(&catalog, "TS-201"));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::zero());
    }
}
