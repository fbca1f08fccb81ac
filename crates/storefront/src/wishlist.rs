//! Wishlist membership set.

use std::collections::HashSet;

use plainwear_core::ProductId;

/// Set of products the user has marked.
///
/// Toggled membership, never duplicated. The wishlist is independent of
/// checkout: completing or resetting an order leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    ids: HashSet<ProductId>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the ID if absent, remove it if present. Returns the new
    /// membership state. Toggling twice restores the original state.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if self.ids.remove(&product_id) {
            tracing::debug!(%product_id, "Removed from wishlist");
            false
        } else {
            tracing::debug!(%product_id, "Added to wishlist");
            self.ids.insert(product_id);
            true
        }
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.ids.contains(product_id)
    }

    /// Number of marked products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if nothing is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over marked product IDs (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new("TS-201");

        assert!(wishlist.toggle(id.clone()));
        assert!(wishlist.contains(&id));

        assert!(!wishlist.toggle(id.clone()));
        assert!(!wishlist.contains(&id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new("HC-101");
        wishlist.toggle(id.clone());
        assert_eq!(wishlist.len(), 1);

        // A second toggle removes rather than duplicating.
        wishlist.toggle(id.clone());
        wishlist.toggle(id);
        assert_eq!(wishlist.len(), 1);
    }
}
