//! Bounded viewing history.

use plainwear_core::{Product, ProductId};

/// Recency-ordered log of inspected products, most recent first.
///
/// Only first-time views are recorded: re-viewing a product that is
/// already in the log neither reorders nor duplicates it. The log is
/// capped at [`ViewingHistory::CAPACITY`] entries.
#[derive(Debug, Clone, Default)]
pub struct ViewingHistory {
    ids: Vec<ProductId>,
}

impl ViewingHistory {
    /// Maximum number of remembered products.
    pub const CAPACITY: usize = 4;

    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a product view.
    ///
    /// Prepends the product's ID if it is not already present and drops
    /// the oldest entry beyond the cap. A view of an already-recorded
    /// product is ignored.
    pub fn record(&mut self, product: &Product) {
        if self.ids.contains(&product.id) {
            return;
        }
        tracing::debug!(product_id = %product.id, "Recorded product view");
        self.ids.insert(0, product.id.clone());
        self.ids.truncate(Self::CAPACITY);
    }

    /// Viewed product IDs, most recent first.
    #[must_use]
    pub fn items(&self) -> &[ProductId] {
        &self.ids
    }

    /// Number of recorded views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if nothing has been viewed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
