//! Filter and sort projections over the catalog.
//!
//! A pure view: `visible_items` recomputes from the static catalog and the
//! current filter/sort on every call, with no side effects.

use plainwear_core::{Category, Product};

use crate::catalog::Catalog;

/// Which categories are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every product.
    #[default]
    All,
    /// Show only one category.
    Only(Category),
}

impl CategoryFilter {
    fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }
}

/// How visible products are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Cheapest first.
    #[default]
    PriceAscending,
    /// Best-rated first.
    RatingDescending,
}

/// Current filter and sort state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    filter: CategoryFilter,
    sort: SortOrder,
}

impl Selection {
    /// Create a selection with the defaults: all categories, price ascending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict visible products to a category, or show all.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        tracing::debug!(?filter, "Selection filter changed");
        self.filter = filter;
    }

    /// Change the sort order.
    pub fn set_sort(&mut self, sort: SortOrder) {
        tracing::debug!(?sort, "Selection sort changed");
        self.sort = sort;
    }

    /// The current filter.
    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// The current sort order.
    #[must_use]
    pub const fn sort(&self) -> SortOrder {
        self.sort
    }

    /// The catalog filtered then sorted.
    ///
    /// The sort is stable, so products with equal keys keep catalog order.
    #[must_use]
    pub fn visible_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let mut items: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect();

        match self.sort {
            SortOrder::PriceAscending => items.sort_by_key(|p| p.price),
            SortOrder::RatingDescending => {
                items.sort_by(|a, b| b.rating.cmp(&a.rating));
            }
        }

        items
    }
}
