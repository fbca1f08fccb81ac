//! Static product catalog.
//!
//! The catalog is loaded once at startup - either the compiled-in fixture
//! or a JSON file - and never changes for the life of the session. There
//! is no inventory: every product is always purchasable.

use std::path::Path;
use std::sync::Arc;

use plainwear_core::{Category, Price, Product, ProductId, Rating};

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two products share the same ID.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    /// A product carries a negative unit price.
    #[error("negative price on product: {0}")]
    NegativePrice(ProductId),
    /// The catalog file could not be read.
    #[error("IO error: {0}")]
    Io(String),
    /// The catalog file is not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Immutable, finite sequence of purchasable products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an ID,
    /// or [`CatalogError::NegativePrice`] if a unit price is negative.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if !product.price.is_non_negative() {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }
        }

        tracing::debug!(count = products.len(), "Catalog loaded");
        Ok(Self {
            products: Arc::new(products),
        })
    }

    /// Load a catalog from a JSON file containing a product array.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// violates the catalog invariants.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let products: Vec<Product> =
            serde_json::from_str(&contents).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(products)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The built-in nine-product demo catalog.
    ///
    /// Three shirts at $45, three pairs of pants at $65, three hats at $35.
    #[must_use]
    pub fn fixture() -> Self {
        const SHIRT_IMAGE: &str =
            "https://wallpapers.com/images/high/blank-white-t-shirt-template-liwncdt13x1t5o3b-2.png";
        const PANTS_IMAGE: &str =
            "https://static.vecteezy.com/system/resources/previews/047/064/685/non_2x/a-mockup-of-white-shorts-for-men-free-png.png";
        const HAT_IMAGE: &str =
            "https://www.freeiconspng.com/uploads/baseball-white-cap-hat-png-14.png";

        let entries: [(&str, u64, &str, Category, u32, u32); 9] = [
            ("TS-201", 45, SHIRT_IMAGE, Category::Shirt, 45, 12),
            ("TS-304", 45, SHIRT_IMAGE, Category::Shirt, 48, 8),
            ("PS-102", 65, PANTS_IMAGE, Category::Pants, 42, 15),
            ("PS-205", 65, PANTS_IMAGE, Category::Pants, 46, 10),
            ("TS-405", 45, SHIRT_IMAGE, Category::Shirt, 43, 7),
            ("PS-308", 65, PANTS_IMAGE, Category::Pants, 47, 14),
            ("HC-101", 35, HAT_IMAGE, Category::Hat, 49, 18),
            ("HC-102", 35, HAT_IMAGE, Category::Hat, 47, 15),
            ("HC-103", 35, HAT_IMAGE, Category::Hat, 48, 20),
        ];

        let products = entries
            .into_iter()
            .map(|(id, dollars, image, category, rating_tenths, reviews)| Product {
                id: ProductId::new(id),
                name: id.to_owned(),
                price: Price::from_dollars(dollars),
                image: image.to_owned(),
                category,
                // Fixture scores are all within the five-star bound.
                rating: Rating::from_tenths(rating_tenths).expect("fixture rating in range"),
                reviews,
            })
            .collect();

        Self {
            products: Arc::new(products),
        }
    }
}
