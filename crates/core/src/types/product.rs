//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId, Rating};

/// A purchasable catalog entry.
///
/// Products are created once at process start from static configuration
/// and never mutated during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier (SKU).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image URL for the rendering layer.
    pub image: String,
    /// Garment category.
    pub category: Category,
    /// Average review score.
    pub rating: Rating,
    /// Number of reviews behind the score.
    pub reviews: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip() {
        let product = Product {
            id: ProductId::new("TS-201"),
            name: "TS-201".to_owned(),
            price: Price::from_dollars(45),
            image: "https://example.com/shirt.png".to_owned(),
            category: Category::Shirt,
            rating: Rating::from_tenths(45).unwrap(),
            reviews: 12,
        };

        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
