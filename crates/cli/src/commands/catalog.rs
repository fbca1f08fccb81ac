//! Catalog inspection commands.

use plainwear_core::ProductId;
use plainwear_storefront::catalog::Catalog;
use plainwear_storefront::config::StorefrontConfig;
use plainwear_storefront::selection::{CategoryFilter, Selection, SortOrder};
use thiserror::Error;

/// Errors that can occur during catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    /// Unknown category name.
    #[error("Invalid category: {0}. Valid categories: shirt, pants, hat")]
    InvalidCategory(String),

    /// Unknown sort name.
    #[error("Invalid sort: {0}. Valid sorts: price, rating")]
    InvalidSort(String),

    /// Unknown product ID.
    #[error("No product with id: {0}")]
    UnknownProduct(String),

    /// Catalog loading failed.
    #[error(transparent)]
    Catalog(#[from] plainwear_storefront::catalog::CatalogError),

    /// Configuration loading failed.
    #[error(transparent)]
    Config(#[from] plainwear_storefront::config::ConfigError),
}

fn load_catalog() -> Result<Catalog, CatalogCommandError> {
    let config = StorefrontConfig::from_env()?;
    match config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog file");
            Ok(Catalog::from_json_file(&path)?)
        }
        None => Ok(Catalog::fixture()),
    }
}

/// List visible products under the given filter and sort.
pub fn list(category: Option<&str>, sort: &str) -> Result<(), CatalogCommandError> {
    let catalog = load_catalog()?;

    let mut selection = Selection::new();
    if let Some(name) = category {
        let category = name
            .parse()
            .map_err(|_| CatalogCommandError::InvalidCategory(name.to_owned()))?;
        selection.set_filter(CategoryFilter::Only(category));
    }
    selection.set_sort(match sort {
        "price" => SortOrder::PriceAscending,
        "rating" => SortOrder::RatingDescending,
        other => return Err(CatalogCommandError::InvalidSort(other.to_owned())),
    });

    let visible = selection.visible_items(&catalog);
    tracing::info!("{} product(s):", visible.len());
    for product in visible {
        tracing::info!(
            "  {}  {}  {} ({} reviews)  [{}]",
            product.id,
            product.price,
            product.rating,
            product.reviews,
            product.category
        );
    }
    Ok(())
}

/// Show one product by ID.
pub fn show(id: &str) -> Result<(), CatalogCommandError> {
    let catalog = load_catalog()?;
    let product = catalog
        .get(&ProductId::new(id))
        .ok_or_else(|| CatalogCommandError::UnknownProduct(id.to_owned()))?;

    tracing::info!("ID:       {}", product.id);
    tracing::info!("Name:     {}", product.name);
    tracing::info!("Price:    {}", product.price);
    tracing::info!("Category: {}", product.category);
    tracing::info!("Rating:   {} ({} reviews)", product.rating, product.reviews);
    tracing::info!("Image:    {}", product.image);
    Ok(())
}
