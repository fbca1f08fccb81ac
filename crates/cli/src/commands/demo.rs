//! Scripted demo session.
//!
//! Walks a full session through the public controller surface: browse,
//! wishlist, view, cart, then the three checkout steps with a simulated
//! settlement.

use plainwear_core::{Category, ProductId};
use plainwear_storefront::StorefrontSession;
use plainwear_storefront::catalog::Catalog;
use plainwear_storefront::checkout::FormField;
use plainwear_storefront::config::StorefrontConfig;
use plainwear_storefront::selection::{CategoryFilter, SortOrder};
use thiserror::Error;

/// Errors that can occur during the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A requested product is not in the catalog.
    #[error("No product with id: {0}")]
    UnknownProduct(String),

    /// Catalog loading failed.
    #[error(transparent)]
    Catalog(#[from] plainwear_storefront::catalog::CatalogError),

    /// Configuration loading failed.
    #[error(transparent)]
    Config(#[from] plainwear_storefront::config::ConfigError),

    /// A checkout transition was rejected.
    #[error(transparent)]
    Checkout(#[from] plainwear_storefront::checkout::CheckoutError),
}

/// Run the scripted session.
pub async fn run(email: &str, products: &[String]) -> Result<(), DemoError> {
    let config = StorefrontConfig::from_env()?;
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::fixture(),
    };
    let gateway = config.settlement_gateway();
    let mut session = StorefrontSession::new(catalog);

    // Browse: hats, best-rated first.
    session.set_filter(CategoryFilter::Only(Category::Hat));
    session.set_sort(SortOrder::RatingDescending);
    tracing::info!("Browsing hats by rating:");
    for product in session.visible_items() {
        tracing::info!("  {}  {}  {}", product.id, product.price, product.rating);
    }

    // Inspect and cart the requested products.
    for id in products {
        let product_id = ProductId::new(id.as_str());
        session
            .view_product(&product_id)
            .ok_or_else(|| DemoError::UnknownProduct(id.clone()))?;
        session.toggle_wishlist(product_id.clone());
        session.add_to_cart(&product_id);
    }
    tracing::info!(
        "Cart: {} line(s), total {}",
        session.cart_lines().len(),
        session.cart_total()
    );

    // Checkout.
    session.open_checkout()?;
    session.set_form_field(FormField::Email, email);
    session.set_form_field(FormField::FullName, "Demo Shopper");
    session.set_form_field(FormField::Address, "1 Demo Street");
    session.set_form_field(FormField::City, "Demoville");
    session.set_form_field(FormField::Zip, "00001");
    session.submit_details()?;

    session.set_form_field(FormField::CardNumber, "4242 4242 4242 4242");
    session.set_form_field(FormField::Expiry, "12/30");
    session.set_form_field(FormField::Cvc, "123");
    let order_id = session.submit_payment(&gateway).await?;
    tracing::info!(%order_id, "Order confirmed");

    session.continue_shopping()?;
    tracing::info!(
        "Back to browsing. Cart is empty: {}. Recently viewed: {:?}",
        session.cart_lines().is_empty(),
        session.recently_viewed()
    );
    Ok(())
}
