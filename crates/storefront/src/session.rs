//! Session controller.
//!
//! One explicit state object owns every mutable piece of the storefront -
//! selection, cart, wishlist, history, checkout - and the rendering layer
//! goes through its operations instead of ambient globals. This is also
//! what makes the whole system unit-testable without a rendering
//! environment.

use plainwear_core::{OrderId, Price, Product, ProductId};

use crate::cart::{Cart, CartLine};
use crate::catalog::Catalog;
use crate::checkout::{
    CheckoutError, CheckoutFlow, CheckoutStep, FormField, SettlementGateway,
};
use crate::history::ViewingHistory;
use crate::selection::{CategoryFilter, Selection, SortOrder};
use crate::wishlist::Wishlist;

/// A single shopper's in-memory session over a static catalog.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    catalog: Catalog,
    selection: Selection,
    cart: Cart,
    wishlist: Wishlist,
    history: ViewingHistory,
    checkout: CheckoutFlow,
}

impl StorefrontSession {
    /// Start a session over the given catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            history: ViewingHistory::new(),
            checkout: CheckoutFlow::new(),
        }
    }

    /// Start a session over the built-in demo catalog.
    #[must_use]
    pub fn with_fixture_catalog() -> Self {
        Self::new(Catalog::fixture())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The static catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog filtered and sorted by the current selection.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Product> {
        self.selection.visible_items(&self.catalog)
    }

    /// Current cart lines in insertion order.
    #[must_use]
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Current cart total.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.total()
    }

    /// Wishlist membership test.
    #[must_use]
    pub fn is_wishlisted(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Recently viewed product IDs, most recent first, at most four.
    #[must_use]
    pub fn recently_viewed(&self) -> &[ProductId] {
        self.history.items()
    }

    /// Current checkout step, or `None` when checkout is closed.
    #[must_use]
    pub const fn checkout_step(&self) -> Option<CheckoutStep> {
        self.checkout.step()
    }

    /// Read one checkout form field.
    #[must_use]
    pub fn form_value(&self, field: FormField) -> &str {
        self.checkout.form().get(field)
    }

    /// True while a settlement is in flight.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.checkout.is_processing()
    }

    /// ID of the placed order, present from Confirmation until the reset.
    #[must_use]
    pub const fn order_id(&self) -> Option<OrderId> {
        self.checkout.order_id()
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Restrict visible products to a category, or show all.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.selection.set_filter(filter);
    }

    /// Change the sort order of visible products.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.selection.set_sort(sort);
    }

    /// Add a catalog product to the cart. Returns `false` for an unknown ID.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> bool {
        match self.catalog.get(product_id) {
            Some(product) => {
                self.cart.add(product);
                true
            }
            None => false,
        }
    }

    /// Remove the first matching cart line; silent no-op when absent.
    /// Works mid-checkout too - the total recomputes immediately and the
    /// flow stays open.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        self.cart.remove(product_id)
    }

    /// Toggle wishlist membership; returns the new state.
    pub fn toggle_wishlist(&mut self, product_id: ProductId) -> bool {
        self.wishlist.toggle(product_id)
    }

    /// Open a product detail view: records the view in history and hands
    /// back the product. An unknown ID returns `None` and records nothing.
    pub fn view_product(&mut self, product_id: &ProductId) -> Option<&Product> {
        let product = self.catalog.get(product_id)?;
        self.history.record(product);
        self.catalog.get(product_id)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Open checkout over the current cart.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::EmptyCart`] if the cart has no lines.
    pub fn open_checkout(&mut self) -> Result<(), CheckoutError> {
        self.checkout.open(&self.cart)
    }

    /// Write one checkout form field.
    pub fn set_form_field(&mut self, field: FormField, value: impl Into<String>) {
        self.checkout.set_field(field, value);
    }

    /// Submit shipping details; advances Details -> Payment.
    ///
    /// # Errors
    ///
    /// See [`CheckoutFlow::submit_details`].
    pub fn submit_details(&mut self) -> Result<(), CheckoutError> {
        self.checkout.submit_details()
    }

    /// Submit payment details and settle through the gateway; advances
    /// Payment -> Confirmation on approval.
    ///
    /// # Errors
    ///
    /// See [`CheckoutFlow::submit_payment`].
    pub async fn submit_payment<G: SettlementGateway>(
        &mut self,
        gateway: &G,
    ) -> Result<OrderId, CheckoutError> {
        self.checkout.submit_payment(&self.cart, gateway).await
    }

    /// Back navigation, Payment -> Details.
    ///
    /// # Errors
    ///
    /// See [`CheckoutFlow::back_to_details`].
    pub fn back_to_details(&mut self) -> Result<(), CheckoutError> {
        self.checkout.back_to_details()
    }

    /// Abandon checkout from Details; cart and form are kept.
    ///
    /// # Errors
    ///
    /// See [`CheckoutFlow::close`].
    pub fn close_checkout(&mut self) -> Result<(), CheckoutError> {
        self.checkout.close()
    }

    /// Finish from Confirmation: empties the cart, blanks the form, and
    /// closes checkout. The wishlist and viewing history survive.
    ///
    /// # Errors
    ///
    /// See [`CheckoutFlow::continue_shopping`].
    pub fn continue_shopping(&mut self) -> Result<(), CheckoutError> {
        self.checkout.continue_shopping(&mut self.cart)
    }
}
