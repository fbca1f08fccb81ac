//! Integration tests for full cart-to-confirmation sessions.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use plainwear_core::{Price, ProductId};
use plainwear_storefront::StorefrontSession;
use plainwear_storefront::checkout::{
    CheckoutError, CheckoutStep, FixedDelaySettlement, FormField,
};

fn instant_gateway() -> FixedDelaySettlement {
    FixedDelaySettlement::new(Duration::ZERO)
}

fn fill_shipping(session: &mut StorefrontSession) {
    for (field, value) in [
        (FormField::Email, "jane@example.com"),
        (FormField::FullName, "Jane Doe"),
        (FormField::Address, "1 Main St"),
        (FormField::City, "Springfield"),
        (FormField::Zip, "01101"),
    ] {
        session.set_form_field(field, value);
    }
}

fn fill_payment(session: &mut StorefrontSession) {
    for (field, value) in [
        (FormField::CardNumber, "4242 4242 4242 4242"),
        (FormField::Expiry, "12/30"),
        (FormField::Cvc, "123"),
    ] {
        session.set_form_field(field, value);
    }
}

// =============================================================================
// Cart Tests
// =============================================================================

#[test]
fn test_pricing_scenario_matches_catalog() {
    let mut session = StorefrontSession::with_fixture_catalog();
    session.add_to_cart(&ProductId::new("TS-201"));
    session.add_to_cart(&ProductId::new("HC-101"));
    assert_eq!(session.cart_total(), Price::from_dollars(80));

    session.remove_from_cart(&ProductId::new("TS-201"));
    assert_eq!(session.cart_total(), Price::from_dollars(35));
    assert_eq!(session.cart_lines().len(), 1);
    assert_eq!(
        session.cart_lines().first().unwrap().product_id.as_str(),
        "HC-101"
    );
}

#[test]
fn test_duplicate_lines_and_single_removal() {
    let mut session = StorefrontSession::with_fixture_catalog();
    let shirt = ProductId::new("TS-201");
    session.add_to_cart(&shirt);
    session.add_to_cart(&shirt);
    session.remove_from_cart(&shirt);

    assert_eq!(session.cart_lines().len(), 1);
    assert_eq!(session.cart_total(), Price::from_dollars(45));
}

// =============================================================================
// Checkout Flow Tests
// =============================================================================

#[tokio::test]
async fn test_browse_to_confirmation_and_reset() {
    let mut session = StorefrontSession::with_fixture_catalog();
    session.add_to_cart(&ProductId::new("TS-201"));
    session.add_to_cart(&ProductId::new("HC-101"));
    session.toggle_wishlist(ProductId::new("PS-102"));

    session.open_checkout().unwrap();
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Details));

    fill_shipping(&mut session);
    session.submit_details().unwrap();
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Payment));

    fill_payment(&mut session);
    assert!(!session.is_processing());
    let order_id = session.submit_payment(&instant_gateway()).await.unwrap();
    assert!(!session.is_processing());
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Confirmation));
    assert_eq!(session.order_id(), Some(order_id));

    session.continue_shopping().unwrap();
    assert_eq!(session.checkout_step(), None);
    assert!(session.cart_lines().is_empty());
    assert_eq!(session.cart_total(), Price::zero());
    for field in FormField::ALL {
        assert!(session.form_value(field).is_empty(), "{field} should reset");
    }

    // The wishlist survives the reset.
    assert!(session.is_wishlisted(&ProductId::new("PS-102")));
}

#[test]
fn test_open_checkout_with_empty_cart_is_rejected() {
    let mut session = StorefrontSession::with_fixture_catalog();
    assert!(matches!(
        session.open_checkout(),
        Err(CheckoutError::EmptyCart)
    ));
    assert_eq!(session.checkout_step(), None);
}

#[test]
fn test_incomplete_details_stay_at_details() {
    let mut session = StorefrontSession::with_fixture_catalog();
    session.add_to_cart(&ProductId::new("HC-101"));
    session.open_checkout().unwrap();

    fill_shipping(&mut session);
    session.set_form_field(FormField::Address, "");

    assert!(matches!(
        session.submit_details(),
        Err(CheckoutError::Validation(_))
    ));
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Details));

    // Other entered values are untouched by the failed submit.
    assert_eq!(session.form_value(FormField::Email), "jane@example.com");
}

#[tokio::test]
async fn test_close_and_reopen_resumes_mid_entry() {
    let mut session = StorefrontSession::with_fixture_catalog();
    session.add_to_cart(&ProductId::new("TS-304"));
    session.open_checkout().unwrap();
    fill_shipping(&mut session);

    session.close_checkout().unwrap();
    assert_eq!(session.checkout_step(), None);
    // Closing is non-destructive.
    assert_eq!(session.cart_lines().len(), 1);
    assert_eq!(session.form_value(FormField::City), "Springfield");

    session.open_checkout().unwrap();
    session.submit_details().unwrap();
    fill_payment(&mut session);
    session.submit_payment(&instant_gateway()).await.unwrap();
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Confirmation));
}

#[tokio::test]
async fn test_back_navigation_then_forward_again() {
    let mut session = StorefrontSession::with_fixture_catalog();
    session.add_to_cart(&ProductId::new("PS-308"));
    session.open_checkout().unwrap();
    fill_shipping(&mut session);
    session.submit_details().unwrap();

    session.back_to_details().unwrap();
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Details));
    assert_eq!(session.form_value(FormField::FullName), "Jane Doe");

    session.submit_details().unwrap();
    fill_payment(&mut session);
    session.submit_payment(&instant_gateway()).await.unwrap();
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Confirmation));
}

#[test]
fn test_mid_checkout_removal_keeps_flow_open() {
    let mut session = StorefrontSession::with_fixture_catalog();
    session.add_to_cart(&ProductId::new("TS-201"));
    session.add_to_cart(&ProductId::new("HC-102"));
    session.open_checkout().unwrap();

    session.remove_from_cart(&ProductId::new("HC-102"));
    assert_eq!(session.cart_total(), Price::from_dollars(45));
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Details));

    // Emptying the cart does not force-close checkout either.
    session.remove_from_cart(&ProductId::new("TS-201"));
    assert_eq!(session.cart_total(), Price::zero());
    assert_eq!(session.checkout_step(), Some(CheckoutStep::Details));
}

#[tokio::test]
async fn test_two_orders_back_to_back() {
    let mut session = StorefrontSession::with_fixture_catalog();
    let gateway = instant_gateway();

    for _ in 0..2 {
        session.add_to_cart(&ProductId::new("HC-103"));
        session.open_checkout().unwrap();
        fill_shipping(&mut session);
        session.submit_details().unwrap();
        fill_payment(&mut session);
        session.submit_payment(&gateway).await.unwrap();
        session.continue_shopping().unwrap();

        assert!(session.cart_lines().is_empty());
        assert_eq!(session.checkout_step(), None);
    }
}
