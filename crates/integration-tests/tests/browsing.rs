//! Integration tests for browse-side state: selection, wishlist, and
//! viewing history through the session controller.

#![allow(clippy::unwrap_used)]

use plainwear_core::{Category, ProductId};
use plainwear_storefront::StorefrontSession;
use plainwear_storefront::selection::{CategoryFilter, SortOrder};

// =============================================================================
// Selection Tests
// =============================================================================

#[test]
fn test_hat_filter_yields_exactly_three_hats() {
    let mut session = StorefrontSession::with_fixture_catalog();
    session.set_filter(CategoryFilter::Only(Category::Hat));

    let visible = session.visible_items();
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|p| p.category == Category::Hat));
}

#[test]
fn test_filtered_rating_sort_is_strictly_descending() {
    let mut session = StorefrontSession::with_fixture_catalog();
    session.set_filter(CategoryFilter::Only(Category::Hat));
    session.set_sort(SortOrder::RatingDescending);

    let visible = session.visible_items();
    for pair in visible.windows(2) {
        let (a, b) = (pair.first().unwrap(), pair.last().unwrap());
        assert!(a.rating > b.rating, "{} should outrank {}", a.id, b.id);
    }
}

#[test]
fn test_filter_back_to_all_restores_full_catalog() {
    let mut session = StorefrontSession::with_fixture_catalog();
    session.set_filter(CategoryFilter::Only(Category::Pants));
    assert_eq!(session.visible_items().len(), 3);

    session.set_filter(CategoryFilter::All);
    assert_eq!(session.visible_items().len(), 9);
}

// =============================================================================
// Wishlist Tests
// =============================================================================

#[test]
fn test_wishlist_double_toggle_restores_state() {
    let mut session = StorefrontSession::with_fixture_catalog();
    let id = ProductId::new("PS-102");

    // From absent.
    session.toggle_wishlist(id.clone());
    session.toggle_wishlist(id.clone());
    assert!(!session.is_wishlisted(&id));

    // From present.
    session.toggle_wishlist(id.clone());
    session.toggle_wishlist(id.clone());
    session.toggle_wishlist(id.clone());
    assert!(session.is_wishlisted(&id));
}

// =============================================================================
// Viewing History Tests
// =============================================================================

#[test]
fn test_history_keeps_four_most_recent_distinct_views() {
    let mut session = StorefrontSession::with_fixture_catalog();
    for id in ["TS-201", "TS-304", "PS-102", "PS-205", "HC-101"] {
        session.view_product(&ProductId::new(id)).unwrap();
    }

    let viewed: Vec<String> = session
        .recently_viewed()
        .iter()
        .map(|id| id.as_str().to_owned())
        .collect();
    assert_eq!(viewed, ["HC-101", "PS-205", "PS-102", "TS-304"]);

    // Re-viewing a recorded product changes neither order nor size.
    session.view_product(&ProductId::new("PS-102")).unwrap();
    let after: Vec<&str> = session
        .recently_viewed()
        .iter()
        .map(ProductId::as_str)
        .collect();
    assert_eq!(after, viewed);
}
