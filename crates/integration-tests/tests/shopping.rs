//! Integration tests for catalog, wishlist and cart behaviour.

#![allow(clippy::unwrap_used)]

use ecoswap_core::{Price, ProductId};
use ecoswap_integration_tests::{TestContext, draft};
use ecoswap_storefront::MarketError;
use ecoswap_storefront::forms::ValidationError;

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_new_listing_is_listed_first_with_fields_unchanged() {
    let ctx = TestContext::new();
    let mut market = ctx.market();

    market.sell(&draft("Book", "Books", "3")).unwrap();
    let kite = market.sell(&draft("Kite", "Toys", "6.75")).unwrap();

    let first = market.catalog().list().first().unwrap();
    assert_eq!(first, &kite);
    assert_eq!(first.title, "Kite");
    assert_eq!(first.description, "Kite, gently used");
    assert_eq!(first.price, Price::parse("6.75").unwrap());
}

#[test]
fn test_listing_keeps_text_exactly_as_entered() {
    let ctx = TestContext::new();
    let mut market = ctx.market();

    let mut padded = draft(" Chair ", "Furniture", "10");
    padded.description = "  Oak,\tbarely used \n".to_owned();
    market.sell(&padded).unwrap();

    let listed = market.catalog().list().first().unwrap();
    assert_eq!(listed.title, " Chair ");
    assert_eq!(listed.description, "  Oak,\tbarely used \n");
    assert_eq!(ctx.market().catalog().list().first(), Some(listed));
}

#[test]
fn test_rejected_listing_leaves_no_trace() {
    let ctx = TestContext::new();
    let mut market = ctx.market();

    let mut incomplete = draft("Radio", "Electronic", "12");
    incomplete.image.clear();
    let err = market.sell(&incomplete).unwrap_err();

    assert!(matches!(
        err,
        MarketError::Validation(ValidationError::MissingField { field: "image" })
    ));
    assert!(market.catalog().is_empty());
    assert!(!ctx.path().join("products.json").exists());
}

#[test]
fn test_unparseable_price_is_rejected() {
    let ctx = TestContext::new();
    let mut market = ctx.market();

    let err = market.sell(&draft("Radio", "Electronic", "twelve")).unwrap_err();
    assert!(matches!(
        err,
        MarketError::Validation(ValidationError::InvalidPrice(_))
    ));
}

// =============================================================================
// Wishlist
// =============================================================================

#[test]
fn test_toggle_twice_is_identity() {
    let ctx = TestContext::new();
    let mut market = ctx.market();
    let book = market.sell(&draft("Book", "Books", "3")).unwrap();
    market.toggle_wishlist(book.id).unwrap();
    let before = market.wishlist().clone();

    for id in [book.id, ProductId::new(500)] {
        market.toggle_wishlist(id).unwrap();
        market.toggle_wishlist(id).unwrap();
        assert_eq!(market.wishlist(), &before);
    }
}

#[test]
fn test_wishlist_view_only_shows_listed_products() {
    let ctx = TestContext::new();
    let mut market = ctx.market();
    let book = market.sell(&draft("Book", "Books", "3")).unwrap();
    let kite = market.sell(&draft("Kite", "Toys", "6")).unwrap();

    market.toggle_wishlist(book.id).unwrap();
    market.toggle_wishlist(ProductId::new(404)).unwrap();
    market.toggle_wishlist(kite.id).unwrap();

    let shown = market.wishlisted_products();
    assert_eq!(shown, [&kite, &book]);
    assert!(shown.iter().all(|p| market.catalog().get(p.id).is_some()));
}

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_chair_added_twice() {
    let ctx = TestContext::new();
    let mut market = ctx.market();
    let chair = market.sell(&draft("Chair", "Furniture", "10")).unwrap();

    market.add_to_cart(chair.id).unwrap();
    market.add_to_cart(chair.id).unwrap();

    let cart = market.cart();
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.line(chair.id).unwrap().qty, 2);
    assert_eq!(cart.total_price(), Price::parse("20").unwrap());
}

#[test]
fn test_totals_follow_every_add() {
    let ctx = TestContext::new();
    let mut market = ctx.market();
    let chair = market.sell(&draft("Chair", "Furniture", "10")).unwrap();
    let mug = market.sell(&draft("Mug", "Others", "2.5")).unwrap();
    let shirt = market.sell(&draft("Shirt", "Clothing", "7.25")).unwrap();

    let sequence = [chair.id, mug.id, mug.id, shirt.id, chair.id, mug.id];
    for (n, id) in sequence.into_iter().enumerate() {
        market.add_to_cart(id).unwrap();

        let cart = market.cart();
        let qty_sum: u64 = cart.lines().iter().map(|l| u64::from(l.qty)).sum();
        let price_sum: Price = cart
            .lines()
            .iter()
            .map(|l| l.product.price.times(l.qty))
            .sum();
        assert_eq!(cart.total_quantity(), qty_sum);
        assert_eq!(cart.total_quantity(), n as u64 + 1);
        assert_eq!(cart.total_price(), price_sum);
    }

    assert_eq!(market.cart().lines().len(), 3);
    // 2 * 10 + 3 * 2.5 + 1 * 7.25
    assert_eq!(market.cart().total_price(), Price::parse("34.75").unwrap());
}

#[test]
fn test_checkout_empties_cart() {
    let ctx = TestContext::new();
    let mut market = ctx.market();
    let chair = market.sell(&draft("Chair", "Furniture", "10")).unwrap();
    market.add_to_cart(chair.id).unwrap();
    market.add_to_cart(chair.id).unwrap();

    let receipt = market.checkout().unwrap();
    assert_eq!(receipt.items, 2);
    assert_eq!(receipt.total, Price::parse("20").unwrap());
    assert_eq!(market.cart().total_quantity(), 0);

    // Listings and favourites are untouched.
    assert_eq!(market.catalog().len(), 1);
}

#[test]
fn test_unlisted_product_cannot_be_added() {
    let ctx = TestContext::new();
    let mut market = ctx.market();

    let err = market.add_to_cart(ProductId::new(1)).unwrap_err();
    assert!(matches!(err, MarketError::ProductNotFound(_)));
    assert!(!ctx.path().join("cart.json").exists());
}
