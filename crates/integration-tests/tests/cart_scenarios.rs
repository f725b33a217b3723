//! End-to-end cart scenarios through the file backend.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use desafio_cart::{CartProvider, ProductId, use_cart};
use desafio_core::{CartItem, NewCartItem, Price};
use desafio_integration_tests::{open_file_cart, product};

#[tokio::test]
async fn test_add_from_empty_cart() {
    let tmp = tempfile::tempdir().unwrap();
    let cart = open_file_cart(tmp.path()).await;

    cart.add_to_cart(NewCartItem::new("a", "T", "u", 10));

    assert_eq!(
        cart.products(),
        vec![CartItem {
            id: ProductId::new("a"),
            title: "T".to_string(),
            image_url: "u".to_string(),
            price: Price::from(10),
            quantity: 1,
        }]
    );
}

#[tokio::test]
async fn test_increment_then_decrement_to_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let cart = open_file_cart(tmp.path()).await;
    let id = ProductId::new("a");

    cart.add_to_cart(product("a", 100));
    assert!(cart.increment(&id));
    assert_eq!(cart.products()[0].quantity, 2);

    assert!(cart.decrement(&id));
    assert!(cart.decrement(&id));
    assert!(!cart.decrement(&id));
    assert_eq!(cart.products()[0].quantity, 0);
    assert_eq!(cart.products().len(), 1);

    cart.flush().await;
    drop(cart);
    let reopened = open_file_cart(tmp.path()).await;
    assert_eq!(reopened.products()[0].quantity, 0);
}

#[tokio::test]
async fn test_unknown_ids_leave_cart_unchanged() {
    let tmp = tempfile::tempdir().unwrap();
    let cart = open_file_cart(tmp.path()).await;
    cart.add_to_cart(product("a", 100));
    let before = cart.products();

    assert!(!cart.increment(&ProductId::new("zzz")));
    assert!(!cart.decrement(&ProductId::new("zzz")));

    assert_eq!(cart.products(), before);
}

#[tokio::test]
async fn test_checkout_summary() {
    let tmp = tempfile::tempdir().unwrap();
    let cart = open_file_cart(tmp.path()).await;

    cart.add_to_cart(product("shirt", 2500));
    cart.add_to_cart(product("shirt", 2500));
    cart.add_to_cart(product("socks", 599));

    let summary = cart.summary();
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.subtotal, Price::from_cents(5599));
}

#[tokio::test]
async fn test_provider_scope_shares_one_cart() {
    let tmp = tempfile::tempdir().unwrap();
    let cart = open_file_cart(tmp.path()).await;

    CartProvider::scope(cart.clone(), async {
        let scoped = use_cart().unwrap();
        scoped.add_to_cart(product("a", 100));
        scoped.flush().await;
    })
    .await;

    assert_eq!(cart.products().len(), 1);
    assert!(use_cart().is_err());
}
