//! Integration tests for Desafio Cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p desafio-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Hydration and persistence across restarts, per backend
//! - `cart_scenarios` - End-to-end operation sequences through a real backend
//!
//! The helpers below open carts the same way the CLI does, through
//! [`Storage::open`], so every test exercises the configured code path.

use std::path::Path;

use desafio_cart::{CartStore, DEFAULT_STORAGE_KEY, Storage, StorageBackend};
use desafio_core::NewCartItem;

/// Open a cart stored as files under `dir`.
///
/// # Panics
///
/// Panics if the storage or cart cannot be opened.
pub async fn open_file_cart(dir: &Path) -> CartStore {
    open_cart(&StorageBackend::File {
        dir: dir.to_path_buf(),
    })
    .await
}

/// Open a cart stored in an `SQLite` database file under `dir`.
///
/// # Panics
///
/// Panics if the storage or cart cannot be opened.
pub async fn open_sqlite_cart(dir: &Path) -> CartStore {
    open_cart(&StorageBackend::Sqlite {
        url: sqlite_url(dir),
    })
    .await
}

/// `SQLite` URL for a database file inside `dir`.
#[must_use]
pub fn sqlite_url(dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", dir.join("cart.db").display())
}

/// Open a cart on `backend` under the default key.
///
/// # Panics
///
/// Panics if the storage or cart cannot be opened.
#[allow(clippy::unwrap_used)]
pub async fn open_cart(backend: &StorageBackend) -> CartStore {
    let storage = Storage::open(backend).await.unwrap();
    CartStore::open(storage, DEFAULT_STORAGE_KEY).await.unwrap()
}

/// A catalog product with a deterministic title, image and price.
#[must_use]
pub fn product(id: &str, price_cents: i64) -> NewCartItem {
    NewCartItem::new(
        id,
        format!("Product {id}"),
        format!("https://cdn.example.com/{id}.png"),
        desafio_core::Price::from_cents(price_cents),
    )
}
