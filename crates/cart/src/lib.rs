//! Desafio Cart - persistent shopping-cart state container.
//!
//! This crate holds the cart lines for one application session, exposes the
//! operations that change them and mirrors every change into on-device
//! key-value storage.
//!
//! # Architecture
//!
//! - [`ops`] - Pure list transformations (add, increment, decrement)
//! - [`store`] - [`CartStore`], which publishes and persists those results
//! - [`storage`] - The [`KeyValueStore`] contract and its backends
//! - [`provider`] - Task-scoped access to a cart
//! - [`config`] - Environment-driven backend selection
//!
//! # Example
//!
//! ```rust,no_run
//! use desafio_cart::{CartStore, DEFAULT_STORAGE_KEY, NewCartItem, storage::MemoryStore};
//!
//! # async fn demo() -> desafio_cart::error::Result<()> {
//! let cart = CartStore::open(MemoryStore::new(), DEFAULT_STORAGE_KEY).await?;
//! cart.add_to_cart(NewCartItem::new("a", "Banana", "https://img/banana.png", 10));
//! assert_eq!(cart.products()[0].quantity, 1);
//! cart.flush().await;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod ops;
pub mod provider;
pub mod storage;
pub mod store;
mod writer;

pub use config::{CartConfig, ConfigError, DEFAULT_STORAGE_KEY, StorageBackend};
pub use desafio_core::{CartItem, CartSummary, NewCartItem, Price, ProductId};
pub use error::CartError;
pub use provider::{CartProvider, use_cart};
pub use storage::{KeyValueStore, Storage, StorageError};
pub use store::CartStore;
