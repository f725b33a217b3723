//! Scoped access to a cart.
//!
//! Explicitly passing a [`CartStore`] clone is the primary way to share a
//! cart. For deeply nested code that cannot take it as an argument,
//! [`CartProvider::scope`] puts a cart in scope for a future and [`use_cart`]
//! retrieves it, failing fast when called outside any provider.
//!
//! The scope is task-local: tasks spawned from inside it do not inherit the
//! cart and must be given a clone.

use std::future::Future;

use crate::error::{CartError, Result};
use crate::store::CartStore;

tokio::task_local! {
    static CURRENT_CART: CartStore;
}

/// Installs a cart for the duration of a future or closure.
#[derive(Debug, Clone, Copy)]
pub struct CartProvider;

impl CartProvider {
    /// Run `f` with `cart` available through [`use_cart`].
    pub async fn scope<F>(cart: CartStore, f: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_CART.scope(cart, f).await
    }

    /// Run the synchronous closure `f` with `cart` available through
    /// [`use_cart`].
    pub fn sync_scope<R>(cart: CartStore, f: impl FnOnce() -> R) -> R {
        CURRENT_CART.sync_scope(cart, f)
    }
}

/// The cart installed by the innermost enclosing [`CartProvider`].
///
/// # Errors
///
/// Returns `CartError::NoProvider` when called outside a provider scope.
pub fn use_cart() -> Result<CartStore> {
    CURRENT_CART
        .try_with(CartStore::clone)
        .map_err(|_| CartError::NoProvider)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use desafio_core::NewCartItem;

    use super::*;
    use crate::storage::MemoryStore;

    async fn cart() -> CartStore {
        CartStore::open(MemoryStore::new(), "k").await.unwrap()
    }

    #[tokio::test]
    async fn test_use_cart_outside_provider_fails() {
        let err = use_cart().unwrap_err();
        assert!(matches!(err, CartError::NoProvider));
        assert_eq!(err.to_string(), "use_cart must be used within a CartProvider");
    }

    #[tokio::test]
    async fn test_use_cart_inside_provider() {
        let cart = cart().await;

        CartProvider::scope(cart.clone(), async {
            let scoped = use_cart().unwrap();
            scoped.add_to_cart(NewCartItem::new("a", "T", "u", 1));
        })
        .await;

        assert_eq!(cart.products().len(), 1);
        assert!(use_cart().is_err());
    }

    #[tokio::test]
    async fn test_sync_scope() {
        let cart = cart().await;
        let key = CartProvider::sync_scope(cart, || use_cart().unwrap().key().to_string());
        assert_eq!(key, "k");
    }

    #[tokio::test]
    async fn test_spawned_tasks_do_not_inherit_scope() {
        let cart = cart().await;
        let inherited = CartProvider::scope(cart, async {
            tokio::spawn(async { use_cart().is_ok() }).await.unwrap()
        })
        .await;
        assert!(!inherited);
    }
}
