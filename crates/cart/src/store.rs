//! The cart state container.
//!
//! [`CartStore`] holds the current cart lines, publishes every replacement to
//! subscribers and mirrors each new list into a [`KeyValueStore`] through the
//! background writer.
//!
//! # Flow
//!
//! 1. An operation computes the next list with a pure function from [`crate::ops`]
//! 2. The list is published; it is visible to callers as soon as the call returns
//! 3. A snapshot is queued for the writer, which persists it asynchronously
//!
//! No-op operations (unknown id, decrement at zero) skip steps 2 and 3.

use std::sync::Arc;

use desafio_core::{CartItem, CartSummary, NewCartItem, ProductId};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, instrument, warn};

use crate::error::{CartError, Result};
use crate::ops;
use crate::storage::KeyValueStore;
use crate::writer::{self, WriteCommand};

/// Handle to a cart.
///
/// This struct is cheaply cloneable via `Arc`; construct one per session and
/// pass clones to whatever needs the cart.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    key: String,
    state: watch::Sender<Vec<CartItem>>,
    writes: mpsc::UnboundedSender<WriteCommand>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.inner.key)
            .field("lines", &self.inner.state.borrow().len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Open a cart over `storage`, hydrating it from the document under `key`.
    ///
    /// Must be called from within a Tokio runtime; the background writer is
    /// spawned onto it.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the stored document cannot be read and
    /// `CartError::Corrupt` if it is not a valid cart. There is no fallback to
    /// an empty cart.
    #[instrument(skip(storage))]
    pub async fn open<S: KeyValueStore>(storage: S, key: &str) -> Result<Self> {
        let items = load(&storage, key).await?;
        info!(lines = items.len(), "Cart hydrated");

        let (state, _) = watch::channel(items);
        let writes = writer::spawn(storage, key.to_string());

        Ok(Self {
            inner: Arc::new(CartStoreInner {
                key: key.to_string(),
                state,
                writes,
            }),
        })
    }

    /// The storage key this cart persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    /// Snapshot of the current cart lines.
    #[must_use]
    pub fn products(&self) -> Vec<CartItem> {
        self.inner.state.borrow().clone()
    }

    /// Item count and subtotal of the current cart.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_items(&self.inner.state.borrow())
    }

    /// Receive every replacement of the cart lines.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.inner.state.subscribe()
    }

    /// Add one unit of `item` to the cart.
    ///
    /// An existing line for the same id is bumped and takes the incoming
    /// title, image and price; otherwise a new line with quantity 1 is
    /// appended. Always persists.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub fn add_to_cart(&self, item: NewCartItem) {
        self.apply(|items| Some(ops::add_to_cart(items, item)));
    }

    /// Add one unit to the line for `id`.
    ///
    /// Returns `false`, and writes nothing, if no line has that id.
    #[instrument(skip(self), fields(id = %id))]
    pub fn increment(&self, id: &ProductId) -> bool {
        self.apply(|items| ops::increment(items, id))
    }

    /// Remove one unit from the line for `id`.
    ///
    /// Returns `false`, and writes nothing, if no line has that id or its
    /// quantity is already zero. The persisted document is the decremented
    /// list, matching what callers see in memory.
    #[instrument(skip(self), fields(id = %id))]
    pub fn decrement(&self, id: &ProductId) -> bool {
        self.apply(|items| ops::decrement(items, id))
    }

    /// Wait until every write queued before this call has been attempted.
    ///
    /// Returns immediately if the writer has already stopped.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.inner.writes.send(WriteCommand::Flush(done)).is_err() {
            return;
        }
        let _ = wait.await;
    }

    /// Replace the lines with `next(current)` and queue the new list for
    /// persistence. The queue send happens under the state lock so writes
    /// are enqueued in mutation order.
    fn apply<F>(&self, next: F) -> bool
    where
        F: FnOnce(&[CartItem]) -> Option<Vec<CartItem>>,
    {
        self.inner.state.send_if_modified(|items| {
            let Some(updated) = next(items) else {
                debug!("No matching cart line, nothing to do");
                return false;
            };
            *items = updated;
            if self
                .inner
                .writes
                .send(WriteCommand::Persist(items.clone()))
                .is_err()
            {
                warn!(key = %self.inner.key, "Cart writer stopped, change not persisted");
            }
            true
        })
    }
}

/// Read and parse the stored cart. A missing entry is an empty cart.
async fn load<S: KeyValueStore>(storage: &S, key: &str) -> Result<Vec<CartItem>> {
    let Some(raw) = storage.get(key).await? else {
        debug!("No stored cart");
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|source| CartError::Corrupt {
        key: key.to_string(),
        source,
    })
}
