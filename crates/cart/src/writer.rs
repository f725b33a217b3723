//! Background persistence task.
//!
//! Every cart mutation enqueues a full snapshot here. A single task drains the
//! queue, so snapshots are written, and finish writing, in the order the
//! mutations happened. Failed writes are logged and dropped; the in-memory
//! cart is never rolled back.

use desafio_core::CartItem;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::storage::KeyValueStore;

/// Work item for the writer task.
#[derive(Debug)]
pub enum WriteCommand {
    /// Persist this snapshot under the cart key.
    Persist(Vec<CartItem>),
    /// Signal once every earlier command has been handled.
    Flush(oneshot::Sender<()>),
}

/// Spawn the writer task and return its queue.
///
/// The task exits once every sender has been dropped.
pub fn spawn<S: KeyValueStore>(
    storage: S,
    key: String,
) -> mpsc::UnboundedSender<WriteCommand> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(run(storage, key, rx));
    tx
}

async fn run<S: KeyValueStore>(
    storage: S,
    key: String,
    mut rx: mpsc::UnboundedReceiver<WriteCommand>,
) {
    while let Some(command) = rx.recv().await {
        match command {
            WriteCommand::Persist(items) => persist(&storage, &key, &items).await,
            WriteCommand::Flush(done) => {
                // The flusher may have given up waiting.
                let _ = done.send(());
            }
        }
    }
    debug!(key = %key, "Cart writer stopped");
}

async fn persist<S: KeyValueStore>(storage: &S, key: &str, items: &[CartItem]) {
    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to serialize cart");
            return;
        }
    };

    match storage.set(key, &json).await {
        Ok(()) => debug!(key = %key, lines = items.len(), "Cart persisted"),
        Err(e) => warn!(key = %key, error = %e, "Failed to persist cart"),
    }
}
