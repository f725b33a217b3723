//! Storage migration command.
//!
//! # Usage
//!
//! ```bash
//! CART_STORAGE_BACKEND=sqlite CART_DATABASE_URL=sqlite://cart.db?mode=rwc cart-cli migrate
//! ```
//!
//! # Migration Files
//!
//! `crates/cart/migrations/`, embedded into the binary at compile time.

use desafio_cart::storage::SqliteStore;
use desafio_cart::{CartConfig, StorageBackend};
use tracing::info;

use super::CommandError;

/// Run `SQLite` storage migrations.
///
/// # Errors
///
/// Returns an error if the configured backend is not `SQLite` or the
/// database cannot be opened or migrated.
pub async fn run() -> Result<(), CommandError> {
    let config = CartConfig::from_env()?;

    let url = match &config.backend {
        StorageBackend::Sqlite { url } => url,
        StorageBackend::Memory | StorageBackend::File { .. } => {
            return Err(CommandError::WrongBackend {
                command: "migrate",
                required: "sqlite",
                configured: config.backend.name(),
            });
        }
    };

    info!("Connecting to cart database...");
    // Connecting applies pending migrations.
    let store = SqliteStore::connect(url).await?;
    store.pool().close().await;

    info!("Cart migrations complete!");
    Ok(())
}
