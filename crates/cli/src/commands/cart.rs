//! Cart inspection and editing commands.
//!
//! Every command opens the configured storage, hydrates the cart, applies at
//! most one change and waits for it to be persisted before returning.
//!
//! # Environment Variables
//!
//! - `CART_STORAGE_BACKEND` - `memory`, `file` or `sqlite` (default: file)
//! - `CART_STORAGE_PATH` / `CART_DATABASE_URL` - Backend location
//! - `CART_STORAGE_KEY` - Key the cart document is stored under

use desafio_cart::{CartConfig, CartStore, NewCartItem, ProductId, Storage};
use tracing::{info, warn};

use super::CommandError;

/// Open the cart described by the environment.
async fn open_cart() -> Result<CartStore, CommandError> {
    let config = CartConfig::from_env()?;
    if !config.is_durable() {
        warn!("Memory storage selected; changes will not outlive this command");
    }

    let storage = Storage::open(&config.backend).await?;
    info!(backend = storage.kind(), key = %config.storage_key, "Opening cart");
    Ok(CartStore::open(storage, &config.storage_key).await?)
}

/// Print cart lines and totals.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the cart cannot be loaded.
pub async fn show() -> Result<(), CommandError> {
    let cart = open_cart().await?;
    print_cart(&cart);
    Ok(())
}

/// Add one unit of `item` and print the resulting cart.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the cart cannot be loaded.
pub async fn add(item: NewCartItem) -> Result<(), CommandError> {
    let cart = open_cart().await?;
    cart.add_to_cart(item);
    cart.flush().await;
    print_cart(&cart);
    Ok(())
}

/// Add one unit to the line for `id` and print the resulting cart.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the cart cannot be loaded.
pub async fn increment(id: &ProductId) -> Result<(), CommandError> {
    let cart = open_cart().await?;
    if !cart.increment(id) {
        warn!(id = %id, "No cart line with this id; nothing changed");
    }
    cart.flush().await;
    print_cart(&cart);
    Ok(())
}

/// Remove one unit from the line for `id` and print the resulting cart.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the cart cannot be loaded.
pub async fn decrement(id: &ProductId) -> Result<(), CommandError> {
    let cart = open_cart().await?;
    if !cart.decrement(id) {
        warn!(id = %id, "No cart line with this id, or quantity already zero; nothing changed");
    }
    cart.flush().await;
    print_cart(&cart);
    Ok(())
}

fn print_cart(cart: &CartStore) {
    let products = cart.products();
    let summary = cart.summary();

    #[allow(clippy::print_stdout)]
    {
        if products.is_empty() {
            println!("Cart is empty");
            return;
        }
        for line in &products {
            println!(
                "{:>4} x {:<32} {:>10} {:>10}  [{}]",
                line.quantity,
                line.title,
                line.price.to_string(),
                line.line_total().to_string(),
                line.id
            );
        }
        println!("{} items, subtotal {}", summary.item_count, summary.subtotal);
    }
}
