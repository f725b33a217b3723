//! CLI subcommand implementations.

pub mod cart;
pub mod migrate;

use desafio_cart::{CartError, ConfigError, StorageError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Cart could not be hydrated.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// The command needs a different storage backend.
    #[error("'{command}' requires the {required} backend (CART_STORAGE_BACKEND is {configured})")]
    WrongBackend {
        command: &'static str,
        required: &'static str,
        configured: &'static str,
    },
}
