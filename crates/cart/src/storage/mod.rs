//! Key-value storage backends for persisted cart documents.
//!
//! The cart only ever needs two things from its storage: read a string by
//! key and overwrite a string by key. [`KeyValueStore`] is that contract.
//!
//! # Backends
//!
//! - [`MemoryStore`] - process-local map, used in tests and for throwaway carts
//! - [`FileStore`] - one file per key inside a directory
//! - [`SqliteStore`] - a `kv_store` table in an `SQLite` database
//!
//! [`Storage`] wraps the three so the backend can be chosen from
//! configuration at runtime.

use std::future::Future;

use thiserror::Error;

use crate::config::StorageBackend;

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database query failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Asynchronous string store addressed by key.
///
/// Implementations must be shareable across tasks: the cart hands its
/// backend to a spawned writer task.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// A backend selected at runtime.
#[derive(Debug, Clone)]
pub enum Storage {
    /// Process-local map; nothing survives a restart.
    Memory(MemoryStore),
    /// One JSON file per key in a directory.
    File(FileStore),
    /// Rows of the `kv_store` table in an `SQLite` database.
    Sqlite(SqliteStore),
}

impl Storage {
    /// Open the backend described by `backend`.
    ///
    /// File storage creates its directory; `SQLite` storage connects and runs
    /// pending migrations.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created or the
    /// database cannot be opened or migrated.
    pub async fn open(backend: &StorageBackend) -> Result<Self, StorageError> {
        let storage = match backend {
            StorageBackend::Memory => Self::Memory(MemoryStore::new()),
            StorageBackend::File { dir } => Self::File(FileStore::open(dir).await?),
            StorageBackend::Sqlite { url } => Self::Sqlite(SqliteStore::connect(url).await?),
        };
        tracing::debug!(backend = storage.kind(), "Storage opened");
        Ok(storage)
    }

    /// Short backend name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::File(_) => "file",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

impl KeyValueStore for Storage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::File(store) => store.get(key).await,
            Self::Sqlite(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            Self::File(store) => store.set(key, value).await,
            Self::Sqlite(store) => store.set(key, value).await,
        }
    }
}
