//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_BACKEND` - `memory`, `file` or `sqlite` (default: file)
//! - `CART_STORAGE_PATH` - Directory for the file backend (default: .cart)
//! - `CART_DATABASE_URL` - `SQLite` URL for the sqlite backend
//!   (default: `sqlite://cart.db?mode=rwc`)
//! - `CART_STORAGE_KEY` - Key the cart document is stored under
//!   (default: `@Desafio8:Products`)

use std::path::PathBuf;

use thiserror::Error;

/// Key the cart document is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "@Desafio8:Products";

const DEFAULT_STORAGE_PATH: &str = ".cart";
const DEFAULT_DATABASE_URL: &str = "sqlite://cart.db?mode=rwc";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set to a value outside its accepted set.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the cart document is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local; nothing survives a restart.
    Memory,
    /// One file per key under `dir`.
    File { dir: PathBuf },
    /// A `kv_store` table in the database at `url`.
    Sqlite { url: String },
}

impl StorageBackend {
    /// The name used for this backend in `CART_STORAGE_BACKEND`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File { .. } => "file",
            Self::Sqlite { .. } => "sqlite",
        }
    }
}

/// Cart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Storage backend for the persisted cart
    pub backend: StorageBackend,
    /// Key the cart document is stored under
    pub storage_key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File {
                dir: PathBuf::from(DEFAULT_STORAGE_PATH),
            },
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an unsupported value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let backend_name = get_or_default("CART_STORAGE_BACKEND", "file");
        let backend = match backend_name.trim().to_ascii_lowercase().as_str() {
            "memory" => StorageBackend::Memory,
            "file" => StorageBackend::File {
                dir: PathBuf::from(get_or_default("CART_STORAGE_PATH", DEFAULT_STORAGE_PATH)),
            },
            "sqlite" => StorageBackend::Sqlite {
                url: get_or_default("CART_DATABASE_URL", DEFAULT_DATABASE_URL),
            },
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "CART_STORAGE_BACKEND".to_string(),
                    format!("expected memory, file or sqlite (got '{other}')"),
                ));
            }
        };

        let storage_key = get_or_default("CART_STORAGE_KEY", DEFAULT_STORAGE_KEY);

        Ok(Self {
            backend,
            storage_key,
        })
    }

    /// Whether the configured backend outlives the process.
    #[must_use]
    pub fn is_durable(&self) -> bool {
        self.backend != StorageBackend::Memory
    }
}
