//! Cart error type.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by the cart.
///
/// Write failures are not in here: persistence runs in the background and a
/// failed write is logged, never returned.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend failed while hydrating.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted cart document could not be parsed.
    #[error("Stored cart under '{key}' is malformed: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A cart was requested outside of any provider scope.
    #[error("use_cart must be used within a CartProvider")]
    NoProvider,
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        assert_eq!(
            CartError::NoProvider.to_string(),
            "use_cart must be used within a CartProvider"
        );

        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = CartError::Corrupt {
            key: "@Desafio8:Products".to_string(),
            source,
        };
        assert!(
            err.to_string()
                .starts_with("Stored cart under '@Desafio8:Products' is malformed:")
        );
    }

    #[test]
    fn test_storage_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CartError = StorageError::from(io).into();
        assert!(matches!(err, CartError::Storage(StorageError::Io(_))));
    }
}
