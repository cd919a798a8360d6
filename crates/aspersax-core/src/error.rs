//! Error types for the Aspersax console core.

use thiserror::Error;

/// Failures raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backend.
///
/// Every persistence access returns one of these instead of panicking, so the
/// entity store can decide per collection whether to fall back or degrade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// File system or medium error.
    #[error("Storage I/O error: {0}")]
    Io(String),

    /// The stored value for a key could not be encoded or decoded.
    #[error("Serialization error for '{key}': {message}")]
    Serialization { key: String, message: String },

    /// Exclusive access to the medium could not be acquired.
    #[error("Storage lock error: {0}")]
    Lock(String),

    /// The medium is not reachable at all (read-only, quota exceeded, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn serialization(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(format!("{} (kind: {:?})", err, err.kind()))
    }
}

/// Shared error type for the console core.
///
/// Expected conditions such as a missing id are NOT reported through this
/// type; the store answers those with `None`/`false`.
#[derive(Error, Debug, Clone)]
pub enum AspersaxError {
    /// Persistence backend error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The acting user's profile could not be fetched
    #[error("Profile error: {0}")]
    Profile(String),
}

impl AspersaxError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn profile(message: impl Into<String>) -> Self {
        Self::Profile(message.into())
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for AspersaxError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.into())
    }
}

impl From<serde_json::Error> for AspersaxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AspersaxError>`.
pub type Result<T> = std::result::Result<T, AspersaxError>;
