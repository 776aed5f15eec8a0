//! # Storage Error Types

use thiserror::Error;

/// Result type alias for raw key-value operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failure of the underlying key-value medium
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// There is no storage medium in this execution context
    #[error("Storage medium is unavailable")]
    Unavailable,

    /// The medium rejected the operation (quota exceeded, access denied, ...)
    #[error("Storage operation on `{key}` failed: {message}")]
    Backend {
        /// Key the operation was addressed to
        key: String,
        /// What the medium reported
        message: String,
    },
}

impl StorageError {
    /// Create a new backend error for `key`
    pub fn backend<K: Into<String>, M: Into<String>>(key: K, message: M) -> Self {
        Self::Backend {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Whether this error only signals a missing medium
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// A stored value that is present but cannot be interpreted
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The text under `key` is not valid JSON for the expected record
    #[error("Failed to parse value stored under `{key}`: {source}")]
    Parse {
        /// Key whose value failed to decode
        key: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// The storage key whose value failed to decode
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Parse { key, .. } => key,
        }
    }
}
