//! # Storage
//!
//! Durable key-value persistence shared by the auth and wishlist stores.
//!
//! The medium is text-only: every record is serialized to JSON before it is
//! written and parsed again on read. Reads never fail from the caller's point
//! of view. A missing medium, a missing key, or an unparseable value all come
//! back as `None`; only the last one is worth a warning.

mod error;
mod memory;


use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{trace, warn};

pub use error::{DecodeError, StorageError, StorageResult};
pub use memory::MemoryStorage;

/// Synchronous string key-value medium (browser `localStorage` or a fake).
pub trait KeyValueStore {
    /// Read the raw text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no medium, or a
    /// backend error if the medium refuses the read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no medium, or a
    /// backend error if the medium refuses the write (e.g. quota exceeded).
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete whatever is stored under `key`. Removing an absent key is fine.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no medium, or a
    /// backend error if the medium refuses the removal.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Decode the text stored under `key`.
///
/// Empty text and a JSON `null` both mean "nothing stored".
///
/// # Errors
///
/// Returns [`DecodeError::Parse`] when the text is not a valid `T`.
pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<Option<T>, DecodeError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(raw).map_err(|source| DecodeError::Parse {
        key: key.to_owned(),
        source,
    })
}

/// Read and decode a record, degrading every failure to `None`.
pub(crate) fn load<T, S>(storage: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            report(key, &err);
            return None;
        }
    };

    match decode(key, &raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(key = err.key(), error = %err, "Failed to parse stored value");
            None
        }
    }
}

/// Serialize and write a record, logging and swallowing any failure.
pub(crate) fn persist<T, S>(storage: &S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let text = match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            warn!(key, error = %err, "Failed to serialize value for storage");
            return;
        }
    };
    if let Err(err) = storage.set(key, &text) {
        report(key, &err);
    }
}

/// Remove a record, logging and swallowing any failure.
pub(crate) fn discard<S: KeyValueStore + ?Sized>(storage: &S, key: &str) {
    if let Err(err) = storage.remove(key) {
        report(key, &err);
    }
}

fn report(key: &str, err: &StorageError) {
    if err.is_unavailable() {
        trace!(key, "Storage unavailable, skipping");
    } else {
        warn!(key, error = %err, "Storage operation failed");
    }
}
