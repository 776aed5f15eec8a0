//! `window.localStorage` as a [`KeyValueStore`].

use shared::storage::{KeyValueStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;
use web_sys::{Storage, window};

/// Browser-tab durable storage.
///
/// Holds `None` when the page has no `localStorage` (SSR, sandboxed iframes,
/// storage disabled by the user); every operation then reports
/// [`StorageError::Unavailable`].
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    inner: Option<Storage>,
}

impl BrowserStorage {
    /// The current window's `localStorage`, if it can be reached.
    pub fn local() -> Self {
        let inner = window().and_then(|window| window.local_storage().ok().flatten());
        Self { inner }
    }

    /// Whether a medium was found.
    pub const fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    fn medium(&self) -> StorageResult<&Storage> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.medium()?
            .get_item(key)
            .map_err(|err| backend_error(key, &err))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.medium()?
            .set_item(key, value)
            .map_err(|err| backend_error(key, &err))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.medium()?
            .remove_item(key)
            .map_err(|err| backend_error(key, &err))
    }
}

fn backend_error(key: &str, err: &JsValue) -> StorageError {
    let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    StorageError::backend(key, message)
}
