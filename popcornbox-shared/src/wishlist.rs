//! # Wishlist Store
//!
//! The persisted, ordered list of liked movies. Independent of auth state:
//! signing out does not touch it.

use std::collections::HashSet;

use tracing::debug;

use crate::config::StorageKeys;
use crate::models::{ItemId, WishlistItem};
use crate::storage::{self, KeyValueStore};

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

/// Reads and writes the wishlist.
#[derive(Debug, Clone)]
pub struct WishlistStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> WishlistStore<S> {
    /// A store over `storage` under the default key.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: StorageKeys::default().wishlist,
        }
    }

    /// Use the wishlist key from `keys` instead of the default.
    #[must_use]
    pub fn with_keys(mut self, keys: &StorageKeys) -> Self {
        self.key.clone_from(&keys.wishlist);
        self
    }

    /// The underlying medium.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// The stored items in order; empty when nothing valid is stored.
    pub fn get_wishlist(&self) -> Vec<WishlistItem> {
        storage::load(&self.storage, &self.key).unwrap_or_default()
    }

    /// Overwrite the whole list. Later entries repeating an earlier id are
    /// dropped.
    pub fn save_wishlist(&self, items: &[WishlistItem]) {
        storage::persist(&self.storage, &self.key, &unique_by_id(items));
    }

    /// Whether an item with `id` is in the list.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get_wishlist()
            .iter()
            .any(|item| item.identity() == Some(id))
    }

    /// Add `item` if its id is absent, remove the entry with that id
    /// otherwise, and return the resulting list.
    ///
    /// `None` or an item without a usable id leaves storage alone and
    /// returns the current list.
    pub fn toggle_wishlist(&self, item: Option<WishlistItem>) -> Vec<WishlistItem> {
        let current = self.get_wishlist();
        let Some(item) = item else {
            return current;
        };
        let Some(id) = item.identity().cloned() else {
            debug!("Ignoring wishlist toggle for an item without an id");
            return current;
        };

        let mut next: Vec<WishlistItem> = unique_by_id(&current).into_iter().cloned().collect();
        if next.iter().any(|entry| entry.identity() == Some(&id)) {
            next.retain(|entry| entry.identity() != Some(&id));
            debug!(%id, "Removed from wishlist");
        } else {
            next.push(item);
            debug!(%id, "Added to wishlist");
        }

        storage::persist(&self.storage, &self.key, &next);
        next
    }
}

/// First occurrence of every id, in order. Items without an id are kept.
fn unique_by_id(items: &[WishlistItem]) -> Vec<&WishlistItem> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| item.identity().is_none_or(|id| seen.insert(id)))
        .collect()
}
