use shared::{ItemId, UserProfile, WishlistItem};
use yewdux::Store;

use crate::stores::{auth_store, wishlist_store};

/// What the components render from. Storage stays the source of truth; this
/// is a snapshot refreshed after every mutation.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<UserProfile>,
    pub authenticated: bool,
    pub wishlist: Vec<WishlistItem>,
}

impl AppState {
    /// Snapshot the persisted state.
    pub fn load() -> Self {
        let auth = auth_store();
        Self {
            user: auth.get_stored_user(),
            authenticated: auth.is_authenticated(),
            wishlist: wishlist_store().get_wishlist(),
        }
    }

    /// Whether the movie with `id` is liked.
    pub fn is_liked(&self, id: &ItemId) -> bool {
        self.wishlist.iter().any(|item| item.identity() == Some(id))
    }
}
