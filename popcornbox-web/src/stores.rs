//! Store handles over the tab's `localStorage`.
//!
//! Handles are cheap to build and hold no state of their own, so components
//! create one whenever they need it instead of sharing a global.

use shared::{AuthStore, NavigationGuard, WishlistStore};

use crate::config::FrontendConfig;
use crate::storage::BrowserStorage;

/// Auth state for this tab.
pub fn auth_store() -> AuthStore<BrowserStorage> {
    let config = FrontendConfig::shared();
    AuthStore::new(BrowserStorage::local()).with_keys(config.client().storage_keys.clone())
}

/// Wishlist for this tab.
pub fn wishlist_store() -> WishlistStore<BrowserStorage> {
    let config = FrontendConfig::shared();
    WishlistStore::new(BrowserStorage::local()).with_keys(&config.client().storage_keys)
}

/// Guard reading auth state from this tab's storage.
pub fn navigation_guard() -> NavigationGuard<AuthStore<BrowserStorage>> {
    NavigationGuard::new(auth_store())
}

/// Sign back in from remembered credentials, if auto-login is allowed.
///
/// Runs before the first render so the guard already sees the session.
pub fn resume_remembered_session() -> bool {
    let auth = auth_store();
    if auth.is_authenticated() {
        return false;
    }
    let Some(remembered) = auth.auto_login_candidate() else {
        return false;
    };
    auth.save_session(remembered.credentials);
    tracing::info!("Signed in from remembered credentials");
    true
}
