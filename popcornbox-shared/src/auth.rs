//! # Auth State Store
//!
//! Persisted sign-in state: the user profile, the session marker, and the
//! credentials remembered for auto-login. There is no backend; being signed
//! in means a parseable session record exists in storage.

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::StorageKeys;
use crate::models::{RecordFields, RememberedUser, Session, UserProfile};
use crate::navigation::AuthProbe;
use crate::storage::{self, KeyValueStore};

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Reads and writes the auth records.
///
/// Every call goes straight to storage; nothing is cached, so two stores over
/// the same medium always agree.
#[derive(Debug, Clone)]
pub struct AuthStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    keys: StorageKeys,
}

impl<S: KeyValueStore> AuthStore<S> {
    /// A store over `storage` using wall-clock time and the default keys.
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> AuthStore<S, C> {
    /// A store with an explicit time source.
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            keys: StorageKeys::default(),
        }
    }

    /// Use `keys` instead of the defaults.
    #[must_use]
    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    /// The underlying medium.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// The stored user profile, if any.
    pub fn get_stored_user(&self) -> Option<UserProfile> {
        storage::load(&self.storage, &self.keys.user)
    }

    /// Replace the stored user profile.
    pub fn save_user(&self, user: &UserProfile) {
        storage::persist(&self.storage, &self.keys.user, user);
    }

    /// Remove the stored user profile.
    pub fn clear_user(&self) {
        storage::discard(&self.storage, &self.keys.user);
    }

    /// Start a session. `signedAt` is always set to now.
    pub fn save_session(&self, fields: RecordFields) {
        let session = Session::new(fields, self.clock.now());
        storage::persist(&self.storage, &self.keys.session, &session);
    }

    /// The current session, if any.
    pub fn get_session(&self) -> Option<Session> {
        storage::load(&self.storage, &self.keys.session)
    }

    /// End the session.
    pub fn clear_session(&self) {
        storage::discard(&self.storage, &self.keys.session);
    }

    /// Whether a session exists right now.
    pub fn is_authenticated(&self) -> bool {
        self.get_session().is_some()
    }

    /// Remember credentials for auto-login. `rememberAt` is always set to now.
    pub fn remember_user(&self, credentials: RecordFields) {
        let remembered = RememberedUser::new(credentials, self.clock.now());
        self.write_remembered(&remembered);
    }

    /// The remembered credentials, if any.
    pub fn get_remembered_user(&self) -> Option<RememberedUser> {
        storage::load(&self.storage, &self.keys.remembered_user)
    }

    /// Forget the remembered credentials entirely.
    pub fn clear_remembered_user(&self) {
        storage::discard(&self.storage, &self.keys.remembered_user);
    }

    /// Keep the remembered credentials but turn auto-login off.
    ///
    /// `rememberAt` keeps its original value. Does nothing when no
    /// credentials are remembered.
    pub fn disable_auto_login(&self) {
        let Some(mut remembered) = self.get_remembered_user() else {
            return;
        };
        remembered.set_auto_login(false);
        self.write_remembered(&remembered);
    }

    /// Sign out: end the session and turn auto-login off.
    ///
    /// The user profile and the remembered credentials stay, so the sign-in
    /// form can be prefilled on the next visit.
    pub fn clear_auth_state(&self) {
        self.clear_session();
        self.disable_auto_login();
        debug!("Auth state cleared");
    }

    /// Remembered credentials that auto-login may use: present and not
    /// explicitly opted out.
    pub fn auto_login_candidate(&self) -> Option<RememberedUser> {
        self.get_remembered_user()
            .filter(RememberedUser::auto_login_enabled)
    }

    fn write_remembered(&self, remembered: &RememberedUser) {
        storage::persist(&self.storage, &self.keys.remembered_user, remembered);
    }
}

impl<S: KeyValueStore, C: Clock> AuthProbe for AuthStore<S, C> {
    fn is_authenticated(&self) -> bool {
        self.get_session().is_some()
    }
}
