use serde::{Deserialize, Serialize};

/// Storage key for the signed-in user's profile.
pub const USER_KEY: &str = "pb-auth-user";
/// Storage key for the session marker.
pub const SESSION_KEY: &str = "pb-auth-session";
/// Storage key for the remembered credentials used by auto-login.
pub const REMEMBER_KEY: &str = "pb-remembered-user";
/// Storage key for the wishlist.
pub const WISHLIST_KEY: &str = "pb-wishlist";

/// The durable keys each store owns.
///
/// The defaults must match data persisted by earlier builds of the app, so
/// overriding them is only useful for isolating tests or demos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    /// Key of the [`UserProfile`](crate::models::UserProfile) record
    pub user: String,
    /// Key of the [`Session`](crate::models::Session) record
    pub session: String,
    /// Key of the [`RememberedUser`](crate::models::RememberedUser) record
    pub remembered_user: String,
    /// Key of the wishlist sequence
    pub wishlist: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            user: USER_KEY.to_string(),
            session: SESSION_KEY.to_string(),
            remembered_user: REMEMBER_KEY.to_string(),
            wishlist: WISHLIST_KEY.to_string(),
        }
    }
}

impl StorageKeys {
    /// Every key, in a fixed order.
    #[must_use]
    pub fn all(&self) -> [&str; 4] {
        [
            &self.user,
            &self.session,
            &self.remembered_user,
            &self.wishlist,
        ]
    }

    /// Whether the four keys are pairwise distinct.
    #[must_use]
    pub fn are_distinct(&self) -> bool {
        let keys = self.all();
        keys.iter()
            .enumerate()
            .all(|(index, key)| !keys.iter().skip(index + 1).any(|other| other == key))
    }
}
