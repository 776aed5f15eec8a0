//! Records persisted by the client.
//!
//! All of them are open-ended JSON objects: the app reads a couple of known
//! fields and keeps everything else in a flattened [`RecordFields`] map so a
//! read-modify-write never loses data written by someone else.

pub mod session;
pub mod timestamp;
pub mod user;
pub mod wishlist;

#[cfg(test)]
mod models_test;

/// Free-form JSON fields of a record.
pub type RecordFields = serde_json::Map<String, serde_json::Value>;

pub use session::{AUTO_LOGIN_FIELD, REMEMBER_AT_FIELD, RememberedUser, SIGNED_AT_FIELD, Session};
pub use user::UserProfile;
pub use wishlist::{ItemId, WishlistItem};
