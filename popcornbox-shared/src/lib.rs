//! Platform-independent core of the PopcornBox client.
//!
//! Everything in here is synchronous and talks to durable storage through the
//! [`storage::KeyValueStore`] trait, so the same code runs against
//! `window.localStorage` in the browser and against [`storage::MemoryStorage`]
//! in tests.

pub mod auth;
pub mod clock;
pub mod config;
pub mod models;
pub mod navigation;
pub mod storage;
pub mod wishlist;

pub use auth::AuthStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ClientConfig, ConfigError, StorageKeys};
pub use models::{
    ItemId, RecordFields, RememberedUser, Session, UserProfile, WishlistItem,
};
pub use navigation::{AuthProbe, NavigationDecision, NavigationGuard, RouteDescriptor, RouteName};
pub use storage::{DecodeError, KeyValueStore, MemoryStorage, StorageError, StorageResult};
pub use wishlist::WishlistStore;
