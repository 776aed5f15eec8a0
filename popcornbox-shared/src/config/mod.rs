//! # Configuration
//!
//! Client configuration: the storage keys each store owns, the router base
//! path, and the log level. Values come from defaults, an optional JSON
//! document, and finally environment-style overrides.

mod client;
mod keys;

#[cfg(test)]
mod client_test;

pub use client::{BASE_PATH_VAR, ClientConfig, ConfigError, LOG_LEVEL_VAR};
pub use keys::{REMEMBER_KEY, SESSION_KEY, StorageKeys, USER_KEY, WISHLIST_KEY};
