use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

use super::keys::StorageKeys;

/// Override variable for [`ClientConfig::base_path`].
pub const BASE_PATH_VAR: &str = "POPCORNBOX_BASE_PATH";
/// Override variable for [`ClientConfig::log_level`].
pub const LOG_LEVEL_VAR: &str = "POPCORNBOX_LOG_LEVEL";

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The log level is not one of trace/debug/info/warn/error
    #[error("Invalid log level `{0}`: expected trace, debug, info, warn or error")]
    InvalidLogLevel(String),

    /// The router base path does not start with `/`
    #[error("Invalid base path `{0}`: must start with '/'")]
    InvalidBasePath(String),

    /// Two stores were configured to share a storage key
    #[error("Storage keys must be distinct")]
    DuplicateStorageKey,
}

/// The client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Durable keys owned by the auth and wishlist stores
    pub storage_keys: StorageKeys,

    /// Router base path the app is served under
    pub base_path: String,

    /// Logging level
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            storage_keys: StorageKeys::default(),
            base_path: "/".to_string(),
            log_level: "info".to_string(),
        }
    }

    /// Parse a JSON document. Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns an error if the document is not valid JSON or fails validation.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config.normalized())
    }

    /// Apply overrides from an environment-style lookup.
    ///
    /// Only values still at their default are replaced, so an explicit
    /// document value wins over the environment.
    ///
    /// # Errors
    /// Returns an error if an override fails validation.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::with_defaults();

        if self.base_path == defaults.base_path {
            if let Some(base_path) = lookup(BASE_PATH_VAR).filter(|value| !value.is_empty()) {
                self.base_path = base_path;
            }
        }
        if self.log_level == defaults.log_level {
            if let Some(log_level) = lookup(LOG_LEVEL_VAR).filter(|value| !value.is_empty()) {
                self.log_level = log_level;
            }
        }

        self.validate()?;
        Ok(self.normalized())
    }

    /// Check every field.
    ///
    /// # Errors
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.starts_with('/') {
            return Err(ConfigError::InvalidBasePath(self.base_path.clone()));
        }
        self.level()?;
        if !self.storage_keys.are_distinct() {
            return Err(ConfigError::DuplicateStorageKey);
        }
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidLogLevel`] for unknown level names.
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Router basename, or `None` when the app is served from the root.
    #[must_use]
    pub fn router_basename(&self) -> Option<&str> {
        let trimmed = self.base_path.trim_end_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    fn normalized(mut self) -> Self {
        self.log_level = self.log_level.to_ascii_lowercase();
        self
    }
}
