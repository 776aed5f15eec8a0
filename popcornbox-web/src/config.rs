//! Frontend configuration module
//!
//! Resolves the shared [`ClientConfig`] from values baked in at build time.

use std::cell::OnceCell;

use shared::config::{BASE_PATH_VAR, ClientConfig, LOG_LEVEL_VAR};

thread_local! {
    static SHARED_CONFIG: OnceCell<FrontendConfig> = const { OnceCell::new() };
}

/// Frontend configuration for routing, storage and logging
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    client: ClientConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_build_env(|name| match name {
            BASE_PATH_VAR => option_env!("POPCORNBOX_BASE_PATH").map(str::to_string),
            LOG_LEVEL_VAR => option_env!("POPCORNBOX_LOG_LEVEL").map(str::to_string),
            _ => None,
        })
    }
}

impl FrontendConfig {
    /// Build from an environment-style lookup, falling back to defaults when
    /// an override is invalid.
    pub fn from_build_env<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let client = ClientConfig::with_defaults()
            .apply_overrides(lookup)
            .unwrap_or_else(|err| {
                web_sys::console::warn_1(
                    &format!("Ignoring invalid build configuration: {err}").into(),
                );
                ClientConfig::with_defaults()
            });
        Self { client }
    }

    /// The configuration resolved once for this tab.
    pub fn shared() -> Self {
        SHARED_CONFIG.with(|cell| cell.get_or_init(Self::default).clone())
    }

    /// The underlying client configuration
    pub const fn client(&self) -> &ClientConfig {
        &self.client
    }

    /// Router basename, `None` when served from `/`
    pub fn router_basename(&self) -> Option<String> {
        self.client.router_basename().map(str::to_string)
    }
}
