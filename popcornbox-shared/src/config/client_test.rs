//! Tests for client configuration loading and overrides.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tracing::Level;

    use crate::config::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_use_fixed_storage_keys() {
        let config = ClientConfig::with_defaults();
        assert_eq!(config.storage_keys.user, "pb-auth-user");
        assert_eq!(config.storage_keys.session, "pb-auth-session");
        assert_eq!(config.storage_keys.remembered_user, "pb-remembered-user");
        assert_eq!(config.storage_keys.wishlist, "pb-wishlist");
        assert_eq!(config.base_path, "/");
        assert_eq!(config.level().unwrap(), Level::INFO);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = ClientConfig::from_json_str(r#"{"base_path": "/movies/", "log_level": "DEBUG"}"#)
            .unwrap();
        assert_eq!(config.base_path, "/movies/");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.storage_keys, StorageKeys::default());
    }

    #[test]
    fn test_from_json_partial_storage_keys() {
        let config =
            ClientConfig::from_json_str(r#"{"storage_keys": {"wishlist": "demo-wishlist"}}"#).unwrap();
        assert_eq!(config.storage_keys.wishlist, "demo-wishlist");
        assert_eq!(config.storage_keys.user, USER_KEY);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ClientConfig::from_json_str("{base_path").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_log_level() {
        let err = ClientConfig::from_json_str(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn test_invalid_base_path() {
        let err = ClientConfig::from_json_str(r#"{"base_path": "movies"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBasePath(_)));
    }

    #[test]
    fn test_duplicate_storage_keys_rejected() {
        let err = ClientConfig::from_json_str(
            r#"{"storage_keys": {"session": "pb-auth-user"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateStorageKey));
    }

    #[test]
    fn test_overrides_apply_to_defaults() {
        let config = ClientConfig::with_defaults()
            .apply_overrides(lookup_from(&[
                (BASE_PATH_VAR, "/app"),
                (LOG_LEVEL_VAR, "warn"),
            ]))
            .unwrap();
        assert_eq!(config.base_path, "/app");
        assert_eq!(config.level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_overrides_do_not_replace_explicit_values() {
        let config = ClientConfig::from_json_str(r#"{"log_level": "error"}"#)
            .unwrap()
            .apply_overrides(lookup_from(&[(LOG_LEVEL_VAR, "trace")]))
            .unwrap();
        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config = ClientConfig::with_defaults()
            .apply_overrides(lookup_from(&[(BASE_PATH_VAR, "")]))
            .unwrap();
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn test_invalid_override_is_reported() {
        let result = ClientConfig::with_defaults()
            .apply_overrides(lookup_from(&[(LOG_LEVEL_VAR, "chatty")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_router_basename() {
        let mut config = ClientConfig::with_defaults();
        assert_eq!(config.router_basename(), None);

        config.base_path = "/movies/".to_string();
        assert_eq!(config.router_basename(), Some("/movies"));
    }
}
