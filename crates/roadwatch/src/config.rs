//! Application configuration.
//!
//! Every field has a default, so `AppConfig::default()` is a working
//! dashboard. Values can be overridden from a JSON document or from
//! environment variables:
//!
//! | Variable | Field | Accepted values |
//! |----------|-------|-----------------|
//! | `ROADWATCH_DEV_TOOLS` | `dev_tools` | `true` / `1` enable, anything else disables |
//! | `ROADWATCH_NOTIFICATION_COUNT` | `notification_count` | unsigned integer |
//! | `ROADWATCH_STORAGE_KEY` | `session.storage_key` | non-empty string |

use roadwatch_model::{Codec, JsonCodec};
use roadwatch_router::routes;
use roadwatch_session::SessionConfig;
use serde::{Deserialize, Serialize};

use crate::RoadwatchError;

pub const ENV_DEV_TOOLS: &str = "ROADWATCH_DEV_TOOLS";
pub const ENV_NOTIFICATION_COUNT: &str = "ROADWATCH_NOTIFICATION_COUNT";
pub const ENV_STORAGE_KEY: &str = "ROADWATCH_STORAGE_KEY";

/// Configuration for the application shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Mount the dev-tools overlay routes.
    ///
    /// Default: `false`.
    pub dev_tools: bool,

    /// Path prefix the overlay lives under.
    ///
    /// Default: `"/__devtools"`.
    pub dev_tools_prefix: String,

    /// Where the route guard sends anonymous visitors.
    ///
    /// Default: `"/login"`.
    pub login_path: String,

    /// Unread count shown on the header bell.
    ///
    /// Default: 3.
    pub notification_count: u32,

    /// Session store settings.
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dev_tools: false,
            dev_tools_prefix: "/__devtools".to_string(),
            login_path: routes::LOGIN.to_string(),
            notification_count: 3,
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, RoadwatchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each
    /// variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RoadwatchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEV_TOOLS) {
            config.dev_tools = parse_flag(&raw);
        }
        if let Some(raw) = lookup(ENV_NOTIFICATION_COUNT) {
            config.notification_count = raw.trim().parse().map_err(|_| {
                RoadwatchError::Config(format!(
                    "{ENV_NOTIFICATION_COUNT} is not a count: {raw:?}"
                ))
            })?;
        }
        if let Some(raw) = lookup(ENV_STORAGE_KEY) {
            config.session.storage_key = raw;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON document; absent fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, RoadwatchError> {
        let config: Self = JsonCodec.decode(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values that the rest of the shell relies on.
    pub fn validate(&self) -> Result<(), RoadwatchError> {
        if !self.login_path.starts_with('/') {
            return Err(RoadwatchError::Config(format!(
                "login_path must start with '/': {:?}",
                self.login_path
            )));
        }
        if !self.dev_tools_prefix.starts_with('/') || self.dev_tools_prefix == "/" {
            return Err(RoadwatchError::Config(format!(
                "dev_tools_prefix must be a path below '/': {:?}",
                self.dev_tools_prefix
            )));
        }
        if self.session.storage_key.is_empty() {
            return Err(RoadwatchError::Config(
                "session.storage_key must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();

        assert!(!config.dev_tools);
        assert_eq!(config.dev_tools_prefix, "/__devtools");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.notification_count, 3);
        assert_eq!(config.session.storage_key, "user");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_empty_environment_is_default() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_lookup_dev_tools_flag_values() {
        for (raw, expected) in [
            ("true", true),
            ("1", true),
            (" true ", true),
            ("TRUE", false),
            ("yes", false),
            ("0", false),
            ("", false),
        ] {
            let config =
                AppConfig::from_lookup(lookup_from(&[(ENV_DEV_TOOLS, raw)]))
                    .unwrap();
            assert_eq!(config.dev_tools, expected, "{raw:?}");
        }
    }

    #[test]
    fn test_from_lookup_overrides_count_and_key() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_NOTIFICATION_COUNT, "12"),
            (ENV_STORAGE_KEY, "roadwatch.user"),
        ]))
        .unwrap();

        assert_eq!(config.notification_count, 12);
        assert_eq!(config.session.storage_key, "roadwatch.user");
    }

    #[test]
    fn test_from_lookup_bad_count_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[(
            ENV_NOTIFICATION_COUNT,
            "many",
        )]))
        .unwrap_err();

        assert!(matches!(err, RoadwatchError::Config(_)));
        assert!(err.to_string().contains("many"));
    }

    #[test]
    fn test_from_lookup_empty_storage_key_rejected() {
        let err =
            AppConfig::from_lookup(lookup_from(&[(ENV_STORAGE_KEY, "")]))
                .unwrap_err();

        assert!(matches!(err, RoadwatchError::Config(_)));
    }

    #[test]
    fn test_from_json_partial_document_keeps_defaults() {
        let config = AppConfig::from_json(
            r#"{"dev_tools": true, "session": {"storage_key": "u"}}"#,
        )
        .unwrap();

        assert!(config.dev_tools);
        assert_eq!(config.session.storage_key, "u");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.notification_count, 3);
    }

    #[test]
    fn test_from_json_malformed_is_model_error() {
        let err = AppConfig::from_json("{dev_tools").unwrap_err();

        assert!(matches!(err, RoadwatchError::Model(_)));
    }

    #[test]
    fn test_validate_rejects_relative_login_path() {
        let config = AppConfig {
            login_path: "login".into(),
            ..AppConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_root_dev_tools_prefix() {
        let config = AppConfig {
            dev_tools_prefix: "/".into(),
            ..AppConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
