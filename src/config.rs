//! Client Configuration
//!
//! Loaded from JSON or from environment variables, falling back to defaults
//! field by field.

use serde::Deserialize;
use thiserror::Error;

pub const ENV_API_URL: &str = "MED_SUPPLY_API_URL";
pub const ENV_ROLLBACK_PATCH: &str = "MED_SUPPLY_ROLLBACK_PATCH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{key} must be a boolean, got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the article service, without trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Revert the optimistic value when a patch request fails
    #[serde(default = "default_true")]
    pub rollback_failed_patch: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            rollback_failed_patch: default_true(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults overridden by `MED_SUPPLY_API_URL` and `MED_SUPPLY_ROLLBACK_PATCH`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }

        if let Some(value) = lookup(ENV_ROLLBACK_PATCH) {
            config.rollback_failed_patch = match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidBool {
                        key: ENV_ROLLBACK_PATCH,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_json_fills_missing_fields_with_defaults() {
        let config = ClientConfig::from_json(r#"{"api_base_url":"https://stock.example/api/v1"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://stock.example/api/v1");
        assert!(config.rollback_failed_patch);

        let empty = ClientConfig::from_json("{}").unwrap();
        assert_eq!(empty, ClientConfig::default());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, " http://10.0.0.2:9000/api/v1 "),
            (ENV_ROLLBACK_PATCH, "0"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://10.0.0.2:9000/api/v1");
        assert!(!config.rollback_failed_patch);
    }

    #[test]
    fn test_env_rejects_bad_bool() {
        let err = ClientConfig::from_lookup(lookup_from(&[(ENV_ROLLBACK_PATCH, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { value, .. } if value == "maybe"));
    }

    #[test]
    fn test_env_without_vars_is_default() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
