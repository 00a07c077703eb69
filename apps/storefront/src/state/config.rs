//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::env;

pub const ENV_STORE_NAME: &str = "STOREFRONT_STORE_NAME";
pub const ENV_CURRENCY_CODE: &str = "STOREFRONT_CURRENCY_CODE";
pub const ENV_CURRENCY_SYMBOL: &str = "STOREFRONT_CURRENCY_SYMBOL";
pub const ENV_LOG: &str = "STOREFRONT_LOG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (display only)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol used when formatting totals
    pub currency_symbol: String,

    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Storefront Demo"
    /// - Currency: USD ($)
    /// - Logging: info, debug for storefront crates
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront Demo".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            log_filter: "info,storefront=debug,storefront_lib=debug".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        ConfigState::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from any key lookup, falling back to defaults
    /// for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ConfigState::default();

        let config = ConfigState {
            store_name: lookup(ENV_STORE_NAME).unwrap_or(defaults.store_name),
            currency_code: lookup(ENV_CURRENCY_CODE)
                .map(|code| code.trim().to_ascii_uppercase())
                .unwrap_or(defaults.currency_code),
            currency_symbol: lookup(ENV_CURRENCY_SYMBOL).unwrap_or(defaults.currency_symbol),
            log_filter: lookup(ENV_LOG).unwrap_or(defaults.log_filter),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue(ENV_CURRENCY_SYMBOL.to_string()));
        }

        if self.currency_code.len() != 3 || !self.currency_code.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(ConfigError::InvalidValue(ENV_CURRENCY_CODE.to_string()));
        }

        if self.store_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue(ENV_STORE_NAME.to_string()));
        }

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ConfigState::from_lookup(|_| None).unwrap();
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_STORE_NAME, "Widget World"),
            (ENV_CURRENCY_CODE, "eur"),
            (ENV_CURRENCY_SYMBOL, "€"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Widget World");
        assert_eq!(config.currency_code, "EUR");
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_rejects_empty_symbol() {
        let err = ConfigState::from_lookup(lookup_from(&[(ENV_CURRENCY_SYMBOL, " ")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOREFRONT_CURRENCY_SYMBOL");
    }

    #[test]
    fn test_rejects_bad_currency_code() {
        assert!(ConfigState::from_lookup(lookup_from(&[(ENV_CURRENCY_CODE, "DOLLARS")])).is_err());
        assert!(ConfigState::from_lookup(lookup_from(&[(ENV_CURRENCY_CODE, "U5D")])).is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["currencySymbol"], "$");
        assert_eq!(json["storeName"], "Storefront Demo");
    }
}
