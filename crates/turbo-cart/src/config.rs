//! Store configuration.

use serde::{Deserialize, Serialize};
use turbo_cache::cache_key;

use crate::notify::Locale;

/// Namespace under which storefront data is persisted.
pub const STORAGE_NAMESPACE: &str = "@RocketShoes";

/// Default key of the cart snapshot, `@RocketShoes:cart`.
pub fn default_storage_key() -> String {
    cache_key!(STORAGE_NAMESPACE, "cart")
}

/// Configuration for a [`CartStore`](crate::CartStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Key the cart snapshot is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Locale of notices.
    #[serde(default)]
    pub locale: Locale,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            locale: Locale::default(),
        }
    }
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        assert_eq!(StoreConfig::default().storage_key, "@RocketShoes:cart");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"locale":"en"}"#).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.storage_key, "@RocketShoes:cart");
    }
}
