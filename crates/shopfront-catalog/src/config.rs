//! # Catalog Configuration
//!
//! The `[catalog]` section of the Shopfront config file.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPFRONT_API_BASE_URL=https://fakestoreapi.com                    │
//! │     SHOPFRONT_CATALOG_LIMIT=20                                         │
//! │     SHOPFRONT_HTTP_TIMEOUT_SECS=10                                     │
//! │                                                                         │
//! │  2. TOML Config File ([catalog] section)                               │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! base_url = "https://fakestoreapi.com"
//! limit = 20
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use shopfront_core::DEFAULT_CATALOG_LIMIT;
use tracing::{debug, warn};
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Public product listing used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

pub const ENV_BASE_URL: &str = "SHOPFRONT_API_BASE_URL";
pub const ENV_LIMIT: &str = "SHOPFRONT_CATALOG_LIMIT";
pub const ENV_TIMEOUT_SECS: &str = "SHOPFRONT_HTTP_TIMEOUT_SECS";

/// Catalog source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root of the REST API; `/products` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of products requested per fetch.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Whole-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_CATALOG_LIMIT
}

fn default_timeout() -> u64 {
    10
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: default_base_url(),
            limit: default_limit(),
            timeout_secs: default_timeout(),
        }
    }
}

impl CatalogConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        let url = self.parsed_base_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidConfig(format!(
                "base_url must use http or https, got: {}",
                self.base_url
            )));
        }

        if self.limit == 0 {
            return Err(CatalogError::InvalidConfig(
                "limit must be greater than 0".into(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(CatalogError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Parses `base_url`, forcing a trailing slash so `join("products")`
    /// appends instead of replacing the last path segment.
    pub fn parsed_base_url(&self) -> CatalogResult<Url> {
        let mut url = Url::parse(self.base_url.trim())?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Applies `SHOPFRONT_*` overrides from a key lookup (the process
    /// environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            debug!(url = %url, "Overriding catalog base URL from environment");
            self.base_url = url;
        }

        if let Some(limit) = lookup(ENV_LIMIT) {
            match limit.parse::<u32>() {
                Ok(l) => self.limit = l,
                Err(_) => warn!(value = %limit, "Ignoring non-numeric {}", ENV_LIMIT),
            }
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            match timeout.parse::<u64>() {
                Ok(t) => self.timeout_secs = t,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric {}", ENV_TIMEOUT_SECS),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://fakestoreapi.com");
        assert_eq!(config.limit, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let mut config = CatalogConfig::default();
        config.base_url = "http://localhost:8080/api".into();
        let url = config.parsed_base_url().unwrap();
        assert_eq!(url.join("products").unwrap().as_str(), "http://localhost:8080/api/products");
    }

    #[test]
    fn test_config_validation() {
        let mut config = CatalogConfig::default();

        config.base_url = "ftp://example.com".into();
        assert!(config.validate().is_err());

        config.base_url = "not a url".into();
        assert!(matches!(config.validate(), Err(CatalogError::InvalidUrl(_))));

        config.base_url = DEFAULT_BASE_URL.into();
        config.limit = 0;
        assert!(config.validate().is_err());

        config.limit = 5;
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_BASE_URL, "http://127.0.0.1:9000"),
            (ENV_LIMIT, "5"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]
        .into_iter()
        .collect();

        let mut config = CatalogConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.limit, 5);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{"limit": 8}"#).unwrap();
        assert_eq!(config.limit, 8);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
