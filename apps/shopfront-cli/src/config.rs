//! # App Configuration
//!
//! The full `config.toml`: the `[catalog]` section owned by
//! `shopfront-catalog` and the `[display]` section read into
//! [`ConfigState`].
//!
//! ## Load Order (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults                                                           │
//! │  2. Config file                                                        │
//! │     --config <path>, or the platform config dir:                       │
//! │       Linux:   ~/.config/shopfront/config.toml                         │
//! │       macOS:   ~/Library/Application Support/com.shopfront.shopfront/  │
//! │       Windows: %APPDATA%\shopfront\shopfront\config\                   │
//! │  3. Environment (SHOPFRONT_*)                                          │
//! │  4. Command line flags (applied by main)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! base_url = "https://fakestoreapi.com"
//! limit = 20
//! timeout_secs = 10
//!
//! [display]
//! store_name = "Shopfront"
//! currency_symbol = "$"
//! currency_decimals = 2
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shopfront_catalog::{CatalogConfig, CatalogError};
use thiserror::Error;
use tracing::{debug, info};

use crate::state::ConfigState;

pub const ENV_STORE_NAME: &str = "SHOPFRONT_STORE_NAME";

/// Display decimals beyond this overflow the currency formatter.
const MAX_CURRENCY_DECIMALS: u8 = 6;

/// Errors raised while loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Invalid display configuration: {0}")]
    InvalidDisplay(String),
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub display: ConfigState,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// An explicit `config_path` must exist; the platform default may be
    /// absent, in which case defaults are used.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with environment lookups routed through `env`.
    pub fn load_with<F>(config_path: Option<PathBuf>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path)),
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(&env);
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()?;

        if self.display.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::InvalidDisplay(format!(
                "currency_decimals must be at most {}, got {}",
                MAX_CURRENCY_DECIMALS, self.display.currency_decimals
            )));
        }

        Ok(())
    }

    fn apply_overrides<F>(&mut self, env: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.catalog.apply_overrides(env);

        if let Some(name) = env(ENV_STORE_NAME) {
            debug!(store_name = %name, "Overriding store name from environment");
            self.display.store_name = name;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopfront", "shopfront")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
