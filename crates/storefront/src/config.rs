//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_STORAGE_DIR` - Directory for file-backed storage (default: `.ascii-cart`)
//! - `CART_STORAGE_KEY` - Storage slot holding the cart (default: `ascii_cart`)
//! - `CART_CURRENCY_SYMBOL` - Prefix for rendered amounts (default: `R$`)

use std::path::PathBuf;

use ascii_cart_core::DEFAULT_CART_KEY;
use ascii_cart_core::storage::validate_key;
use thiserror::Error;

const DEFAULT_STORAGE_DIR: &str = ".ascii-cart";
const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory used by file-backed storage
    pub storage_dir: PathBuf,
    /// Storage slot holding the serialized cart
    pub cart_key: String,
    /// Symbol printed before every amount
    pub currency_symbol: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            cart_key: DEFAULT_CART_KEY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_dir = lookup("CART_STORAGE_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.storage_dir, PathBuf::from);

        let cart_key = lookup("CART_STORAGE_KEY").unwrap_or(defaults.cart_key);
        validate_key(&cart_key).map_err(|e| {
            ConfigError::InvalidEnvVar("CART_STORAGE_KEY".to_string(), e.to_string())
        })?;

        let currency_symbol = lookup("CART_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol);
        if currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CART_CURRENCY_SYMBOL".to_string(),
                "must not be blank".to_string(),
            ));
        }

        Ok(Self {
            storage_dir,
            cart_key,
            currency_symbol,
        })
    }
}
