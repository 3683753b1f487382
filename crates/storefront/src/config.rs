//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHEET_PRODUCTS_URL` - Google Sheets gviz endpoint returning the product rows
//! - `WHATSAPP_NUMBER` - Phone number (country code, no `+`) for order handoff
//!
//! ## Optional
//! - `SHEET_CONTACT_URL` - Apps Script endpoint that appends contact messages
//! - `CONTACT_PHONE` - Display phone number
//! - `CONTACT_EMAIL` - Display email address
//! - `CONTACT_ADDRESS` - Display street address
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Google Sheets endpoint configuration
    pub sheets: SheetsConfig,
    /// Contact display data and WhatsApp handoff number
    pub contact: ContactConfig,
}

/// Google Sheets endpoint configuration.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// gviz endpoint returning the product table
    pub products_url: Url,
    /// Apps Script endpoint receiving contact messages, if configured
    pub contact_url: Option<Url>,
}

/// Contact details shown on the contact page, consumed read-only.
///
/// Only `whatsapp_number` carries behavior (the order handoff link); the
/// rest is conditional display data.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// WhatsApp number for the order handoff deep link
    pub whatsapp_number: String,
    /// Display phone number
    pub phone: Option<String>,
    /// Display email address
    pub email: Option<String>,
    /// Display street address
    pub address: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        let sheets = SheetsConfig::from_env()?;
        let contact = ContactConfig::from_env()?;

        Ok(Self {
            host,
            port,
            sheets,
            contact,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SheetsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            products_url: get_required_url("SHEET_PRODUCTS_URL")?,
            contact_url: get_optional_url("SHEET_CONTACT_URL")?,
        })
    }
}

impl ContactConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let whatsapp_number = get_required_env("WHATSAPP_NUMBER")?;
        validate_phone_digits(&whatsapp_number, "WHATSAPP_NUMBER")?;

        Ok(Self {
            whatsapp_number,
            phone: get_optional_env("CONTACT_PHONE"),
            email: get_optional_env("CONTACT_EMAIL"),
            address: get_optional_env("CONTACT_ADDRESS"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a required environment variable parsed as a URL.
fn get_required_url(key: &str) -> Result<Url, ConfigError> {
    let value = get_required_env(key)?;
    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Get an optional environment variable parsed as a URL.
fn get_optional_url(key: &str) -> Result<Option<Url>, ConfigError> {
    get_optional_env(key)
        .map(|value| {
            Url::parse(&value)
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}

/// The `wa.me` link only accepts digits, so reject separators up front.
fn validate_phone_digits(value: &str, var_name: &str) -> Result<(), ConfigError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must contain only digits (country code, no '+')".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone_digits_accepts_digits() {
        assert!(validate_phone_digits("573222132187", "TEST").is_ok());
    }

    #[test]
    fn test_validate_phone_digits_rejects_plus_and_spaces() {
        assert!(validate_phone_digits("+57 322 213 2187", "TEST").is_err());
        assert!(validate_phone_digits("", "TEST").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            sheets: SheetsConfig {
                products_url: Url::parse(
                    "https://docs.google.com/spreadsheets/d/abc/gviz/tq?tqx=out:json",
                )
                .unwrap(),
                contact_url: None,
            },
            contact: ContactConfig {
                whatsapp_number: "573222132187".to_string(),
                phone: None,
                email: None,
                address: None,
            },
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
