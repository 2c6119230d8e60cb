//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UI_LOCALE` - Page language: `en` or `id` (default: `en`)
//! - `CLOUDFLARE_API_BASE` - Upstream API base URL
//!   (default: `https://api.cloudflare.com/client/v4`)
//! - `CERTIFICATE_AUTHORITY` - Certificate authority requested for Universal SSL
//!   (default: `ssl_com`)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export UI_LOCALE="id"
//! ```

use crate::domain::entities::DEFAULT_CERTIFICATE_AUTHORITY;
use crate::infrastructure::cloudflare::DEFAULT_API_BASE;
use crate::web::Locale;

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub locale: Locale,
    /// Base URL the zone settings path is appended to.
    pub cloudflare_api_base: String,
    pub certificate_authority: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `UI_LOCALE` names an unsupported language.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let locale = match env::var("UI_LOCALE") {
            Ok(value) => value.parse::<Locale>().context("Invalid UI_LOCALE")?,
            Err(_) => Locale::default(),
        };

        let cloudflare_api_base =
            env::var("CLOUDFLARE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let certificate_authority = env::var("CERTIFICATE_AUTHORITY")
            .unwrap_or_else(|_| DEFAULT_CERTIFICATE_AUTHORITY.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            locale,
            cloudflare_api_base,
            certificate_authority,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `cloudflare_api_base` is not an `http://` or `https://` URL
    /// - `certificate_authority` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.cloudflare_api_base.starts_with("https://")
            && !self.cloudflare_api_base.starts_with("http://")
        {
            anyhow::bail!(
                "CLOUDFLARE_API_BASE must start with 'http://' or 'https://', got '{}'",
                self.cloudflare_api_base
            );
        }

        if self.certificate_authority.trim().is_empty() {
            anyhow::bail!("CERTIFICATE_AUTHORITY must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  UI locale: {}", self.locale);
        tracing::info!("  Cloudflare API: {}", self.cloudflare_api_base);
        tracing::info!("  Certificate authority: {}", self.certificate_authority);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
