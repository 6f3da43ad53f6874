//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honored (loaded by the binaries
//! via `dotenvy`).
//!
//! ## Bind Address
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! If `LISTEN` is not set, it is built from `HOST` (default `0.0.0.0`) and
//! `PORT` (default `3000`).
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PUBLIC_BASE_URL` - Base for share URLs, e.g. `https://agency.example`.
//!   When unset, each share URL is built from the request's scheme and `Host`.
//! - `SHARE_CODE_LENGTH` - Hex characters per share code, even, 8 to 32 (default: 8)

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::{Context, Result};
use url::Url;

use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, is_valid_code_length};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL for share links, without a trailing slash.
    pub public_base_url: Option<String>,
    pub share_code_length: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let share_code_length = parse_env("SHARE_CODE_LENGTH")?.unwrap_or(DEFAULT_CODE_LENGTH);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            public_base_url,
            share_code_length,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. Constructed from `HOST` and `PORT`
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, port)
        } else {
            format!("{}:{}", host, port)
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - `log_format` is not `text` or `json`
    /// - `public_base_url` is not an absolute http(s) URL with a host
    /// - `share_code_length` is odd or outside 8..=32
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port' with an IP host, got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref base) = self.public_base_url {
            let url = Url::parse(base)
                .with_context(|| format!("PUBLIC_BASE_URL is not a valid URL: '{}'", base))?;

            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!(
                    "PUBLIC_BASE_URL must use http or https, got '{}'",
                    url.scheme()
                );
            }

            if url.host_str().is_none() {
                anyhow::bail!("PUBLIC_BASE_URL must include a host, got '{}'", base);
            }
        }

        if !is_valid_code_length(self.share_code_length) {
            anyhow::bail!(
                "SHARE_CODE_LENGTH must be an even number between {} and {}, got {}",
                DEFAULT_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.share_code_length
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.public_base_url {
            Some(ref base) => tracing::info!("  Public base URL: {}", base),
            None => tracing::info!("  Public base URL: derived from requests"),
        }
        tracing::info!("  Share code length: {}", self.share_code_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional environment variable.
///
/// Unset means `Ok(None)`; set but unparsable is an error.
fn parse_env<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: '{}'", name, raw)),
        Err(_) => Ok(None),
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
