//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the server starts with defaults and reports
//! a missing catalog API key at request time, not at startup.
//!
//! - `MARQUEE_HOST` - Bind address (default: 127.0.0.1)
//! - `MARQUEE_PORT` - Listen port (default: 3000)
//! - `TMDB_API_KEY` - Catalog API key; without it every catalog call fails
//!   with a server error
//! - `TMDB_BASE_URL` - Catalog API base (default: `https://api.themoviedb.org/3`)
//! - `TMDB_IMAGE_BASE_URL` - Image CDN base (default: `https://image.tmdb.org/t/p/`)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// External catalog configuration
    pub catalog: CatalogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// External catalog API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Catalog API base URL
    pub base_url: Url,
    /// Image CDN base URL
    pub image_base_url: Url,
    /// Catalog API key; absent means catalog calls fail at request time
    pub api_key: Option<SecretString>,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url.as_str())
            .field("image_base_url", &self.image_base_url.as_str())
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MARQUEE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MARQUEE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MARQUEE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MARQUEE_PORT".to_string(), e.to_string()))?;

        let catalog = CatalogConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            catalog,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_url_or_default("TMDB_BASE_URL", "https://api.themoviedb.org/3")?;
        let image_base_url =
            get_url_or_default("TMDB_IMAGE_BASE_URL", "https://image.tmdb.org/t/p/")?;

        // An empty key is as good as no key at all.
        let api_key = get_optional_env("TMDB_API_KEY")
            .filter(|key| !key.is_empty())
            .map(SecretString::from);

        Ok(Self {
            base_url,
            image_base_url,
            api_key,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable as a validated URL, with a default.
fn get_url_or_default(key: &str, default: &str) -> Result<Url, ConfigError> {
    get_env_or_default(key, default)
        .parse::<Url>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
