//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PRODUCT_API_HOST` - Bind address (default: 127.0.0.1)
//! - `PRODUCT_API_PORT` - Listen port (default: 8000)
//! - `PRODUCT_API_CHANNEL_CAPACITY` - Product actor mailbox size (default: 32)
//!
//! A `.env` file in the working directory is read first if present.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Product API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Capacity of the product actor's request channel
    pub channel_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or(&lookup, "PRODUCT_API_HOST", defaults.host)?;
        let port = parse_or(&lookup, "PRODUCT_API_PORT", defaults.port)?;
        let channel_capacity = parse_or(
            &lookup,
            "PRODUCT_API_CHANNEL_CAPACITY",
            defaults.channel_capacity,
        )?;
        if channel_capacity == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "PRODUCT_API_CHANNEL_CAPACITY".to_string(),
                "must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            host,
            port,
            channel_capacity,
        })
    }

    /// Returns the socket address to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
