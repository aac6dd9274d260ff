//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections
    pub max_connections: u32,
    /// HTTP server port
    pub server_port: u16,
    /// Path prefix the student routes are mounted under (empty for root)
    pub route_prefix: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_CONNECTION_STRING` - Postgres connection string (falls back to `DATABASE_URL`)
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `ROUTE_PREFIX` - Mount prefix such as `/api` (default: none)
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_CONNECTION_STRING")
                .or_else(|_| env::var("DATABASE_URL"))
                .ok()
                .filter(|v| !v.trim().is_empty()),
            max_connections: parse_max_connections(env::var("DB_MAX_CONNECTIONS").ok()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            route_prefix: normalize_prefix(&env::var("ROUTE_PREFIX").unwrap_or_default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: 5,
            server_port: 3000,
            route_prefix: String::new(),
        }
    }
}

/// Parses the pool size; zero or unparseable values fall back to 5.
fn parse_max_connections(raw: Option<String>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(5)
}

/// Normalizes a mount prefix to `/segment` form, or an empty string for root.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
