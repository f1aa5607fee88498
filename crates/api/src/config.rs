use std::str::FromStr;

use favourites_core::pagination::DEFAULT_MAX_PAGE_ITEMS;
use favourites_store::OrphanPolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on connection draining after a shutdown signal (default: `10`).
    pub shutdown_timeout_secs: u64,
    /// Page-size ceiling for every list endpoint (default: `100`).
    pub max_page_items: usize,
    /// How favourite reads treat references to deleted assets (default: `fail`).
    pub orphan_policy: OrphanPolicy,
}

/// A configuration variable that is set but unusable.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `8080`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `10`                    |
    /// | `MAX_PAGE_ITEMS`        | `100`                   |
    /// | `ORPHAN_POLICY`         | `fail`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_var(&lookup, "PORT", 8080_u16, "a valid u16")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30_u64, "a valid u64")?;
        let shutdown_timeout_secs =
            parse_var(&lookup, "SHUTDOWN_TIMEOUT_SECS", 10_u64, "a valid u64")?;

        let max_page_items = parse_var(
            &lookup,
            "MAX_PAGE_ITEMS",
            DEFAULT_MAX_PAGE_ITEMS,
            "a positive integer",
        )?;
        if max_page_items == 0 {
            return Err(ConfigError {
                var: "MAX_PAGE_ITEMS",
                expected: "a positive integer",
                value: "0".into(),
            });
        }

        let orphan_policy = match lookup("ORPHAN_POLICY") {
            None => OrphanPolicy::default(),
            Some(raw) => OrphanPolicy::parse(&raw).ok_or(ConfigError {
                var: "ORPHAN_POLICY",
                expected: "one of 'fail', 'skip'",
                value: raw,
            })?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            max_page_items,
            orphan_policy,
        })
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value: raw,
        }),
    }
}
