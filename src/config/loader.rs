//! Load `ServerConfig` from environment variables (after reading an optional `.env`).

use crate::config::{validate, ServerConfig};
use crate::error::ConfigError;
use std::str::FromStr;

/// Read `HOST`, `PORT`, `BODY_LIMIT_BYTES` and `RUST_LOG`, falling back to defaults, then validate.
pub fn load_from_env() -> Result<ServerConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_with(|key| std::env::var(key).ok())
}

/// Same as `load_from_env` but with an injectable variable source.
pub fn load_with<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ServerConfig::default();
    let config = ServerConfig {
        host: lookup("HOST").unwrap_or(defaults.host),
        port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
        body_limit_bytes: parse_var(&lookup, "BODY_LIMIT_BYTES")?.unwrap_or(defaults.body_limit_bytes),
        log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
    };
    validate(&config)?;
    tracing::debug!(config = ?config, "server config loaded");
    Ok(config)
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
