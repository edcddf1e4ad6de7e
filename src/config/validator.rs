//! Config validation run before the server binds.

use crate::config::ServerConfig;
use crate::error::ConfigError;

pub fn validate(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.host.trim().is_empty() {
        return Err(ConfigError::Validation("host must not be empty".into()));
    }
    if config.port == 0 {
        return Err(ConfigError::Validation("port must be non-zero".into()));
    }
    if config.body_limit_bytes == 0 {
        return Err(ConfigError::Validation("body limit must be greater than zero".into()));
    }
    Ok(())
}
