//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Environment variables that override file values.
pub const ENV_BIND: &str = "FLIGHT_PROXY_BIND";
pub const ENV_API_KEY: &str = "FLIGHT_API_KEY";
pub const ENV_API_HOST: &str = "FLIGHT_API_HOST";
pub const ENV_BASE_URL: &str = "FLIGHT_API_BASE_URL";
pub const ENV_OUTBOUND_DATE: &str = "FLIGHT_OUTBOUND_DATE";

/// Load configuration from an optional TOML file, apply environment
/// overrides, then validate.
///
/// With no path the defaults are used as the base.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Deserialize a TOML document. Missing sections and fields take defaults.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Overlay environment values onto `config`.
///
/// `lookup` abstracts `std::env::var` so tests don't touch process state.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let targets: [(&str, &mut String); 5] = [
        (ENV_BIND, &mut config.listener.bind_address),
        (ENV_API_KEY, &mut config.upstream.api_key),
        (ENV_API_HOST, &mut config.upstream.api_host),
        (ENV_BASE_URL, &mut config.upstream.base_url),
        (ENV_OUTBOUND_DATE, &mut config.upstream.outbound_date),
    ];

    for (key, slot) in targets {
        if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
            *slot = value;
        }
    }
}
