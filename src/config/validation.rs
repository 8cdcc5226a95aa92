//! Configuration validation.
//!
//! Serde handles the syntactic layer; this checks values that deserialize
//! fine but cannot work at runtime. All errors are collected, not just the
//! first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("upstream.base_url: '{0}' is not an http(s) URL")]
    InvalidBaseUrl(String),

    #[error("upstream.api_host must not be empty")]
    EmptyApiHost,

    #[error("upstream.outbound_date: '{0}' is not YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{0} must be at least 1")]
    NotPositive(&'static str),
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    let upstream = &config.upstream;
    match Url::parse(&upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(upstream.base_url.clone())),
    }

    if upstream.api_host.trim().is_empty() {
        errors.push(ValidationError::EmptyApiHost);
    }

    if !is_iso_date(&upstream.outbound_date) {
        errors.push(ValidationError::InvalidDate(upstream.outbound_date.clone()));
    }

    if upstream.adults == 0 {
        errors.push(ValidationError::NotPositive("upstream.adults"));
    }
    if upstream.max_results == 0 {
        errors.push(ValidationError::NotPositive("upstream.max_results"));
    }

    let obs = &config.observability;
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: obs.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Shape check only; calendar validity is upstream's business.
fn is_iso_date(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    matches!(parts.as_slice(), [y, m, d]
        if y.len() == 4 && m.len() == 2 && d.len() == 2
            && parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())))
}
