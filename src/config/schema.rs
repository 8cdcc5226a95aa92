//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the flight proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Flight-pricing API settings.
    pub upstream: UpstreamConfig,

    /// Request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream flight-pricing API configuration.
///
/// Everything except `from`, `to` and `travelClass` in an outbound query
/// comes from here.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Scheme and authority of the API (no trailing path).
    pub base_url: String,

    /// Value of the `x-rapidapi-key` header.
    pub api_key: String,

    /// Value of the `x-rapidapi-host` header.
    pub api_host: String,

    /// Travel date sent as `outbound_date` (YYYY-MM-DD).
    pub outbound_date: String,

    /// Adult passenger count.
    pub adults: u32,

    pub currency: String,
    pub language_code: String,
    pub country_code: String,

    /// Upstream ranking mode (e.g., "best").
    pub search_type: String,

    /// Ask upstream to include hidden results.
    pub show_hidden: bool,

    /// Maximum number of itineraries returned to the caller.
    pub max_results: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://google-flights2.p.rapidapi.com".to_string(),
            api_key: String::new(),
            api_host: "google-flights2.p.rapidapi.com".to_string(),
            outbound_date: "2025-08-13".to_string(),
            adults: 1,
            currency: "USD".to_string(),
            language_code: "en-US".to_string(),
            country_code: "US".to_string(),
            search_type: "best".to_string(),
            show_hidden: true,
            max_results: 10,
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum inbound body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
