//! Metrics collection and exposition.
//!
//! # Metrics
//! - `flight_search_requests_total` (counter): searches by outcome
//! - `flight_search_duration_seconds` (histogram): upstream round trip
//! - `flight_search_results` (histogram): results returned per search
//!
//! Recording goes through the `metrics` facade and is a no-op until an
//! exporter is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const SEARCH_REQUESTS: &str = "flight_search_requests_total";
pub const SEARCH_DURATION: &str = "flight_search_duration_seconds";
pub const SEARCH_RESULTS: &str = "flight_search_results";

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a finished search. `outcome` is "ok" or a `SearchError::kind()`.
pub fn record_search(outcome: &'static str, results: usize, start: Instant) {
    metrics::counter!(SEARCH_REQUESTS, "outcome" => outcome).increment(1);
    metrics::histogram!(SEARCH_DURATION).record(start.elapsed().as_secs_f64());
    metrics::histogram!(SEARCH_RESULTS).record(results as f64);
}
