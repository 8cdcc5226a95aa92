//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the flight client produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and histograms)
//!
//! Consumers:
//!     → stdout
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to every handler log line
//! - Upstream failure kinds are only visible here; callers see an empty list

pub mod logging;
pub mod metrics;
