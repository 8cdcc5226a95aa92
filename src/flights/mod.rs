//! Flight search translation.
//!
//! # Data Flow
//! ```text
//! SearchRequest
//!     → client.rs (query string + credential headers, one GET)
//!     → types.rs (nested UpstreamResponse)
//!     → translate.rs (first N itineraries → FlightResult)
//!     → Result<Vec<FlightResult>, SearchError>
//! ```

pub mod client;
pub mod error;
pub mod translate;
pub mod types;

pub use client::FlightClient;
pub use error::SearchError;
pub use types::{FlightResult, SearchRequest};
