//! Flight search proxy library.

pub mod config;
pub mod flights;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use flights::FlightClient;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
