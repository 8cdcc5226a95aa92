//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign/propagate x-request-id)
//!     → cors.rs (Access-Control-Allow-* on /search)
//!     → handlers.rs (decode body, call flights, encode JSON)
//!     → Send to client
//! ```

pub mod cors;
pub mod handlers;
pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
