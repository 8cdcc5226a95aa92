//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → handed to HttpServer at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Credentials come from config or environment, never from source

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, ListenerConfig, ObservabilityConfig, SecurityConfig, UpstreamConfig};
pub use validation::ValidationError;
