//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load config → Init logging/metrics → Bind listener → Serve
//!
//! Shutdown:
//!     SIGINT/SIGTERM (signals.rs) → Shutdown::trigger (shutdown.rs)
//!     → axum stops accepting → in-flight searches finish → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last, after config and logging are ready

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownSignal};
