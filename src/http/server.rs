//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, body limit, request ID, CORS)
//! - Bind server to listener
//! - Graceful shutdown

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::flights::FlightClient;
use crate::http::cors::with_cors;
use crate::http::handlers::{index, preflight, search};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::ShutdownSignal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub flights: Arc<FlightClient>,
}

/// HTTP server for the flight proxy.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server whose flight client is built from `config.upstream`.
    pub fn new(config: AppConfig) -> Self {
        let flights = FlightClient::new(config.upstream.clone());
        Self::with_flight_client(config, flights)
    }

    /// Create a server around an existing flight client.
    pub fn with_flight_client(config: AppConfig, flights: FlightClient) -> Self {
        let state = AppState {
            flights: Arc::new(flights),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// `/search` accepts POST and OPTIONS; anything else there is a 405.
    /// Every other path serves the index page.
    pub fn build_router(config: &AppConfig, state: AppState) -> Router {
        let search_routes: Router<AppState> =
            with_cors(Router::new().route("/search", post(search).options(preflight)));

        Router::new()
            .route("/", any(index))
            .merge(search_routes)
            .fallback(index)
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// A clone of the router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires, then drain.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
