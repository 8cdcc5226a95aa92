//! Flight search proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌────────────────────────────────────────────┐
//!                       │                FLIGHT PROXY                │
//!   POST /search        │  ┌─────────┐    ┌──────────┐    ┌────────┐ │
//!   ────────────────────┼─▶│  http   │───▶│ handlers │───▶│flights │─┼──▶ flight-pricing
//!                       │  │ server  │    │ (decode) │    │ client │ │     API (GET)
//!   JSON result list    │  └─────────┘    └──────────┘    └───┬────┘ │
//!   ◀───────────────────┼──────────────────────────────────── │      │
//!                       │                 translate ◀─────────┘      │
//!                       │                                            │
//!                       │  config · observability · lifecycle        │
//!                       └────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use flight_proxy::config::load_config;
use flight_proxy::http::HttpServer;
use flight_proxy::lifecycle::{signals, Shutdown};
use flight_proxy::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "flight-proxy")]
#[command(about = "HTTP proxy for flight price searches", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!("flight-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        outbound_date = %config.upstream.outbound_date,
        max_results = config.upstream.max_results,
        "Configuration loaded"
    );

    if config.upstream.api_key.is_empty() {
        tracing::warn!("No upstream API key configured; searches will likely return no results");
    }

    if config.observability.metrics_enabled {
        // Address was checked during validation.
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
