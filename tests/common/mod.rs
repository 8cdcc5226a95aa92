//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use flight_proxy::config::AppConfig;
use flight_proxy::flights::FlightClient;
use flight_proxy::http::HttpServer;
use flight_proxy::lifecycle::Shutdown;

/// What the mock upstream saw.
#[derive(Default)]
pub struct Recorded {
    pub calls: AtomicU32,
    /// Raw request heads (request line + headers), in arrival order.
    pub heads: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl Recorded {
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_head(&self) -> Option<String> {
        self.heads.lock().unwrap().last().cloned()
    }
}

/// Start a mock upstream that answers with a fixed JSON body.
#[allow(dead_code)]
pub async fn start_mock_upstream(body: String) -> (SocketAddr, Arc<Recorded>) {
    start_programmable_upstream(move || {
        let body = body.clone();
        async move { (200, body) }
    })
    .await
}

/// Start a programmable mock upstream on an ephemeral port.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> (SocketAddr, Arc<Recorded>)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded = Arc::new(Recorded::default());
    let f = Arc::new(f);

    let rec = recorded.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let rec = rec.clone();
                    tokio::spawn(async move {
                        let head = read_head(&mut socket).await;
                        rec.heads.lock().unwrap().push(head);
                        rec.calls.fetch_add(1, Ordering::SeqCst);

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, recorded)
}

/// Read until the end of the request head. GET requests carry no body.
async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Run the proxy on an ephemeral port against `upstream`.
pub async fn start_proxy(upstream: SocketAddr) -> (SocketAddr, Shutdown, tokio::task::JoinHandle<()>) {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.base_url = format!("http://{}", upstream);
    config.upstream.api_key = "test-key".into();
    config.upstream.api_host = "flights.test".into();

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let flights = FlightClient::with_client(http, config.upstream.clone());
    let server = HttpServer::with_flight_client(config, flights);

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        let _ = server.run(listener, signal).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown, handle)
}

/// Client that never routes through an environment proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Upstream payload with `n` itineraries, prices 100, 101, ...
#[allow(dead_code)]
pub fn upstream_body(n: usize) -> String {
    let flights: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "departure_time": format!("2025-08-13 {:02}:00", i % 24),
                "arrival_time": format!("2025-08-13 {:02}:30", i % 24),
                "duration": { "raw": 1800, "text": "30m" },
                "price": 100 + i,
                "airline_logo": "https://example.com/logo.png",
                "stops": i % 3,
                "flights": [
                    { "airline": "Delta", "flight_number": format!("DL{}", i), "aircraft": "A321" }
                ]
            })
        })
        .collect();

    serde_json::json!({
        "status": true,
        "message": "Success",
        "data": { "itineraries": { "topFlights": flights } }
    })
    .to_string()
}
