//! Outbound client for the flight-pricing API.

use reqwest::Client;
use url::Url;

use crate::config::UpstreamConfig;
use crate::flights::error::SearchError;
use crate::flights::translate::project_itineraries;
use crate::flights::types::{FlightResult, SearchRequest, UpstreamResponse};

pub const SEARCH_PATH: &str = "/api/v1/searchFlights";
pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Issues one upstream call per search. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct FlightClient {
    http: Client,
    config: UpstreamConfig,
}

impl FlightClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: UpstreamConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Query parameters in the order the API documents them.
    pub fn query_params(&self, req: &SearchRequest) -> Vec<(&'static str, String)> {
        let c = &self.config;
        vec![
            ("departure_id", req.from.clone()),
            ("outbound_date", c.outbound_date.clone()),
            ("arrival_id", req.to.clone()),
            ("travel_class", req.travel_class.clone()),
            ("adults", c.adults.to_string()),
            ("show_hidden", if c.show_hidden { "1" } else { "0" }.to_string()),
            ("currency", c.currency.clone()),
            ("language_code", c.language_code.clone()),
            ("country_code", c.country_code.clone()),
            ("search_type", c.search_type.clone()),
        ]
    }

    /// Full upstream URL for a search, query string included.
    pub fn search_url(&self, req: &SearchRequest) -> Result<Url, url::ParseError> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse_with_params(&format!("{}{}", base, SEARCH_PATH), self.query_params(req))
    }

    /// Run a search and project the result. No retries.
    pub async fn search(&self, req: &SearchRequest) -> Result<Vec<FlightResult>, SearchError> {
        let url = self.search_url(req)?;

        tracing::debug!(url = %url, "Querying flight API");

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(API_HOST_HEADER, &self.config.api_host)
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.bytes().await.map_err(SearchError::Body)?;
        let parsed: UpstreamResponse = serde_json::from_slice(&body)?;

        let itineraries = &parsed.data.itineraries.top_flights;
        if itineraries.is_empty() {
            tracing::debug!(
                status = parsed.status,
                message = %parsed.message,
                "Upstream returned no itineraries"
            );
            return Err(SearchError::NoItineraries);
        }

        Ok(project_itineraries(itineraries, self.config.max_results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SearchRequest {
        SearchRequest {
            from: "JFK".into(),
            to: "LAX".into(),
            travel_class: "ECONOMY".into(),
        }
    }

    #[test]
    fn test_search_url_embeds_fields_and_defaults() {
        let client = FlightClient::new(UpstreamConfig::default());
        let url = client.search_url(&request()).unwrap();

        assert_eq!(url.host_str(), Some("google-flights2.p.rapidapi.com"));
        assert_eq!(url.path(), SEARCH_PATH);
        assert_eq!(
            url.query(),
            Some(
                "departure_id=JFK&outbound_date=2025-08-13&arrival_id=LAX&travel_class=ECONOMY\
                 &adults=1&show_hidden=1&currency=USD&language_code=en-US&country_code=US\
                 &search_type=best"
            )
        );
    }

    #[test]
    fn test_search_url_tolerates_trailing_slash_and_encodes() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:3000/".into(),
            ..UpstreamConfig::default()
        };
        let client = FlightClient::new(config);
        let req = SearchRequest { from: "A B".into(), ..request() };
        let url = client.search_url(&req).unwrap();

        assert_eq!(url.path(), SEARCH_PATH);
        assert!(url.query().unwrap().starts_with("departure_id=A+B&"));
    }

    #[test]
    fn test_show_hidden_flag() {
        let config = UpstreamConfig { show_hidden: false, ..UpstreamConfig::default() };
        let params = FlightClient::new(config).query_params(&request());
        assert!(params.contains(&("show_hidden", "0".to_string())));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_transport_error() {
        // Grab a free port, then close it so the connect is refused.
        let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let config = UpstreamConfig {
            base_url: format!("http://{}", addr),
            ..UpstreamConfig::default()
        };
        let http = Client::builder().no_proxy().build().unwrap();
        let err = FlightClient::with_client(http, config)
            .search(&request())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "transport");
    }
}
