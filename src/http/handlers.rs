//! Route handlers: index page, search, preflight.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

use serde::de::Unexpected;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::flights::{FlightResult, SearchError, SearchRequest};
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;

pub const INDEX_PAGE: &str = "<h1>Flight API is running!</h1>\n<p>Use /search endpoint</p>";

/// Static landing page, served for `/` and any unknown path.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// CORS preflight. Headers are added by the route's layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// `POST /search`.
///
/// A body that doesn't decode is a 400 and never reaches upstream. Every
/// upstream failure becomes `200 []`; the cause is only logged.
pub async fn search(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let request_id = request_id(&headers);

    let req = match decode_search_request(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Invalid search body");
            return (StatusCode::BAD_REQUEST, "Invalid request body").into_response();
        }
    };

    tracing::debug!(
        request_id = %request_id,
        from = %req.from,
        to = %req.to,
        travel_class = %req.travel_class,
        "Searching flights"
    );

    let start = Instant::now();
    let results: Vec<FlightResult> = match state.flights.search(&req).await {
        Ok(results) => {
            tracing::info!(request_id = %request_id, count = results.len(), "Search complete");
            metrics::record_search("ok", results.len(), start);
            results
        }
        Err(e) => {
            log_search_error(request_id, &e);
            metrics::record_search(e.kind(), 0, start);
            Vec::new()
        }
    };

    Json(results).into_response()
}

fn log_search_error(request_id: &str, err: &SearchError) {
    match err {
        SearchError::NoItineraries => {
            tracing::info!(request_id = %request_id, "No flights found")
        }
        _ => tracing::error!(request_id = %request_id, kind = err.kind(), error = %err, "Search failed"),
    }
}

/// Decode the first JSON value in `body`. Trailing bytes are ignored and
/// the content type is not checked.
///
/// Only an object (or `null`, meaning all fields empty) is a request; arrays
/// and scalars are rejected. Keys match field names case-insensitively.
pub fn decode_search_request(body: &[u8]) -> Result<SearchRequest, serde_json::Error> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();
    let value = match values.next() {
        Some(result) => result?,
        // Empty input: let serde produce its EOF error.
        None => serde_json::from_slice(body)?,
    };

    match value {
        Value::Null => Ok(SearchRequest::default()),
        Value::Object(map) => SearchRequest::deserialize(Value::Object(canonical_keys(map))),
        other => Err(serde::de::Error::invalid_type(
            unexpected(&other),
            &"a JSON object",
        )),
    }
}

const REQUEST_KEYS: [&str; 3] = ["from", "to", "travelClass"];

/// Rewrite keys like `From` or `TRAVELCLASS` to their field names.
fn canonical_keys(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| {
            let key = REQUEST_KEYS
                .iter()
                .find(|known| known.eq_ignore_ascii_case(&key))
                .map(|known| known.to_string())
                .unwrap_or(key);
            (key, value)
        })
        .collect()
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Null => Unexpected::Unit,
        Value::Object(_) => Unexpected::Map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_request() {
        let req = decode_search_request(br#"{"from":"JFK","to":"LAX","travelClass":"ECONOMY"}"#)
            .unwrap();
        assert_eq!(req.from, "JFK");
        assert_eq!(req.to, "LAX");
        assert_eq!(req.travel_class, "ECONOMY");
    }

    #[test]
    fn test_decode_is_structural_only() {
        let req = decode_search_request(br#"{"from":"JFK","extra":1}"#).unwrap();
        assert_eq!(req.from, "JFK");
        assert_eq!(req.to, "");
        assert_eq!(req.travel_class, "");
    }

    #[test]
    fn test_decode_ignores_trailing_data() {
        let req = decode_search_request(b"{\"from\":\"SFO\"}\n{garbage").unwrap();
        assert_eq!(req.from, "SFO");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode_search_request(b"").is_err());
        assert!(decode_search_request(b"   ").is_err());
        assert!(decode_search_request(b"{not json").is_err());
        assert!(decode_search_request(br#"{"from":42}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        assert!(decode_search_request(b"[]").is_err());
        assert!(decode_search_request(br#"["JFK","LAX","ECONOMY"]"#).is_err());
        assert!(decode_search_request(b"42").is_err());
        assert!(decode_search_request(br#""JFK""#).is_err());
        assert!(decode_search_request(b"true").is_err());
    }

    #[test]
    fn test_decode_null_is_empty_request() {
        assert_eq!(decode_search_request(b"null").unwrap(), SearchRequest::default());
    }

    #[test]
    fn test_decode_keys_case_insensitive() {
        let req = decode_search_request(br#"{"From":"JFK","TO":"LAX","travelclass":"FIRST"}"#)
            .unwrap();
        assert_eq!(req.from, "JFK");
        assert_eq!(req.to, "LAX");
        assert_eq!(req.travel_class, "FIRST");
    }
}
