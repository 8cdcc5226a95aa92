//! Flight search types: inbound request, upstream payload, outbound result.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field: take the default.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Caller-supplied search parameters.
///
/// Decoding is structural only: missing fields become empty strings and
/// values are forwarded upstream without checking airport codes or classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    #[serde(deserialize_with = "null_default")]
    pub from: String,
    #[serde(deserialize_with = "null_default")]
    pub to: String,
    #[serde(rename = "travelClass", deserialize_with = "null_default")]
    pub travel_class: String,
}

/// Top-level body returned by the flight-pricing API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamResponse {
    #[serde(deserialize_with = "null_default")]
    pub status: bool,
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    #[serde(deserialize_with = "null_default")]
    pub data: UpstreamData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamData {
    #[serde(deserialize_with = "null_default")]
    pub itineraries: Itineraries,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Itineraries {
    #[serde(rename = "topFlights", deserialize_with = "null_default")]
    pub top_flights: Vec<Itinerary>,
}

/// One upstream-proposed flight option, possibly with layovers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Itinerary {
    #[serde(deserialize_with = "null_default")]
    pub departure_time: String,
    #[serde(deserialize_with = "null_default")]
    pub arrival_time: String,
    #[serde(deserialize_with = "null_default")]
    pub duration: Duration,
    #[serde(deserialize_with = "null_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_default")]
    pub airline_logo: String,
    #[serde(deserialize_with = "null_default")]
    pub stops: i64,
    #[serde(deserialize_with = "null_default")]
    pub flights: Vec<Leg>,
}

/// Upstream duration: raw seconds plus a pre-formatted label.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Duration {
    #[serde(deserialize_with = "null_default")]
    pub raw: i64,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
}

/// A single flight segment within an itinerary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Leg {
    #[serde(deserialize_with = "null_default")]
    pub airline: String,
    #[serde(deserialize_with = "null_default")]
    pub flight_number: String,
    #[serde(deserialize_with = "null_default")]
    pub aircraft: String,
}

/// Flattened itinerary returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightResult {
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: i64,
    pub airline: String,
    pub flight_number: String,
    pub stops: String,
}
