//! Projection of the nested upstream payload into flat results.

use crate::flights::types::{FlightResult, Itinerary};

/// Render a stop count for display.
pub fn format_stops(stops: i64) -> String {
    if stops > 0 {
        format!("{} stop(s)", stops)
    } else {
        "Non-stop".to_string()
    }
}

/// Flatten up to `limit` itineraries, preserving upstream order.
///
/// Airline and flight number come from the first leg. An itinerary with no
/// legs is still emitted, with those two fields left empty.
pub fn project_itineraries(itineraries: &[Itinerary], limit: usize) -> Vec<FlightResult> {
    itineraries
        .iter()
        .take(limit)
        .map(|itinerary| {
            let (airline, flight_number) = match itinerary.flights.first() {
                Some(leg) => (leg.airline.clone(), leg.flight_number.clone()),
                None => {
                    tracing::warn!(
                        departure_time = %itinerary.departure_time,
                        price = itinerary.price,
                        "Itinerary has no flight legs"
                    );
                    (String::new(), String::new())
                }
            };

            FlightResult {
                departure_time: itinerary.departure_time.clone(),
                arrival_time: itinerary.arrival_time.clone(),
                duration: itinerary.duration.text.clone(),
                price: itinerary.price,
                airline,
                flight_number,
                stops: format_stops(itinerary.stops),
            }
        })
        .collect()
}
