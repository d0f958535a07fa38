use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use yatra_core::{FlightQuery, SearchEnvelope, TripType};
use yatra_offer::models::{Combination, Deal, FlightOffer};
use yatra_offer::routes::{Destination, POPULAR_DESTINATIONS};
use yatra_offer::FlightGenerator;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", post(search_flights))
        .route("/v1/flights/deals", post(best_deals))
        .route("/v1/flights/destinations", get(popular_destinations))
}

/// The uniform envelope plus the flight-specific round-trip extras.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResponse {
    #[serde(flatten)]
    pub envelope: SearchEnvelope<FlightOffer>,
    pub outbound: Vec<FlightOffer>,
    #[serde(rename = "return")]
    pub return_flights: Vec<FlightOffer>,
    pub combinations: Vec<Combination>,
    pub trip_type: TripType,
    pub total_combinations: usize,
}

/// POST /v1/flights/search
/// One-way or round-trip flight search. An invalid round trip downgrades
/// to one-way and reports the downgrade in `warnings`.
async fn search_flights(
    State(state): State<AppState>,
    body: Result<Json<FlightQuery>, JsonRejection>,
) -> Result<Json<FlightSearchResponse>, AppError> {
    let Json(query) = body?;
    let (search, warnings) = query.normalize();

    state.simulate_latency().await;

    let mut generator = FlightGenerator::seeded(state.seed());
    let schedule = generator.generate(&search);
    let combinations = generator.combine(&schedule);

    let message = match schedule.trip_type {
        TripType::RoundTrip => format!(
            "Mock flights loaded successfully for round trip ({} outbound, {} return)",
            schedule.outbound.len(),
            schedule.return_flights.len()
        ),
        TripType::OneWay => format!(
            "Mock flights loaded successfully for one-way trip ({} flights)",
            schedule.outbound.len()
        ),
    };

    let data: Vec<FlightOffer> = schedule
        .outbound
        .iter()
        .chain(schedule.return_flights.iter())
        .cloned()
        .collect();

    let envelope = SearchEnvelope::ok(data, message, "Mock Flight Data Provider")
        .with_params(&search)
        .with_warnings(warnings);

    Ok(Json(FlightSearchResponse {
        envelope,
        total_combinations: combinations.len(),
        combinations,
        trip_type: schedule.trip_type,
        outbound: schedule.outbound,
        return_flights: schedule.return_flights,
    }))
}

/// POST /v1/flights/deals
/// Best round-trip deals for a route. Fails soft (envelope with
/// `success: false`) when the search yields no return legs.
async fn best_deals(
    State(state): State<AppState>,
    body: Result<Json<FlightQuery>, JsonRejection>,
) -> Result<Json<SearchEnvelope<Deal>>, AppError> {
    let Json(query) = body?;
    let (mut search, warnings) = query.normalize();
    // Deals always evaluate the round-trip cross product.
    search.trip_type = TripType::RoundTrip;

    state.simulate_latency().await;

    let mut generator = FlightGenerator::seeded(state.seed());
    let schedule = generator.generate(&search);
    let deals = generator.best_deals(&schedule)?;

    let message = format!("Found {} best round trip deals", deals.len());
    Ok(Json(
        SearchEnvelope::ok(deals, message, "Mock Flight Data Provider")
            .with_params(&search)
            .with_warnings(warnings),
    ))
}

/// GET /v1/flights/destinations
async fn popular_destinations(State(state): State<AppState>) -> Json<SearchEnvelope<Destination>> {
    state.simulate_latency().await;
    Json(SearchEnvelope::ok(
        POPULAR_DESTINATIONS.to_vec(),
        "Popular destinations loaded successfully",
        "Mock Flight Data Provider",
    ))
}
