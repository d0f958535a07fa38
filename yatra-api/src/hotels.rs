use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use yatra_core::{HotelQuery, SearchEnvelope};
use yatra_offer::hotel::AMENITIES;
use yatra_offer::models::HotelOffer;
use yatra_offer::HotelGenerator;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/hotels/search", post(search_hotels))
        .route("/v1/hotels/amenities", get(amenities))
}

/// POST /v1/hotels/search
async fn search_hotels(
    State(state): State<AppState>,
    body: Result<Json<HotelQuery>, JsonRejection>,
) -> Result<Json<SearchEnvelope<HotelOffer>>, AppError> {
    let Json(query) = body?;
    let search = query.normalize();

    state.simulate_latency().await;

    let hotels = HotelGenerator::seeded(state.seed()).generate(&search);
    Ok(Json(
        SearchEnvelope::ok(hotels, "Mock hotels loaded successfully", "Mock Hotel Data Provider")
            .with_params(&search),
    ))
}

/// GET /v1/hotels/amenities
async fn amenities(State(state): State<AppState>) -> Json<SearchEnvelope<&'static str>> {
    state.simulate_latency().await;
    Json(SearchEnvelope::ok(
        AMENITIES.to_vec(),
        "Hotel amenities loaded successfully",
        "Mock Hotel Data Provider",
    ))
}
