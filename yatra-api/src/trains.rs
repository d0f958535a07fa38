use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use yatra_core::{SearchEnvelope, TrainQuery};
use yatra_offer::booking::PnrStatus;
use yatra_offer::models::TrainOffer;
use yatra_offer::train::StationStatus;
use yatra_offer::{BookingDesk, TrainGenerator};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/trains/search", post(search_trains))
        .route("/v1/trains/stations/live", get(live_stations))
        .route("/v1/trains/pnr/{pnr}", get(pnr_status))
}

/// POST /v1/trains/search
async fn search_trains(
    State(state): State<AppState>,
    body: Result<Json<TrainQuery>, JsonRejection>,
) -> Result<Json<SearchEnvelope<TrainOffer>>, AppError> {
    let Json(query) = body?;
    let search = query.normalize();

    state.simulate_latency().await;

    let trains = TrainGenerator::seeded(state.seed()).generate(&search);
    Ok(Json(
        SearchEnvelope::ok(trains, "Mock trains loaded successfully", "Mock Railway Data Provider")
            .with_params(&search),
    ))
}

/// GET /v1/trains/stations/live
async fn live_stations(State(state): State<AppState>) -> Json<SearchEnvelope<StationStatus>> {
    state.simulate_latency().await;
    let board = TrainGenerator::seeded(state.seed()).live_station_board();
    Json(SearchEnvelope::ok(
        board,
        "Live station data retrieved successfully",
        "Mock Railway Data Provider",
    ))
}

/// GET /v1/trains/pnr/{pnr}
async fn pnr_status(
    State(state): State<AppState>,
    Path(pnr): Path<String>,
) -> Json<SearchEnvelope<PnrStatus>> {
    state.simulate_latency().await;
    let status = BookingDesk::seeded(state.seed()).pnr_status(&pnr);
    Json(SearchEnvelope::ok(
        vec![status],
        "PNR status retrieved successfully",
        "Mock Railway Data Provider",
    ))
}
