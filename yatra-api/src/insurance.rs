use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use yatra_core::{InsuranceQuery, SearchEnvelope};
use yatra_offer::models::InsurancePlan;
use yatra_offer::InsuranceGenerator;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/insurance/quotes", post(quotes))
}

/// POST /v1/insurance/quotes
async fn quotes(
    State(state): State<AppState>,
    body: Result<Json<InsuranceQuery>, JsonRejection>,
) -> Result<Json<SearchEnvelope<InsurancePlan>>, AppError> {
    let Json(query) = body?;
    let search = query.normalize();

    state.simulate_latency().await;

    let plans = InsuranceGenerator::seeded(state.seed()).generate(&search);
    Ok(Json(
        SearchEnvelope::ok(
            plans,
            "Mock insurance quotes loaded successfully",
            "Mock Insurance Data Provider",
        )
        .with_params(&search),
    ))
}
