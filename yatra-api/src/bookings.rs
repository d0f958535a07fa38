use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use yatra_offer::booking::{
    FlightBooking, HotelBooking, Passenger, PolicyConfirmation, RoundTripBooking, TrainBooking,
};
use yatra_offer::models::{Combination, FlightOffer, HotelOffer, InsurancePlan, TrainOffer};
use yatra_offer::BookingDesk;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings/flight", post(book_flight))
        .route("/v1/bookings/flight/round-trip", post(book_round_trip))
        .route("/v1/bookings/hotel", post(book_hotel))
        .route("/v1/bookings/train", post(book_train))
        .route("/v1/bookings/insurance", post(purchase_insurance))
}

/// Booking confirmations carry a single record, not an offer list, so
/// they use this narrower wrapper instead of the search envelope.
#[derive(Debug, Serialize)]
struct BookingEnvelope<T> {
    success: bool,
    data: T,
    message: String,
}

impl<T: Serialize> BookingEnvelope<T> {
    fn confirmed(data: T, message: impl Into<String>) -> Self {
        Self { success: true, data, message: message.into() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlightBookingRequest {
    flight: FlightOffer,
    #[serde(default)]
    passengers: Vec<Passenger>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoundTripBookingRequest {
    combination: Combination,
    #[serde(default)]
    passengers: Vec<Passenger>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HotelBookingRequest {
    hotel: HotelOffer,
    #[serde(default)]
    guests: Vec<Passenger>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrainBookingRequest {
    train: TrainOffer,
    #[serde(default)]
    travel_class: Option<String>,
    #[serde(default)]
    passengers: Vec<Passenger>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsurancePurchaseRequest {
    plan: InsurancePlan,
    #[serde(default)]
    travellers: Vec<Passenger>,
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    end_date: Option<NaiveDate>,
}

/// POST /v1/bookings/flight
async fn book_flight(
    State(state): State<AppState>,
    body: Result<Json<FlightBookingRequest>, JsonRejection>,
) -> Result<Json<BookingEnvelope<FlightBooking>>, AppError> {
    let Json(req) = body?;
    state.simulate_latency().await;

    let booking = BookingDesk::seeded(state.seed()).book_flight(&req.flight, req.passengers);
    tracing::info!(booking_id = %booking.booking_id, pnr = %booking.pnr, "flight booked");
    Ok(Json(BookingEnvelope::confirmed(booking, "Flight booked successfully")))
}

/// POST /v1/bookings/flight/round-trip
async fn book_round_trip(
    State(state): State<AppState>,
    body: Result<Json<RoundTripBookingRequest>, JsonRejection>,
) -> Result<Json<BookingEnvelope<RoundTripBooking>>, AppError> {
    let Json(req) = body?;
    state.simulate_latency().await;

    let booking =
        BookingDesk::seeded(state.seed()).book_round_trip(&req.combination, req.passengers);
    tracing::info!(booking_id = %booking.booking_id, "round trip booked");
    Ok(Json(BookingEnvelope::confirmed(
        booking,
        "Round trip flights booked successfully",
    )))
}

/// POST /v1/bookings/hotel
async fn book_hotel(
    State(state): State<AppState>,
    body: Result<Json<HotelBookingRequest>, JsonRejection>,
) -> Result<Json<BookingEnvelope<HotelBooking>>, AppError> {
    let Json(req) = body?;
    state.simulate_latency().await;

    let booking = BookingDesk::seeded(state.seed()).book_hotel(&req.hotel, req.guests);
    tracing::info!(booking_id = %booking.booking_id, "hotel booked");
    Ok(Json(BookingEnvelope::confirmed(booking, "Hotel booked successfully")))
}

/// POST /v1/bookings/train
async fn book_train(
    State(state): State<AppState>,
    body: Result<Json<TrainBookingRequest>, JsonRejection>,
) -> Result<Json<BookingEnvelope<TrainBooking>>, AppError> {
    let Json(req) = body?;
    state.simulate_latency().await;

    let booking = BookingDesk::seeded(state.seed()).book_train(
        &req.train,
        req.travel_class.as_deref(),
        req.passengers,
    );
    tracing::info!(booking_id = %booking.booking_id, pnr = %booking.pnr, "train booked");
    Ok(Json(BookingEnvelope::confirmed(booking, "Train ticket booked successfully")))
}

/// POST /v1/bookings/insurance
async fn purchase_insurance(
    State(state): State<AppState>,
    body: Result<Json<InsurancePurchaseRequest>, JsonRejection>,
) -> Result<Json<BookingEnvelope<PolicyConfirmation>>, AppError> {
    let Json(req) = body?;
    state.simulate_latency().await;

    let policy = BookingDesk::seeded(state.seed()).purchase_insurance(
        &req.plan,
        req.travellers,
        req.start_date,
        req.end_date,
    );
    tracing::info!(policy_id = %policy.policy_id, "insurance purchased");
    Ok(Json(BookingEnvelope::confirmed(
        policy,
        "Insurance policy purchased successfully",
    )))
}
