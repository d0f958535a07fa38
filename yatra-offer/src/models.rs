use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use yatra_core::TripType;

/// Leg direction within a flight search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outbound,
    Return,
}

/// A single generated flight leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    /// Zero-padded 24h `"HH:MM"`; lexicographic order is chronological.
    pub departure_time: String,
    pub arrival_time: String,
    /// `"<N>h <M>m"` as rendered to the user.
    pub duration: String,
    pub price: String,
    #[serde(rename = "class")]
    pub cabin_class: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub direction: Direction,
    pub stops: String,
    pub baggage: String,
    pub refundable: bool,
}

/// Outbound and (for valid round trips) return legs of one search call.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSchedule {
    pub outbound: Vec<FlightOffer>,
    pub return_flights: Vec<FlightOffer>,
    /// The trip type actually generated; an invalid round trip request
    /// downgrades to one-way before this point.
    pub trip_type: TripType,
}

impl FlightSchedule {
    pub fn total(&self) -> usize {
        self.outbound.len() + self.return_flights.len()
    }
}

/// One outbound/return pairing with its combined price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    pub id: String,
    pub outbound: FlightOffer,
    #[serde(rename = "return")]
    pub return_flight: FlightOffer,
    pub total_price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
    #[serde(rename = "type")]
    pub trip_type: TripType,
}

/// A highlighted combination from the best-deals pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub outbound: FlightOffer,
    #[serde(rename = "return")]
    pub return_flight: FlightOffer,
    pub total_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<String>,
    pub deal_type: &'static str,
    pub savings: u32,
}

/// A single generated hotel stay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOffer {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub price: String,
    pub original_price: String,
    pub discount: String,
    pub amenities: Vec<String>,
    pub description: String,
    pub image: String,
    pub availability: String,
    pub room_type: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub rooms: u32,
    pub cancellation: String,
    pub breakfast: String,
    pub distance: String,
}

/// Seat state for one train class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAvailability {
    pub available: u32,
    pub price: String,
    pub waiting_list: u32,
}

/// A single generated train journey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainOffer {
    pub id: String,
    pub train_name: String,
    pub train_number: String,
    pub from: String,
    pub to: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub distance: String,
    pub classes: BTreeMap<String, ClassAvailability>,
    pub days: Vec<String>,
    #[serde(rename = "type")]
    pub train_type: String,
    pub pantry: bool,
    pub wifi: bool,
    pub date: NaiveDate,
    pub source_code: String,
    pub destination_code: String,
    pub quota: String,
    pub travel_class: String,
}

/// A single generated insurance plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePlan {
    pub id: String,
    pub provider: String,
    pub plan_name: String,
    pub coverage: String,
    pub premium: String,
    /// Duplicate of `premium` kept for callers that read `price`
    /// uniformly across domains.
    pub price: String,
    pub original_premium: String,
    pub original_price: String,
    pub discount: String,
    pub features: Vec<String>,
    pub duration: String,
    pub regions: Vec<String>,
    pub age_limit: String,
    pub rating: f64,
    pub claim_ratio: String,
    pub popular: bool,
    pub travelers: u32,
    pub destination: String,
}
