//! Mock booking desk.
//!
//! Every booking succeeds and returns a synthesized confirmation record;
//! nothing is persisted anywhere. Totals are recomputed from the offer's
//! formatted price via the pricing helpers, never trusted from input.

use crate::models::{Combination, FlightOffer, HotelOffer, InsurancePlan, TrainOffer};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use yatra_core::currency::{compute_total, format_inr};

/// Traveller details supplied at booking time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightBooking {
    pub booking_id: Uuid,
    pub pnr: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub status: &'static str,
    pub flight: FlightOffer,
    pub passengers: Vec<Passenger>,
    pub booking_date: DateTime<Utc>,
    pub total_amount: String,
    pub payment_status: &'static str,
}

/// One confirmed leg of a round trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegConfirmation {
    pub flight: FlightOffer,
    pub pnr: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundTripBooking {
    pub booking_id: Uuid,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub status: &'static str,
    pub outbound: LegConfirmation,
    #[serde(rename = "return")]
    pub return_leg: LegConfirmation,
    pub passengers: Vec<Passenger>,
    pub booking_date: DateTime<Utc>,
    pub total_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
    pub payment_status: &'static str,
    pub combination_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelBooking {
    pub booking_id: Uuid,
    pub confirmation_number: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub status: &'static str,
    pub hotel: HotelOffer,
    pub guests: Vec<Passenger>,
    pub booking_date: DateTime<Utc>,
    pub total_amount: String,
    pub payment_status: &'static str,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainBooking {
    pub booking_id: Uuid,
    pub pnr: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub status: &'static str,
    pub train: TrainOffer,
    pub passengers: Vec<Passenger>,
    pub booking_date: DateTime<Utc>,
    pub journey_date: NaiveDate,
    pub total_amount: String,
    pub payment_status: &'static str,
    pub seat: u32,
    pub coach: String,
    pub quota: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfirmation {
    pub policy_id: Uuid,
    pub policy_number: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub status: &'static str,
    pub plan: InsurancePlan,
    pub travellers: Vec<Passenger>,
    pub purchase_date: DateTime<Utc>,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub total_amount: String,
    pub payment_status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrStatus {
    pub pnr: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    pub checked_at: DateTime<Utc>,
}

/// Mock booking desk. Stateless between calls apart from its RNG.
pub struct BookingDesk {
    rng: StdRng,
}

impl BookingDesk {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn seeded(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn book_flight(&mut self, flight: &FlightOffer, passengers: Vec<Passenger>) -> FlightBooking {
        let total = compute_total(Some(&flight.price), passengers.len().max(1) as u32);
        FlightBooking {
            booking_id: Uuid::new_v4(),
            pnr: self.reference(6),
            kind: "flight",
            status: "confirmed",
            flight: flight.clone(),
            passengers,
            booking_date: Utc::now(),
            total_amount: format_inr(total),
            payment_status: "paid",
        }
    }

    pub fn book_round_trip(
        &mut self,
        combination: &Combination,
        passengers: Vec<Passenger>,
    ) -> RoundTripBooking {
        let total = compute_total(Some(&combination.total_price), passengers.len().max(1) as u32);
        RoundTripBooking {
            booking_id: Uuid::new_v4(),
            kind: "round-trip-flight",
            status: "confirmed",
            outbound: LegConfirmation {
                flight: combination.outbound.clone(),
                pnr: self.reference(6),
                status: "confirmed",
            },
            return_leg: LegConfirmation {
                flight: combination.return_flight.clone(),
                pnr: self.reference(6),
                status: "confirmed",
            },
            passengers,
            booking_date: Utc::now(),
            total_amount: format_inr(total),
            savings: combination.savings.clone(),
            payment_status: "paid",
            combination_id: combination.id.clone(),
        }
    }

    pub fn book_hotel(&mut self, hotel: &HotelOffer, guests: Vec<Passenger>) -> HotelBooking {
        // Hotel rates are per room, not per guest.
        let total = compute_total(Some(&hotel.price), hotel.rooms.max(1));
        HotelBooking {
            booking_id: Uuid::new_v4(),
            confirmation_number: self.reference(8),
            kind: "hotel",
            status: "confirmed",
            hotel: hotel.clone(),
            guests,
            booking_date: Utc::now(),
            total_amount: format_inr(total),
            payment_status: "paid",
            check_in: hotel.check_in,
            check_out: hotel.check_out,
        }
    }

    pub fn book_train(
        &mut self,
        train: &TrainOffer,
        travel_class: Option<&str>,
        passengers: Vec<Passenger>,
    ) -> TrainBooking {
        let class = travel_class.unwrap_or(&train.travel_class);
        let fare = train
            .classes
            .get(class)
            .map(|c| c.price.as_str())
            .unwrap_or("₹755");
        let total = compute_total(Some(fare), passengers.len().max(1) as u32);
        TrainBooking {
            booking_id: Uuid::new_v4(),
            pnr: self.rng.gen_range(1_000_000_000u64..10_000_000_000).to_string(),
            kind: "train",
            status: "confirmed",
            train: train.clone(),
            passengers,
            booking_date: Utc::now(),
            journey_date: train.date,
            total_amount: format_inr(total),
            payment_status: "paid",
            seat: self.rng.gen_range(1..=72),
            coach: format!("S{}", self.rng.gen_range(1..=12)),
            quota: "GN",
        }
    }

    pub fn purchase_insurance(
        &mut self,
        plan: &InsurancePlan,
        travellers: Vec<Passenger>,
        valid_from: Option<NaiveDate>,
        valid_to: Option<NaiveDate>,
    ) -> PolicyConfirmation {
        let total = compute_total(Some(&plan.premium), travellers.len().max(1) as u32);
        let valid_from = valid_from.unwrap_or_else(|| Utc::now().date_naive());
        let valid_to = valid_to.unwrap_or(valid_from + Duration::days(90));
        PolicyConfirmation {
            policy_id: Uuid::new_v4(),
            policy_number: format!("POL{}", self.reference(8)),
            kind: "travel-insurance",
            status: "active",
            plan: plan.clone(),
            travellers,
            purchase_date: Utc::now(),
            valid_from,
            valid_to,
            total_amount: format_inr(total),
            payment_status: "paid",
        }
    }

    pub fn pnr_status(&mut self, pnr: &str) -> PnrStatus {
        const STATUSES: [&str; 4] = ["CNF", "WL", "RAC", "CAN"];
        let status = STATUSES[self.rng.gen_range(0..STATUSES.len())];
        PnrStatus {
            pnr: pnr.to_string(),
            status,
            seat: (status == "CNF").then(|| {
                format!(
                    "S{}-{}",
                    self.rng.gen_range(1..=12u32),
                    self.rng.gen_range(1..=72u32)
                )
            }),
            checked_at: Utc::now(),
        }
    }

    fn reference(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect::<String>()
            .to_uppercase()
    }
}

impl Default for BookingDesk {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::FlightGenerator;
    use crate::train::TrainGenerator;
    use yatra_core::currency::parse_inr;
    use yatra_core::{FlightQuery, TrainQuery};

    fn passengers(n: usize) -> Vec<Passenger> {
        (0..n)
            .map(|i| Passenger { name: format!("Passenger {}", i + 1), age: Some(30) })
            .collect()
    }

    #[test]
    fn test_flight_booking_total_scales_with_passengers() {
        let (search, _) = FlightQuery::default().normalize();
        let schedule = FlightGenerator::with_seed(1).generate(&search);
        let flight = &schedule.outbound[0];

        let mut desk = BookingDesk::with_seed(1);
        let booking = desk.book_flight(flight, passengers(3));

        assert_eq!(booking.status, "confirmed");
        assert_eq!(booking.pnr.len(), 6);
        assert_eq!(
            parse_inr(&booking.total_amount),
            parse_inr(&flight.price) * 3
        );
    }

    #[test]
    fn test_round_trip_booking_carries_both_pnrs() {
        let query = FlightQuery {
            departure_date: Some("2025-08-01".to_string()),
            return_date: Some("2025-08-05".to_string()),
            ..Default::default()
        };
        let (search, _) = query.normalize();
        let mut generator = FlightGenerator::with_seed(2);
        let schedule = generator.generate(&search);
        let combinations = generator.combine(&schedule);

        let mut desk = BookingDesk::with_seed(2);
        let booking = desk.book_round_trip(&combinations[0], passengers(2));

        assert_eq!(booking.kind, "round-trip-flight");
        assert_ne!(booking.outbound.pnr, booking.return_leg.pnr);
        assert_eq!(
            parse_inr(&booking.total_amount),
            parse_inr(&combinations[0].total_price) * 2
        );
    }

    #[test]
    fn test_train_booking_uses_selected_class_fare() {
        let search = TrainQuery::default().normalize();
        let trains = TrainGenerator::with_seed(3).generate(&search);
        let train = &trains[0];

        let mut desk = BookingDesk::with_seed(3);
        let booking = desk.book_train(train, Some("3A"), passengers(1));

        assert_eq!(booking.pnr.len(), 10);
        assert!((1..=72).contains(&booking.seat));
        assert_eq!(
            parse_inr(&booking.total_amount),
            parse_inr(&train.classes["3A"].price)
        );
    }

    #[test]
    fn test_unknown_class_falls_back_to_sleeper_floor_fare() {
        let search = TrainQuery::default().normalize();
        let trains = TrainGenerator::with_seed(4).generate(&search);

        let mut desk = BookingDesk::with_seed(4);
        let booking = desk.book_train(&trains[0], Some("EC"), passengers(1));
        if !trains[0].classes.contains_key("EC") {
            assert_eq!(parse_inr(&booking.total_amount), 755);
        }
    }

    #[test]
    fn test_policy_validity_window_defaults_to_90_days() {
        let plans = crate::insurance::InsuranceGenerator::with_seed(5)
            .generate(&yatra_core::InsuranceQuery::default().normalize());

        let mut desk = BookingDesk::with_seed(5);
        let policy = desk.purchase_insurance(&plans[0], passengers(1), None, None);

        assert_eq!(policy.status, "active");
        assert!(policy.policy_number.starts_with("POL"));
        assert_eq!(policy.valid_to - policy.valid_from, Duration::days(90));
    }

    #[test]
    fn test_pnr_status_has_seat_only_when_confirmed() {
        let mut desk = BookingDesk::with_seed(6);
        for _ in 0..20 {
            let status = desk.pnr_status("1234567890");
            assert_eq!(status.seat.is_some(), status.status == "CNF");
        }
    }
}
