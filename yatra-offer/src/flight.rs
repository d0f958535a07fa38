use crate::combine::{self, duration_minutes, DealsError};
use crate::models::{Combination, Deal, Direction, FlightOffer, FlightSchedule};
use crate::routes::flight_route;
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use yatra_core::currency::{format_inr, parse_inr};
use yatra_core::FlightSearch;

const AIRLINES: [&str; 7] = [
    "Air India",
    "IndiGo",
    "SpiceJet",
    "Vistara",
    "GoAir",
    "AirAsia",
    "Jet Airways",
];

const DEFAULT_ORIGIN: &str = "Delhi";
const DEFAULT_DESTINATION: &str = "Mumbai";

/// Synthesizes flight legs for a search.
///
/// Pure function of the canonical parameters and the owned RNG; no I/O,
/// no failure modes. Unknown city pairs fall back to bounded random
/// durations and fares instead of failing.
pub struct FlightGenerator {
    rng: StdRng,
}

impl FlightGenerator {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Deterministic generator; the seed pins every draw.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn seeded(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Generate outbound legs, plus return legs when the search is a
    /// valid round trip. Outbound legs are sorted by departure time,
    /// return legs by price.
    pub fn generate(&mut self, search: &FlightSearch) -> FlightSchedule {
        let origin = search.origin.as_deref().unwrap_or(DEFAULT_ORIGIN);
        let destination = search.destination.as_deref().unwrap_or(DEFAULT_DESTINATION);
        let departure_date = search
            .departure_date
            .unwrap_or_else(|| Utc::now().date_naive());

        tracing::info!(
            %origin,
            %destination,
            passengers = search.passengers,
            trip_type = ?search.trip_type,
            "generating mock flights"
        );

        let outbound_count = self.rng.gen_range(6..=9);
        let mut outbound = Vec::with_capacity(outbound_count);
        for i in 0..outbound_count {
            outbound.push(self.leg(i, origin, destination, departure_date, Direction::Outbound));
        }
        outbound.sort_by(|a, b| a.departure_time.cmp(&b.departure_time));

        let mut return_flights = Vec::new();
        if let Some(return_date) = search.return_date.filter(|_| search.valid_round_trip) {
            let return_count = self.rng.gen_range(6..=9);
            for i in 0..return_count {
                return_flights.push(self.leg(i, destination, origin, return_date, Direction::Return));
            }
            return_flights.sort_by_key(|f| parse_inr(&f.price));
        }

        FlightSchedule {
            outbound,
            return_flights,
            trip_type: search.trip_type,
        }
    }

    /// Cross-product of the schedule's legs, sorted ascending by total.
    pub fn combine(&mut self, schedule: &FlightSchedule) -> Vec<Combination> {
        combine::combinations(&mut self.rng, &schedule.outbound, &schedule.return_flights)
    }

    pub fn best_deals(&mut self, schedule: &FlightSchedule) -> Result<Vec<Deal>, DealsError> {
        combine::best_deals(&mut self.rng, &schedule.outbound, &schedule.return_flights)
    }

    fn leg(
        &mut self,
        index: usize,
        origin: &str,
        destination: &str,
        date: NaiveDate,
        direction: Direction,
    ) -> FlightOffer {
        let airline = AIRLINES[self.rng.gen_range(0..AIRLINES.len())];
        let code: String = airline.chars().take(2).collect::<String>().to_uppercase();
        let flight_number = format!("{}-{}", code, self.rng.gen_range(100..1000));

        let route = flight_route(origin, destination);
        let depart = self.rng.gen_range(6 * 60..22 * 60);
        let (duration_min, duration) = match route {
            Some(route) => (duration_minutes(route.duration).max(1), route.duration.to_string()),
            None => {
                let minutes = self.rng.gen_range(60..300);
                (minutes, format!("{}h {}m", minutes / 60, minutes % 60))
            }
        };
        let arrive = (depart + duration_min) % (24 * 60);

        let base_price = match route {
            Some(route) => route.base_price,
            None => self.rng.gen_range(3000..5000),
        };
        let mut price = base_price as f64 * self.rng.gen_range(0.8..1.2);
        if direction == Direction::Return {
            // Return fares skew slightly higher.
            price *= self.rng.gen_range(0.9..1.2);
        }

        let prefix = match direction {
            Direction::Outbound => "outbound",
            Direction::Return => "return",
        };

        FlightOffer {
            id: format!("{}-{}", prefix, index + 1),
            airline: airline.to_string(),
            flight_number,
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_time: format!("{:02}:{:02}", depart / 60, depart % 60),
            arrival_time: format!("{:02}:{:02}", arrive / 60, arrive % 60),
            duration,
            price: format_inr(price as u32),
            cabin_class: if self.rng.gen_bool(0.3) { "business" } else { "economy" }.to_string(),
            date,
            direction,
            stops: if self.rng.gen_bool(0.3) { "1 Stop" } else { "Non-stop" }.to_string(),
            baggage: "15 kg included".to_string(),
            refundable: self.rng.gen_bool(0.5),
        }
    }
}

impl Default for FlightGenerator {
    fn default() -> Self {
        Self::new()
    }
}
