//! Known-route lookup tables.
//!
//! A handful of real city and station pairs carry plausible durations,
//! distances, and base fares; anything off these tables falls back to the
//! generators' bounded random bands.

use serde::Serialize;

pub struct FlightRoute {
    pub from: &'static str,
    pub to: &'static str,
    pub duration: &'static str,
    pub base_price: u32,
}

pub const FLIGHT_ROUTES: [FlightRoute; 6] = [
    FlightRoute { from: "Delhi", to: "Bangalore", duration: "2h 45m", base_price: 3500 },
    FlightRoute { from: "Mumbai", to: "Chennai", duration: "2h 15m", base_price: 4200 },
    FlightRoute { from: "Kolkata", to: "Pune", duration: "2h 30m", base_price: 3800 },
    FlightRoute { from: "Hyderabad", to: "Goa", duration: "1h 45m", base_price: 3200 },
    FlightRoute { from: "Ahmedabad", to: "Jaipur", duration: "1h 20m", base_price: 2800 },
    FlightRoute { from: "Kochi", to: "Trivandrum", duration: "0h 45m", base_price: 2200 },
];

/// Exact (case-insensitive) city-pair lookup.
pub fn flight_route(from: &str, to: &str) -> Option<&'static FlightRoute> {
    FLIGHT_ROUTES
        .iter()
        .find(|r| r.from.eq_ignore_ascii_case(from) && r.to.eq_ignore_ascii_case(to))
}

pub struct TrainRoute {
    pub from: &'static str,
    pub to: &'static str,
    pub distance_km: u32,
    pub duration: &'static str,
}

pub const TRAIN_ROUTES: [TrainRoute; 6] = [
    TrainRoute { from: "New Delhi", to: "Mumbai Central", distance_km: 1384, duration: "15h 40m" },
    TrainRoute { from: "New Delhi", to: "Chennai Central", distance_km: 2180, duration: "28h 15m" },
    TrainRoute { from: "New Delhi", to: "Kolkata", distance_km: 1458, duration: "17h 15m" },
    TrainRoute { from: "Mumbai Central", to: "Chennai Central", distance_km: 1279, duration: "21h 45m" },
    TrainRoute { from: "Bangalore", to: "New Delhi", distance_km: 2444, duration: "34h 20m" },
    TrainRoute { from: "Hyderabad", to: "Mumbai Central", distance_km: 711, duration: "13h 30m" },
];

/// Substring station-pair lookup, so "Delhi" still matches "New Delhi".
pub fn train_route(from: &str, to: &str) -> Option<&'static TrainRoute> {
    let from = from.to_lowercase();
    let to = to.to_lowercase();
    TRAIN_ROUTES
        .iter()
        .find(|r| r.from.to_lowercase().contains(&from) && r.to.to_lowercase().contains(&to))
}

pub const STATION_CODES: [(&str, &str); 10] = [
    ("New Delhi", "NDLS"),
    ("Mumbai Central", "BCT"),
    ("Chennai Central", "MAS"),
    ("Kolkata", "HWH"),
    ("Bangalore", "SBC"),
    ("Hyderabad", "HYB"),
    ("Pune", "PUNE"),
    ("Ahmedabad", "ADI"),
    ("Jaipur", "JP"),
    ("Lucknow", "LKO"),
];

pub fn station_code(station: &str) -> Option<&'static str> {
    STATION_CODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(station))
        .map(|(_, code)| *code)
}

#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    pub city: &'static str,
    pub code: &'static str,
    pub country: &'static str,
}

pub const POPULAR_DESTINATIONS: [Destination; 8] = [
    Destination { city: "Mumbai", code: "BOM", country: "India" },
    Destination { city: "Delhi", code: "DEL", country: "India" },
    Destination { city: "Bangalore", code: "BLR", country: "India" },
    Destination { city: "Chennai", code: "MAA", country: "India" },
    Destination { city: "Kolkata", code: "CCU", country: "India" },
    Destination { city: "Hyderabad", code: "HYD", country: "India" },
    Destination { city: "Pune", code: "PNQ", country: "India" },
    Destination { city: "Goa", code: "GOI", country: "India" },
];
