use crate::models::{ClassAvailability, TrainOffer};
use crate::routes::{station_code, train_route, STATION_CODES};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use yatra_core::currency::format_inr;
use yatra_core::TrainSearch;

const TRAIN_NAMES: [&str; 7] = [
    "Rajdhani",
    "Shatabdi",
    "Duronto",
    "Jan Shatabdi",
    "Garib Rath",
    "Express",
    "Superfast",
];

const TRAIN_TYPES: [&str; 5] = ["Superfast", "Express", "Passenger", "Local", "Special"];

/// Fare ladder, cheapest first. Generated trains carry a prefix of this
/// ladder, so sleeper is always present.
const CLASS_LADDER: [&str; 6] = ["SL", "3A", "2A", "1A", "CC", "EC"];

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const DEFAULT_ORIGIN: &str = "New Delhi";
const DEFAULT_DESTINATION: &str = "Mumbai Central";

/// Mock live board entry for one station.
#[derive(Debug, Clone, Serialize)]
pub struct StationStatus {
    pub station: &'static str,
    pub code: &'static str,
    pub arrivals: u32,
    pub departures: u32,
    pub delayed: u32,
    pub cancelled: u32,
}

/// Synthesizes train journeys for a search, sorted by departure time.
pub struct TrainGenerator {
    rng: StdRng,
}

impl TrainGenerator {
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

    pub fn generate(&mut self, search: &TrainSearch) -> Vec<TrainOffer> {
        let origin = search.origin.as_deref().unwrap_or(DEFAULT_ORIGIN);
        let destination = search.destination.as_deref().unwrap_or(DEFAULT_DESTINATION);
        let date = search.date.unwrap_or_else(|| Utc::now().date_naive());

        tracing::info!(%origin, %destination, %date, "generating mock trains");

        let route = train_route(origin, destination);
        let distance_km = match route {
            Some(route) => route.distance_km,
            None => self.rng.gen_range(800..2000),
        };

        let count = self.rng.gen_range(8..=12);
        let mut trains = Vec::with_capacity(count);
        for i in 0..count {
            let train_number = (12000 + self.rng.gen_range(0..8000)).to_string();
            let train_name = format!(
                "{} Express",
                TRAIN_NAMES[self.rng.gen_range(0..TRAIN_NAMES.len())]
            );

            // Spread departures across 05:00-23:00 so long result lists
            // do not cluster around one hour.
            let departure_hour = 5 + (i * 18) / count;
            let departure_minute = self.rng.gen_range(0..60);
            let depart = departure_hour * 60 + departure_minute;

            let speed = self.rng.gen_range(60.0..100.0);
            let duration_hours = (distance_km as f64 / speed) as usize;
            let duration_minutes = self.rng.gen_range(0..60);
            let arrive = (depart + duration_hours * 60 + duration_minutes) % (24 * 60);

            trains.push(TrainOffer {
                id: format!("train-{}", i + 1),
                train_name,
                train_number,
                from: origin.to_string(),
                to: destination.to_string(),
                departure_time: format!("{:02}:{:02}", depart / 60, depart % 60),
                arrival_time: format!("{:02}:{:02}", arrive / 60, arrive % 60),
                duration: format!("{}h {}m", duration_hours, duration_minutes),
                distance: format!("{} km", distance_km),
                classes: self.classes(distance_km),
                days: self.running_days(),
                train_type: TRAIN_TYPES[self.rng.gen_range(0..TRAIN_TYPES.len())].to_string(),
                pantry: self.rng.gen_bool(0.7),
                wifi: self.rng.gen_bool(0.5),
                date,
                source_code: station_code(origin).unwrap_or("NDLS").to_string(),
                destination_code: station_code(destination).unwrap_or("BCT").to_string(),
                quota: "GN".to_string(),
                travel_class: CLASS_LADDER[0].to_string(),
            });
        }

        trains.sort_by(|a, b| a.departure_time.cmp(&b.departure_time));
        trains
    }

    /// Mock live board for every known station.
    pub fn live_station_board(&mut self) -> Vec<StationStatus> {
        STATION_CODES
            .iter()
            .map(|&(station, code)| StationStatus {
                station,
                code,
                arrivals: self.rng.gen_range(5..15),
                departures: self.rng.gen_range(8..20),
                delayed: self.rng.gen_range(0..3),
                cancelled: if self.rng.gen_bool(0.1) { 1 } else { 0 },
            })
            .collect()
    }

    /// A prefix of the fare ladder with distance-scaled fares. At least
    /// sleeper and 3A are always offered.
    fn classes(&mut self, distance_km: u32) -> BTreeMap<String, ClassAvailability> {
        let class_count = self.rng.gen_range(2..=5);
        let mut classes = BTreeMap::new();
        for class in &CLASS_LADDER[..class_count] {
            let fare = match *class {
                "SL" => 400 + (distance_km as f64 * 0.3) as u32,
                "3A" => 800 + (distance_km as f64 * 0.6) as u32,
                "2A" => 1200 + (distance_km as f64 * 0.9) as u32,
                "1A" => 2000 + (distance_km as f64 * 1.5) as u32,
                "CC" => 600 + (distance_km as f64 * 0.8) as u32,
                _ => 1000 + (distance_km as f64 * 1.2) as u32,
            };
            classes.insert(
                class.to_string(),
                ClassAvailability {
                    available: self.rng.gen_range(10..210),
                    price: format_inr(fare),
                    waiting_list: if self.rng.gen_bool(0.3) {
                        self.rng.gen_range(0..50)
                    } else {
                        0
                    },
                },
            );
        }
        classes
    }

    fn running_days(&mut self) -> Vec<String> {
        let day_count = self.rng.gen_range(3..=7);
        let mut days: Vec<String> = WEEKDAYS
            .choose_multiple(&mut self.rng, day_count)
            .map(|d| d.to_string())
            .collect();
        days.sort();
        days
    }
}

impl Default for TrainGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yatra_core::currency::parse_inr;
    use yatra_core::TrainQuery;

    fn delhi_mumbai() -> TrainSearch {
        TrainQuery {
            from: Some("New Delhi".to_string()),
            to: Some("Mumbai Central".to_string()),
            date: Some("2025-08-01".to_string()),
        }
        .normalize()
    }

    #[test]
    fn test_departures_non_decreasing_and_classes_present() {
        let mut generator = TrainGenerator::with_seed(31);
        let trains = generator.generate(&delhi_mumbai());

        assert!((8..=12).contains(&trains.len()));
        for pair in trains.windows(2) {
            assert!(pair[0].departure_time <= pair[1].departure_time);
        }
        for train in &trains {
            assert!(train.classes.len() >= 2);
            assert!(train.classes.contains_key("SL"));
            assert!(train.classes.contains_key("3A"));
        }
    }

    #[test]
    fn test_known_route_distance_and_codes() {
        let mut generator = TrainGenerator::with_seed(17);
        for train in generator.generate(&delhi_mumbai()) {
            assert_eq!(train.distance, "1384 km");
            assert_eq!(train.source_code, "NDLS");
            assert_eq!(train.destination_code, "BCT");
        }
    }

    #[test]
    fn test_class_fares_scale_with_comfort() {
        let mut generator = TrainGenerator::with_seed(2);
        for train in generator.generate(&delhi_mumbai()) {
            let sleeper = parse_inr(&train.classes["SL"].price);
            let third_ac = parse_inr(&train.classes["3A"].price);
            assert!(sleeper < third_ac);
            if let Some(first_ac) = train.classes.get("1A") {
                assert!(third_ac < parse_inr(&first_ac.price));
            }
        }
    }

    #[test]
    fn test_unknown_pair_falls_back_to_bounded_distance() {
        let query = TrainQuery {
            from: Some("Panaji".to_string()),
            to: Some("Shillong".to_string()),
            date: None,
        };
        let mut generator = TrainGenerator::with_seed(9);
        let trains = generator.generate(&query.normalize());

        assert!(!trains.is_empty());
        for train in &trains {
            let km: u32 = train
                .distance
                .trim_end_matches(" km")
                .parse()
                .expect("numeric distance");
            assert!((800..2000).contains(&km));
            assert_eq!(train.source_code, "NDLS");
        }
    }

    #[test]
    fn test_running_days_are_distinct_and_sorted() {
        let mut generator = TrainGenerator::with_seed(44);
        for train in generator.generate(&delhi_mumbai()) {
            assert!((3..=7).contains(&train.days.len()));
            let mut sorted = train.days.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted, train.days);
        }
    }
}
