use crate::models::HotelOffer;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use yatra_core::currency::format_inr;
use yatra_core::HotelSearch;

const HOTEL_CHAINS: [&str; 8] = [
    "Taj Hotels",
    "ITC Hotels",
    "Oberoi Hotels",
    "Leela Palaces",
    "Radisson",
    "Hyatt",
    "Marriott",
    "Hilton",
];

/// Full amenity catalogue; each hotel samples a distinct subset.
pub const AMENITIES: [&str; 20] = [
    "WiFi",
    "Pool",
    "Gym",
    "Restaurant",
    "Spa",
    "Room Service",
    "Parking",
    "Business Center",
    "Airport Shuttle",
    "Beach Access",
    "Garden",
    "Bar",
    "Conference Rooms",
    "Laundry",
    "Concierge",
    "Pet Friendly",
    "24/7 Front Desk",
    "Elevator",
    "AC",
    "Balcony",
];

const ROOM_TYPES: [&str; 10] = [
    "Standard Room",
    "Deluxe Room",
    "Suite",
    "Executive Room",
    "Presidential Suite",
    "Family Room",
    "Twin Room",
    "Single Room",
    "Penthouse",
    "Villa",
];

/// Synthesizes hotel stays for a search, sorted by rating descending.
pub struct HotelGenerator {
    rng: StdRng,
}

impl HotelGenerator {
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

    pub fn generate(&mut self, search: &HotelSearch) -> Vec<HotelOffer> {
        let destination = search.destination.as_deref();

        tracing::info!(
            destination = destination.unwrap_or("City"),
            guests = search.guests,
            rooms = search.rooms,
            "generating mock hotels"
        );

        let count = self.rng.gen_range(8..=12);
        let mut hotels = Vec::with_capacity(count);
        for i in 0..count {
            let base_price = self.rng.gen_range(2000..10000);
            let discount = self.rng.gen_range(15..40);
            let original_price = (base_price as f64 / (1.0 - discount as f64 / 100.0)) as u32;
            let rating = round1(self.rng.gen_range(3.5..5.0));

            let amenity_count = self.rng.gen_range(4..10);
            let amenities: Vec<String> = AMENITIES
                .choose_multiple(&mut self.rng, amenity_count)
                .map(|a| a.to_string())
                .collect();

            let chain = HOTEL_CHAINS[self.rng.gen_range(0..HOTEL_CHAINS.len())];
            let room_type = ROOM_TYPES[self.rng.gen_range(0..ROOM_TYPES.len())];
            let suffix = if room_type.contains("Suite") { "Suites" } else { "Hotel" };

            hotels.push(HotelOffer {
                id: format!("hotel-{}", i + 1),
                name: format!("{} {} {}", chain, destination.unwrap_or("City"), suffix),
                location: destination.unwrap_or("City Center").to_string(),
                rating,
                price: format_inr(base_price),
                original_price: format_inr(original_price),
                discount: format!("{discount}% off"),
                amenities,
                description: format!(
                    "Premium {} accommodation in {}",
                    room_type.to_lowercase(),
                    destination.unwrap_or("the city")
                ),
                image: format!(
                    "https://images.unsplash.com/photo-{}?w=400",
                    1566073771259u64 + i as u64
                ),
                availability: if self.rng.gen_bool(0.9) {
                    "Available"
                } else {
                    "Limited Availability"
                }
                .to_string(),
                room_type: room_type.to_string(),
                check_in: search.check_in,
                check_out: search.check_out,
                guests: search.guests,
                rooms: search.rooms,
                cancellation: if self.rng.gen_bool(0.7) {
                    "Free Cancellation"
                } else {
                    "Non-Refundable"
                }
                .to_string(),
                breakfast: if self.rng.gen_bool(0.5) {
                    "Breakfast Included"
                } else {
                    "Breakfast Available"
                }
                .to_string(),
                distance: format!("{:.1} km from city center", self.rng.gen_range(0.0..10.0)),
            });
        }

        hotels.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        hotels
    }
}

impl Default for HotelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use yatra_core::currency::parse_inr;
    use yatra_core::HotelQuery;

    fn goa_search() -> HotelSearch {
        HotelQuery {
            destination: Some("Goa".to_string()),
            check_in: Some("2025-08-01".to_string()),
            check_out: Some("2025-08-04".to_string()),
            guests: Some(2),
            rooms: Some(1),
        }
        .normalize()
    }

    #[test]
    fn test_count_band_and_rating_order() {
        let mut generator = HotelGenerator::with_seed(21);
        let hotels = generator.generate(&goa_search());

        assert!((8..=12).contains(&hotels.len()));
        for pair in hotels.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
        for hotel in &hotels {
            assert!((3.5..=5.0).contains(&hotel.rating));
        }
    }

    #[test]
    fn test_amenities_are_distinct_and_bounded() {
        let mut generator = HotelGenerator::with_seed(8);
        for hotel in generator.generate(&goa_search()) {
            assert!((4..=9).contains(&hotel.amenities.len()));
            let unique: HashSet<_> = hotel.amenities.iter().collect();
            assert_eq!(unique.len(), hotel.amenities.len());
        }
    }

    #[test]
    fn test_discounted_price_stays_below_original() {
        let mut generator = HotelGenerator::with_seed(5);
        for hotel in generator.generate(&goa_search()) {
            let price = parse_inr(&hotel.price);
            let original = parse_inr(&hotel.original_price);
            assert!(price > 0);
            assert!(original > price);
        }
    }

    #[test]
    fn test_missing_destination_defaults() {
        let mut generator = HotelGenerator::with_seed(13);
        let hotels = generator.generate(&HotelQuery::default().normalize());

        assert!(!hotels.is_empty());
        for hotel in &hotels {
            assert_eq!(hotel.location, "City Center");
            assert!(hotel.name.contains("City"));
            assert_eq!(hotel.guests, 2);
            assert_eq!(hotel.rooms, 1);
        }
    }
}
