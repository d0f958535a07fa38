use crate::models::InsurancePlan;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use yatra_core::currency::format_inr;
use yatra_core::InsuranceSearch;

const INSURERS: [&str; 8] = [
    "TravelSafe Insurance",
    "SecureJourney",
    "GlobalProtect",
    "SafeTravel Pro",
    "InsureMyTrip",
    "WorldNomads",
    "TravelGuard",
    "Allianz Travel",
];

const PLAN_NAMES: [&str; 9] = [
    "Basic Travel Protection",
    "Comprehensive Travel Shield",
    "Premium Worldwide Coverage",
    "Student Travel Plan",
    "Family Travel Package",
    "Business Travel Insurance",
    "Adventure Sports Coverage",
    "Cruise Travel Protection",
    "Senior Citizen Plan",
];

const FEATURES: [&str; 18] = [
    "Medical Emergency Coverage",
    "Trip Cancellation",
    "Trip Interruption",
    "Baggage Loss Protection",
    "Flight Delay Compensation",
    "Emergency Evacuation",
    "Personal Liability",
    "Adventure Sports Coverage",
    "Business Equipment",
    "Rental Car Coverage",
    "24/7 Customer Support",
    "Pre-existing Medical Conditions",
    "Terrorism Coverage",
    "Natural Disaster Protection",
    "Missed Connection",
    "Emergency Cash Advance",
    "Legal Assistance",
    "Pet Coverage",
];

const BASE_COVERAGE: f64 = 200_000.0;
const BASE_PREMIUM: f64 = 800.0;

/// Synthesizes insurance plans for a trip, sorted by rating descending.
///
/// Premiums scale with the destination region (keyword match on the
/// free-form destination string), traveller age, and trip length.
pub struct InsuranceGenerator {
    rng: StdRng,
}

impl InsuranceGenerator {
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

    pub fn generate(&mut self, search: &InsuranceSearch) -> Vec<InsurancePlan> {
        let destination = search.destination.as_deref().unwrap_or("Worldwide");
        let keywords = destination.to_lowercase();

        tracing::info!(
            %destination,
            travelers = search.travelers,
            age = ?search.age,
            "generating mock insurance quotes"
        );

        let mut base_coverage = BASE_COVERAGE;
        let mut base_premium = BASE_PREMIUM;
        if keywords.contains("usa") || keywords.contains("europe") {
            base_coverage *= 5.0;
            base_premium *= 3.0;
        } else if keywords.contains("asia") || keywords.contains("international") {
            base_coverage *= 2.5;
            base_premium *= 2.0;
        }

        match search.age {
            Some(age) if age > 60 => base_premium *= 1.5,
            Some(age) if age < 25 => base_premium *= 0.8,
            _ => {}
        }

        if let (Some(start), Some(end)) = (search.start_date, search.end_date) {
            let trip_days = (end - start).num_days();
            base_premium *= (trip_days as f64 / 15.0).max(1.0);
        }

        let regions: Vec<String> = if keywords.contains("domestic") {
            vec!["Domestic".to_string()]
        } else if keywords.contains("usa") {
            vec!["Worldwide".to_string(), "Including USA".to_string()]
        } else {
            vec!["Worldwide".to_string(), "Excluding USA".to_string()]
        };

        let age_limit = match search.age {
            Some(age) => format!(
                "{}-{} years",
                age.saturating_sub(10).max(18),
                (age + 20).min(80)
            ),
            None => "18-75 years".to_string(),
        };

        let count = self.rng.gen_range(6..=8);
        let mut plans = Vec::with_capacity(count);
        for i in 0..count {
            let coverage = (base_coverage + self.rng.gen_range(0.0..0.5) * base_coverage) as u32;
            let premium = (base_premium + self.rng.gen_range(0.0..0.4) * base_premium) as u32;
            let discount = self.rng.gen_range(15..40);
            let original_premium = (premium as f64 / (1.0 - discount as f64 / 100.0)) as u32;

            let feature_count = self.rng.gen_range(5..=12);
            let features: Vec<String> = FEATURES
                .choose_multiple(&mut self.rng, feature_count)
                .map(|f| f.to_string())
                .collect();

            let premium_display = format_inr(premium);
            let original_display = format_inr(original_premium);
            plans.push(InsurancePlan {
                id: format!("insurance-{}", i + 1),
                provider: INSURERS[self.rng.gen_range(0..INSURERS.len())].to_string(),
                plan_name: PLAN_NAMES[self.rng.gen_range(0..PLAN_NAMES.len())].to_string(),
                coverage: format_inr(coverage),
                premium: premium_display.clone(),
                price: premium_display,
                original_premium: original_display.clone(),
                original_price: original_display,
                discount: format!("{discount}% off"),
                features,
                duration: if search.long_term {
                    "Up to 365 days"
                } else {
                    "Up to 90 days"
                }
                .to_string(),
                regions: regions.clone(),
                age_limit: age_limit.clone(),
                rating: round1(self.rng.gen_range(3.8..5.0)),
                claim_ratio: format!("{}%", self.rng.gen_range(85..100)),
                popular: i == 1,
                travelers: search.travelers,
                destination: destination.to_string(),
            });
        }

        plans.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        plans
    }
}

impl Default for InsuranceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
