//! Round-trip combination and best-deal selection.

use crate::models::{Combination, Deal, FlightOffer};
use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;
use yatra_core::currency::{format_inr, parse_inr};
use yatra_core::TripType;

static DURATION_RE: OnceLock<Regex> = OnceLock::new();

/// Minutes in a `"<N>h <M>m"` duration string; anything else is 0.
pub fn duration_minutes(duration: &str) -> u32 {
    let re = DURATION_RE
        .get_or_init(|| Regex::new(r"(\d+)h\s*(\d+)m").expect("duration pattern is valid"));
    match re.captures(duration) {
        Some(caps) => {
            let hours: u32 = caps[1].parse().unwrap_or(0);
            let minutes: u32 = caps[2].parse().unwrap_or(0);
            hours * 60 + minutes
        }
        None => 0,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DealsError {
    #[error("No return flights available for the selected route")]
    NoReturnFlights,
}

/// Full outbound x return cross product, each pair priced as the sum of
/// its parsed leg prices, sorted ascending by total.
///
/// O(n*m); both sides are capped at 9 by the generator, so the product
/// never exceeds 81 combinations.
pub fn combinations<R: Rng>(
    rng: &mut R,
    outbound: &[FlightOffer],
    returns: &[FlightOffer],
) -> Vec<Combination> {
    let mut combos = Vec::with_capacity(outbound.len() * returns.len());
    for out in outbound {
        for ret in returns {
            let total = parse_inr(&out.price) + parse_inr(&ret.price);
            let savings = rng.gen_bool(0.3).then(|| format_inr(total / 20));
            combos.push(Combination {
                id: format!("combo-{}-{}", out.id, ret.id),
                outbound: out.clone(),
                return_flight: ret.clone(),
                total_price: format_inr(total),
                savings,
                trip_type: TripType::RoundTrip,
            });
        }
    }
    combos.sort_by_key(|c| parse_inr(&c.total_price));
    combos
}

const VALUE_TAGS: [&str; 3] = ["Great Value", "Popular Choice", "Recommended"];

/// Single pass over the cross product tracking the cheapest and the
/// shortest combination, then up to three sampled value pairings. The
/// cheapest deal always comes first.
pub fn best_deals<R: Rng>(
    rng: &mut R,
    outbound: &[FlightOffer],
    returns: &[FlightOffer],
) -> Result<Vec<Deal>, DealsError> {
    if outbound.is_empty() || returns.is_empty() {
        return Err(DealsError::NoReturnFlights);
    }

    let mut best_price: Option<(u32, usize, usize)> = None;
    let mut best_duration: Option<(u32, usize, usize)> = None;
    for (i, out) in outbound.iter().enumerate() {
        for (j, ret) in returns.iter().enumerate() {
            let total = parse_inr(&out.price) + parse_inr(&ret.price);
            let minutes = duration_minutes(&out.duration) + duration_minutes(&ret.duration);
            if best_price.map_or(true, |(p, _, _)| total < p) {
                best_price = Some((total, i, j));
            }
            if best_duration.map_or(true, |(d, _, _)| minutes < d) {
                best_duration = Some((minutes, i, j));
            }
        }
    }

    let tagged = |i: usize, j: usize, deal_type: &'static str| -> Deal {
        let out = &outbound[i];
        let ret = &returns[j];
        let total = parse_inr(&out.price) + parse_inr(&ret.price);
        let minutes = duration_minutes(&out.duration) + duration_minutes(&ret.duration);
        Deal {
            id: format!("deal-{}-{}", out.id, ret.id),
            outbound: out.clone(),
            return_flight: ret.clone(),
            total_price: format_inr(total),
            total_duration: Some(format!("{}h {}m", minutes / 60, minutes % 60)),
            deal_type,
            savings: total * 3 / 100,
        }
    };

    let mut deals = Vec::new();
    if let Some((_, i, j)) = best_price {
        deals.push(tagged(i, j, "Best Price"));
    }
    if let Some((_, i, j)) = best_duration {
        let candidate = tagged(i, j, "Shortest Duration");
        if deals.first().map_or(true, |first| first.id != candidate.id) {
            deals.push(candidate);
        }
    }

    for (index, out) in outbound.iter().take(VALUE_TAGS.len()).enumerate() {
        let ret = returns.get(index).unwrap_or(&returns[0]);
        let total = parse_inr(&out.price) + parse_inr(&ret.price);
        deals.push(Deal {
            id: format!("deal-value-{}", index + 1),
            outbound: out.clone(),
            return_flight: ret.clone(),
            total_price: format_inr(total),
            total_duration: None,
            deal_type: VALUE_TAGS[index],
            savings: (total as f64 * rng.gen_range(0.02..0.05)) as u32,
        });
    }

    Ok(deals)
}
