use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trip type after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    OneWay,
    RoundTrip,
}

/// Flight search request as callers send it. Key spellings vary by call
/// site: `from`/`departure` and `to`/`destination` are interchangeable,
/// and every field is optional — absence degrades to defaults downstream
/// instead of failing here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightQuery {
    #[serde(alias = "departure")]
    pub from: Option<String>,
    #[serde(alias = "destination")]
    pub to: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub passengers: Option<u32>,
    pub trip_type: Option<String>,
}

/// Canonical, alias-resolved flight search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearch {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
    pub trip_type: TripType,
    /// Round trip with a usable return date distinct from the departure
    /// date. When false, round-trip generation is skipped.
    pub valid_round_trip: bool,
}

impl FlightQuery {
    /// Resolve aliases and derive the trip type.
    ///
    /// Never fails: malformed dates and missing fields become `None`. An
    /// invalid round trip (no return date, unparseable return date, or a
    /// return date equal to the departure date) downgrades to one-way and
    /// is reported through the returned warnings, not as an error.
    pub fn normalize(&self) -> (FlightSearch, Vec<String>) {
        let departure_date = parse_date(self.departure_date.as_deref());
        let return_date = parse_date(self.return_date.as_deref());

        let round_trip_requested = matches!(
            self.trip_type.as_deref(),
            Some("round-trip") | Some("roundtrip")
        ) || self
            .return_date
            .as_deref()
            .is_some_and(|d| !d.is_empty());

        let valid_round_trip =
            round_trip_requested && return_date.is_some() && return_date != departure_date;

        let mut warnings = Vec::new();
        if round_trip_requested && !valid_round_trip {
            let warning =
                "Round trip requested without a valid return date; searching one-way only"
                    .to_string();
            tracing::warn!(
                departure_date = ?self.departure_date,
                return_date = ?self.return_date,
                "{warning}"
            );
            warnings.push(warning);
        }

        let search = FlightSearch {
            origin: non_empty(self.from.as_deref()),
            destination: non_empty(self.to.as_deref()),
            departure_date,
            return_date,
            passengers: self.passengers.unwrap_or(1).max(1),
            trip_type: if valid_round_trip {
                TripType::RoundTrip
            } else {
                TripType::OneWay
            },
            valid_round_trip,
        };
        (search, warnings)
    }
}

/// Hotel search request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelQuery {
    pub destination: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
    pub rooms: Option<u32>,
}

/// Canonical hotel search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearch {
    pub destination: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub rooms: u32,
}

impl HotelQuery {
    pub fn normalize(&self) -> HotelSearch {
        HotelSearch {
            destination: non_empty(self.destination.as_deref()),
            check_in: parse_date(self.check_in.as_deref()),
            check_out: parse_date(self.check_out.as_deref()),
            guests: self.guests.unwrap_or(2).max(1),
            rooms: self.rooms.unwrap_or(1).max(1),
        }
    }
}

/// Train search request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
}

/// Canonical train search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainSearch {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TrainQuery {
    pub fn normalize(&self) -> TrainSearch {
        TrainSearch {
            origin: non_empty(self.from.as_deref()),
            destination: non_empty(self.to.as_deref()),
            date: parse_date(self.date.as_deref()),
        }
    }
}

/// Insurance quote request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsuranceQuery {
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub travelers: Option<u32>,
    pub trip_type: Option<String>,
    pub age: Option<u32>,
}

/// Canonical insurance search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceSearch {
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub travelers: u32,
    pub long_term: bool,
    pub age: Option<u32>,
}

impl InsuranceQuery {
    pub fn normalize(&self) -> InsuranceSearch {
        InsuranceSearch {
            destination: non_empty(self.destination.as_deref()),
            start_date: parse_date(self.start_date.as_deref()),
            end_date: parse_date(self.end_date.as_deref()),
            travelers: self.travelers.unwrap_or(1).max(1),
            long_term: self.trip_type.as_deref() == Some("long-term"),
            age: self.age,
        }
    }
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| v.trim().parse().ok())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
