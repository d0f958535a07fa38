pub mod currency;
pub mod envelope;
pub mod search;

pub use envelope::{ApiStatus, SearchEnvelope};
pub use search::{
    FlightQuery, FlightSearch, HotelQuery, HotelSearch, InsuranceQuery, InsuranceSearch,
    TrainQuery, TrainSearch, TripType,
};
