pub mod booking;
pub mod combine;
pub mod flight;
pub mod hotel;
pub mod insurance;
pub mod models;
pub mod routes;
pub mod train;

pub use booking::BookingDesk;
pub use combine::DealsError;
pub use flight::FlightGenerator;
pub use hotel::HotelGenerator;
pub use insurance::InsuranceGenerator;
pub use train::TrainGenerator;
