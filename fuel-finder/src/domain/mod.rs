//! Domain types for the fuel station search.
//!
//! The request parameters, the station records the backend returns and
//! the device position used to fill in the origin.

mod error;
mod measure;
mod params;
mod position;
mod station;

pub use error::DomainError;
pub use measure::{parse_distance_km, parse_duration_min, parse_price_age};
pub use params::SearchParams;
pub use position::Position;
pub use station::StationResult;

#[cfg(test)]
pub(crate) use station::fixtures;
