//! Reverse geocoding of the device position.
//!
//! Turns a coordinate into a short `"{road} {city}"` origin for the search
//! form. This is a best-effort annotation: failures degrade to an empty
//! origin and are never shown to the user.

mod client;
mod error;
mod resolver;
mod types;

pub use client::{GeocodeConfig, NominatimClient};
pub use error::GeocodeError;
pub use resolver::{LocationResolver, Resolution, ReverseGeocoder};
pub use types::{Address, ReverseResponse};

#[cfg(test)]
pub(crate) use resolver::mock::MockGeocoder;
