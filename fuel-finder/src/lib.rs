//! Fuel station search client.
//!
//! Finds nearby fuel stations ranked by total cost: the fuel itself plus
//! the drive to reach the station. Resolves the device position into an
//! origin, submits the search to the pricing backend while showing
//! progress, and ranks the returned stations.

pub mod api;
pub mod domain;
pub mod geocode;
pub mod search;
