//! Station search backend.
//!
//! The backend prices every station near the origin (fuel plus the drive
//! there and back) and returns them as a JSON array. It is treated as an
//! opaque request/response API.

mod client;
mod deployment;
mod error;

pub use client::{ApiConfig, StationApiClient};
pub use deployment::Deployment;
pub use error::ApiError;
