//! Station records returned by the search backend.

use chrono::TimeDelta;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::measure::{deserialize_km, deserialize_min, parse_price_age};

/// Base URL for turn-by-turn directions links.
const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// One priced station from a search response.
///
/// All computed fields (prices, distance, duration) come from the backend
/// and are trusted as-is.
///
/// # Examples
///
/// ```
/// use fuel_finder::domain::StationResult;
///
/// let station: StationResult = serde_json::from_str(r#"{
///     "name": "Neste Kamppi",
///     "price_age": "Today",
///     "95E10/l": 1.479,
///     "total_price": 61.02,
///     "only_gas": 59.16,
///     "distance": "6km",
///     "durations": "12min",
///     "lat": 60.1699,
///     "lon": 24.9384
/// }"#).unwrap();
///
/// assert_eq!(station.distance_km, 6.0);
/// assert_eq!(station.duration_min, 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationResult {
    /// Station name, unique within a result set.
    pub name: String,

    /// How long ago the price was reported, e.g. `"Today"` or `"2 days ago"`.
    #[serde(default)]
    pub price_age: String,

    /// Price of one litre of 95E10.
    #[serde(rename = "95E10/l")]
    pub price_per_liter: f64,

    /// Refill price plus the cost of driving there and back.
    pub total_price: f64,

    /// Refill price alone.
    #[serde(rename = "only_gas")]
    pub fuel_only_price: f64,

    /// Driving distance in km.
    #[serde(rename = "distance", deserialize_with = "deserialize_km")]
    pub distance_km: f64,

    /// Driving time in minutes.
    #[serde(rename = "durations", deserialize_with = "deserialize_min")]
    pub duration_min: f64,

    #[serde(rename = "lat")]
    pub latitude: f64,

    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl StationResult {
    /// The price age as a duration.
    pub fn price_age(&self) -> Result<TimeDelta, DomainError> {
        parse_price_age(&self.price_age)
    }

    /// Cost of the drive alone (total minus the refill).
    pub fn driving_cost(&self) -> f64 {
        self.total_price - self.fuel_only_price
    }

    /// Directions link from `origin` to this station.
    pub fn directions_url(&self, origin: &str) -> Option<Url> {
        let mut url = Url::parse(DIRECTIONS_BASE_URL).ok()?;
        url.query_pairs_mut()
            .append_pair("api", "1")
            .append_pair("origin", origin)
            .append_pair(
                "destination",
                &format!("{},{}", self.latitude, self.longitude),
            );
        Some(url)
    }
}
