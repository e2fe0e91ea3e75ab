//! Best-effort conversion of a position into a display address.

use tracing::{debug, warn};

use crate::domain::Position;

use super::error::GeocodeError;
use super::types::ReverseResponse;

/// Source of reverse-geocoding lookups.
///
/// This abstraction allows the resolver to be tested without a network.
pub trait ReverseGeocoder {
    /// Look up the address at a coordinate.
    async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ReverseResponse, GeocodeError>;
}

/// Outcome of a single lookup.
#[derive(Debug)]
pub enum Resolution {
    /// The position had an address.
    Resolved(String),
    /// The lookup succeeded but returned no usable address.
    NoAddress,
    /// The lookup itself failed.
    Failed(GeocodeError),
}

impl Resolution {
    /// Collapse to the origin string; anything unresolved is empty.
    pub fn into_origin(self) -> String {
        match self {
            Resolution::Resolved(origin) => origin,
            Resolution::NoAddress | Resolution::Failed(_) => String::new(),
        }
    }
}

/// Turns positions into display addresses.
///
/// Never fails: an empty string means "unresolved", never an error.
#[derive(Debug, Clone)]
pub struct LocationResolver<G> {
    geocoder: G,
}

impl<G: ReverseGeocoder> LocationResolver<G> {
    /// Create a resolver backed by `geocoder`.
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// The underlying geocoder.
    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Perform exactly one lookup and classify the outcome.
    pub async fn lookup(&self, latitude: f64, longitude: f64) -> Resolution {
        match self.geocoder.reverse(latitude, longitude).await {
            Ok(response) => match response.address.and_then(|a| a.display_line()) {
                Some(line) => Resolution::Resolved(line),
                None => Resolution::NoAddress,
            },
            Err(e) => Resolution::Failed(e),
        }
    }

    /// Resolve `position` to an origin string.
    ///
    /// Returns `""` without a lookup when either coordinate is missing.
    pub async fn resolve(&self, position: Position) -> String {
        let Some((latitude, longitude)) = position.coordinates() else {
            debug!("no position fix yet, skipping lookup");
            return String::new();
        };

        let resolution = self.lookup(latitude, longitude).await;
        match &resolution {
            Resolution::Resolved(origin) => debug!(%origin, "resolved position"),
            Resolution::NoAddress => debug!(latitude, longitude, "no address at position"),
            Resolution::Failed(e) => warn!(error = %e, "reverse geocoding failed"),
        }
        resolution.into_origin()
    }
}
