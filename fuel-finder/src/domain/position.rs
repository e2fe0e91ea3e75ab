//! Device position.

/// A possibly-unknown geographic position in degrees.
///
/// Position sources report nothing until a fix is available, so either
/// coordinate may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Position {
    /// A position with both coordinates known.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// A position with no fix yet.
    pub const fn unknown() -> Self {
        Self {
            latitude: None,
            longitude: None,
        }
    }

    /// Both coordinates, if both are present and finite.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}
