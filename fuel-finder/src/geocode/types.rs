//! Reverse-geocoding response types.
//!
//! Only the fields needed to build a short display address are kept.
//! Nominatim returns `{"error": "..."}` with a 200 status when nothing is
//! found; that deserializes to a response with no address.

use serde::Deserialize;

/// Response from `GET /reverse?format=json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseResponse {
    #[serde(default)]
    pub address: Option<Address>,

    #[serde(default)]
    pub display_name: Option<String>,
}

/// Structured address components.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub road: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub town: Option<String>,

    #[serde(default)]
    pub village: Option<String>,
}

impl Address {
    /// The settlement name. Smaller places have no `city` and report a
    /// `town` or `village` instead.
    pub fn locality(&self) -> Option<&str> {
        [&self.city, &self.town, &self.village]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }

    /// `"{road} {locality}"`, or whichever of the two is present.
    pub fn display_line(&self) -> Option<String> {
        let road = self.road.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let line = [road, self.locality()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        (!line.is_empty()).then_some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(json: &str) -> Address {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn road_and_city() {
        let addr = address(r#"{"road": "Rue de Rivoli", "city": "Paris", "postcode": "75001"}"#);
        assert_eq!(addr.display_line().as_deref(), Some("Rue de Rivoli Paris"));
    }

    #[test]
    fn town_stands_in_for_city() {
        let addr = address(r#"{"road": "Hämeentie", "town": "Järvenpää"}"#);
        assert_eq!(addr.display_line().as_deref(), Some("Hämeentie Järvenpää"));

        let addr = address(r#"{"road": "Kylätie", "village": "Nuuksio"}"#);
        assert_eq!(addr.locality(), Some("Nuuksio"));
    }

    #[test]
    fn city_preferred_over_town() {
        let addr = address(r#"{"city": "Helsinki", "town": "Espoo"}"#);
        assert_eq!(addr.locality(), Some("Helsinki"));
    }

    #[test]
    fn partial_and_empty_addresses() {
        assert_eq!(
            address(r#"{"road": "Mannerheimintie"}"#).display_line().as_deref(),
            Some("Mannerheimintie")
        );
        assert_eq!(address(r#"{"country": "Suomi"}"#).display_line(), None);
        assert_eq!(address(r#"{"road": " ", "city": ""}"#).display_line(), None);
    }

    #[test]
    fn error_body_has_no_address() {
        let resp: ReverseResponse = serde_json::from_str(r#"{"error": "Unable to geocode"}"#).unwrap();
        assert!(resp.address.is_none());
    }
}
