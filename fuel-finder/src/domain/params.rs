//! Search form parameters.

use serde::{Deserialize, Serialize};

/// Trip parameters sent to the station search backend as the request body.
///
/// Wire names match the backend's form keys (`from`, `age`, `distance`,
/// `consumption`, `amount`, and the optional `to`). Values are passed
/// through untouched; the backend is the only validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Starting address. Empty until the location has been resolved or typed.
    #[serde(rename = "from")]
    pub origin: String,

    /// Optional end of a route; when set the backend prices detours along it.
    #[serde(rename = "to", default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Ignore prices reported longer ago than this many days.
    #[serde(rename = "age")]
    pub max_price_age_days: f64,

    /// Ignore stations further away than this (km).
    #[serde(rename = "distance")]
    pub max_distance_km: f64,

    /// Car consumption in litres per 100 km.
    #[serde(rename = "consumption")]
    pub fuel_consumption_l_per_100km: f64,

    /// Litres to refill.
    #[serde(rename = "amount")]
    pub refill_amount_liters: f64,
}

impl SearchParams {
    /// Set the origin address.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set a route destination.
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Set the refill amount in litres.
    pub fn with_refill_amount(mut self, liters: f64) -> Self {
        self.refill_amount_liters = liters;
        self
    }

    /// Whether an origin has been filled in.
    pub fn has_origin(&self) -> bool {
        !self.origin.trim().is_empty()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: None,
            max_price_age_days: 5.0,
            max_distance_km: 20.0,
            fuel_consumption_l_per_100km: 7.2,
            refill_amount_liters: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_form_state() {
        let params = SearchParams::default();

        assert_eq!(params.origin, "");
        assert_eq!(params.destination, None);
        assert_eq!(params.max_price_age_days, 5.0);
        assert_eq!(params.max_distance_km, 20.0);
        assert_eq!(params.fuel_consumption_l_per_100km, 7.2);
        assert_eq!(params.refill_amount_liters, 40.0);
        assert!(!params.has_origin());
    }

    #[test]
    fn serializes_with_backend_names() {
        let params = SearchParams::default().with_origin("Rue de Rivoli Paris");
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(
            value,
            json!({
                "from": "Rue de Rivoli Paris",
                "age": 5.0,
                "distance": 20.0,
                "consumption": 7.2,
                "amount": 40.0,
            })
        );
    }

    #[test]
    fn destination_serialized_as_to() {
        let params = SearchParams::default()
            .with_origin("Mannerheimintie 1 Helsinki")
            .with_destination("Tampere");
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["to"], "Tampere");
    }

    #[test]
    fn deserializes_integer_form_values() {
        let params: SearchParams = serde_json::from_value(json!({
            "from": "",
            "age": 5,
            "distance": 20,
            "consumption": 7.2,
            "amount": 40,
        }))
        .unwrap();

        assert_eq!(params, SearchParams::default());
    }

    #[test]
    fn whitespace_origin_is_not_filled_in() {
        let params = SearchParams::default().with_origin("   ");
        assert!(!params.has_origin());
    }
}
