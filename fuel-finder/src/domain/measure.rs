//! Parsing of the human-formatted labels the station backend emits.
//!
//! Depending on the search mode the backend sends distances as `"6km"` or
//! as a detour like `"+350m"`, durations as `"12min"`, and price ages as
//! `"Today"` / `"3 days ago"`. Plain numbers are also accepted.

use chrono::TimeDelta;
use serde::{Deserialize, Deserializer};

use super::error::DomainError;

/// Split a label into its leading number and the trailing unit.
fn split_number(label: &str) -> Result<(f64, &str), DomainError> {
    let trimmed = label.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let end = unsigned
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (c == '-' && i == 0)))
        .map_or(unsigned.len(), |(i, _)| i);

    let (number, unit) = unsigned.split_at(end);
    let value = number
        .parse::<f64>()
        .map_err(|_| DomainError::InvalidMeasurement(label.to_string()))?;

    Ok((value, unit.trim()))
}

/// Parse a distance label into kilometres.
pub fn parse_distance_km(label: &str) -> Result<f64, DomainError> {
    let (value, unit) = split_number(label)?;
    match unit.to_ascii_lowercase().as_str() {
        "" | "km" => Ok(value),
        "m" => Ok(value / 1000.0),
        _ => Err(DomainError::UnknownUnit {
            label: label.to_string(),
            unit: unit.to_string(),
        }),
    }
}

/// Parse a duration label into minutes.
pub fn parse_duration_min(label: &str) -> Result<f64, DomainError> {
    let (value, unit) = split_number(label)?;
    match unit.to_ascii_lowercase().as_str() {
        "" | "min" | "mins" => Ok(value),
        "h" => Ok(value * 60.0),
        _ => Err(DomainError::UnknownUnit {
            label: label.to_string(),
            unit: unit.to_string(),
        }),
    }
}

/// Parse a price age label (`"Today"`, `"1 day ago"`, `"4 days ago"`).
pub fn parse_price_age(label: &str) -> Result<TimeDelta, DomainError> {
    let label = label.trim();
    if label.eq_ignore_ascii_case("today") {
        return Ok(TimeDelta::zero());
    }

    let invalid = || DomainError::InvalidPriceAge(label.to_string());

    let mut words = label.split_whitespace();
    let days: i64 = words
        .next()
        .and_then(|n| n.parse().ok())
        .ok_or_else(invalid)?;

    match (words.next(), words.next(), words.next()) {
        (Some("day" | "days"), Some("ago"), None) => TimeDelta::try_days(days).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Either a bare number or a label with a unit suffix.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrLabel {
    Number(f64),
    Label(String),
}

/// Serde adapter for distance fields.
pub(crate) fn deserialize_km<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrLabel::deserialize(deserializer)? {
        NumberOrLabel::Number(n) => Ok(n),
        NumberOrLabel::Label(s) => parse_distance_km(&s).map_err(serde::de::Error::custom),
    }
}

/// Serde adapter for duration fields.
pub(crate) fn deserialize_min<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrLabel::deserialize(deserializer)? {
        NumberOrLabel::Number(n) => Ok(n),
        NumberOrLabel::Label(s) => parse_duration_min(&s).map_err(serde::de::Error::custom),
    }
}
