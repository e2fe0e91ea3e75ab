//! Domain error types.
//!
//! These errors describe labels from the station backend that could not be
//! read. They are distinct from API/IO errors.

/// Domain-level errors for parsing backend labels.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A distance or duration label had no usable number
    #[error("invalid measurement: {0:?}")]
    InvalidMeasurement(String),

    /// A distance or duration label had a unit we don't know
    #[error("unknown unit {unit:?} in {label:?}")]
    UnknownUnit { label: String, unit: String },

    /// A price age label was not "Today" or "N day(s) ago"
    #[error("invalid price age: {0:?}")]
    InvalidPriceAge(String),
}
