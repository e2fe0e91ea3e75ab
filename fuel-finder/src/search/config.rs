//! Configuration for the search session.

use std::time::Duration;

use super::tier::PriceThresholds;

/// Configuration parameters for searching and displaying results.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of stations shown.
    pub display_limit: usize,

    /// Milliseconds between progress ticks per litre of refill.
    /// The backend's work grows with the refill amount, so the progress
    /// bar slows down for bigger searches.
    pub progress_ms_per_liter: u64,

    /// Unit price tier boundaries.
    pub thresholds: PriceThresholds,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(display_limit: usize, progress_ms_per_liter: u64) -> Self {
        Self {
            display_limit,
            progress_ms_per_liter,
            thresholds: PriceThresholds::default(),
        }
    }

    /// Set the unit price tier boundaries.
    pub fn with_thresholds(mut self, thresholds: PriceThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Interval between progress ticks for a refill of `refill_amount_liters`.
    ///
    /// `None` disables ticking. That happens when the amount is not a
    /// positive finite number, since the form passes values through as-is.
    pub fn tick_interval(&self, refill_amount_liters: f64) -> Option<Duration> {
        let millis = refill_amount_liters * self.progress_ms_per_liter as f64;
        (millis.is_finite() && millis >= 1.0).then(|| Duration::from_millis(millis.round() as u64))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            display_limit: 5,
            progress_ms_per_liter: 10,
            thresholds: PriceThresholds::default(),
        }
    }
}
