//! Unit price tiers used to highlight cheap and expensive stations.

/// Unit prices below this are cheap.
const DEFAULT_LOW_BELOW: f64 = 1.5;

/// Unit prices below this (and not cheap) are average.
const DEFAULT_MEDIUM_BELOW: f64 = 1.55;

/// How a station's unit price compares to typical prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceTier {
    Low,
    Medium,
    High,
}

impl PriceTier {
    /// Classify against the default thresholds.
    pub fn classify(price_per_liter: f64) -> Self {
        PriceThresholds::default().classify(price_per_liter)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Low => "low",
            PriceTier::Medium => "medium",
            PriceTier::High => "high",
        }
    }
}

/// Upper bounds (exclusive) of the low and medium tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceThresholds {
    pub low_below: f64,
    pub medium_below: f64,
}

impl PriceThresholds {
    pub fn new(low_below: f64, medium_below: f64) -> Self {
        Self {
            low_below,
            medium_below,
        }
    }

    /// Place a unit price in its tier. NaN lands in `High`.
    pub fn classify(&self, price_per_liter: f64) -> PriceTier {
        if price_per_liter < self.low_below {
            PriceTier::Low
        } else if price_per_liter < self.medium_below {
            PriceTier::Medium
        } else {
            PriceTier::High
        }
    }
}

impl Default for PriceThresholds {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_BELOW, DEFAULT_MEDIUM_BELOW)
    }
}
