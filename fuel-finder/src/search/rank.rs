//! Station ranking for search results.
//!
//! Orders a result set by one of the comparison criteria so the cheapest
//! or closest options appear first.

use std::fmt;
use std::str::FromStr;

use crate::domain::StationResult;

use super::tier::{PriceThresholds, PriceTier};

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0:?}")]
pub struct UnknownSortKey(String);

/// Criterion to rank stations by. Always ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Refill plus driving cost.
    #[default]
    TotalPrice,
    /// Price per litre.
    UnitPrice,
    /// Driving distance.
    Distance,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::TotalPrice, SortKey::UnitPrice, SortKey::Distance];

    /// The backend field name this key sorts on.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TotalPrice => "total_price",
            SortKey::UnitPrice => "95E10/l",
            SortKey::Distance => "distance",
        }
    }

    /// The value of this key for `station`.
    pub fn value(&self, station: &StationResult) -> f64 {
        match self {
            SortKey::TotalPrice => station.total_price,
            SortKey::UnitPrice => station.price_per_liter,
            SortKey::Distance => station.distance_km,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Rank stations by `key`.
///
/// Only the first `limit` stations in backend order are considered; they
/// are then sorted ascending. Sorting never pulls in stations beyond the
/// first `limit`. Ties keep their backend order.
pub fn rank_stations(stations: &[StationResult], key: SortKey, limit: usize) -> Vec<&StationResult> {
    let mut view: Vec<&StationResult> = stations.iter().take(limit).collect();
    view.sort_by(|a, b| key.value(a).total_cmp(&key.value(b)));
    view
}

/// A ranked station with its display position and price tier.
#[derive(Debug, Clone, Copy)]
pub struct RankedStation<'a> {
    /// 1-based rank.
    pub position: usize,
    pub station: &'a StationResult,
    pub tier: PriceTier,
}

/// Sorted, truncated view over a result set.
///
/// Borrows the results and never mutates them; changing the sort key only
/// changes the derived view.
#[derive(Debug, Clone)]
pub struct StationRanking<'a> {
    stations: &'a [StationResult],
    key: SortKey,
    limit: usize,
    thresholds: PriceThresholds,
}

impl<'a> StationRanking<'a> {
    /// Create a ranking over `stations`, sorted by total price.
    pub fn new(stations: &'a [StationResult], limit: usize) -> Self {
        Self {
            stations,
            key: SortKey::default(),
            limit,
            thresholds: PriceThresholds::default(),
        }
    }

    /// Use a different sort key.
    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.key = key;
        self
    }

    /// Use different price tier thresholds.
    pub fn with_thresholds(mut self, thresholds: PriceThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn sort_key(&self) -> SortKey {
        self.key
    }

    /// Switch the active sort key.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.key = key;
    }

    /// Number of stations shown: `min(limit, stations.len())`.
    pub fn len(&self) -> usize {
        self.stations.len().min(self.limit)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stations in display order.
    pub fn view(&self) -> Vec<&'a StationResult> {
        rank_stations(self.stations, self.key, self.limit)
    }

    /// The stations in display order with rank and tier.
    pub fn entries(&self) -> Vec<RankedStation<'a>> {
        self.view()
            .into_iter()
            .enumerate()
            .map(|(i, station)| RankedStation {
                position: i + 1,
                station,
                tier: self.thresholds.classify(station.price_per_liter),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::station;

    fn names<'a>(view: &[&'a StationResult]) -> Vec<&'a str> {
        view.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn rank_by_total_price() {
        let stations = vec![
            station("A", 50.0, 1.4, 3.0),
            station("B", 45.0, 1.6, 10.0),
        ];

        let view = rank_stations(&stations, SortKey::TotalPrice, 5);
        assert_eq!(names(&view), vec!["B", "A"]);
    }

    #[test]
    fn rank_by_unit_price() {
        let stations = vec![
            station("A", 50.0, 1.6, 3.0),
            station("B", 45.0, 1.4, 10.0),
            station("C", 47.0, 1.5, 1.0),
        ];

        let view = rank_stations(&stations, SortKey::UnitPrice, 5);
        assert_eq!(names(&view), vec!["B", "C", "A"]);
    }

    #[test]
    fn rank_by_distance() {
        let stations = vec![
            station("A", 50.0, 1.4, 3.0),
            station("B", 45.0, 1.6, 10.0),
        ];

        let view = rank_stations(&stations, SortKey::Distance, 5);
        assert_eq!(names(&view), vec!["A", "B"]);
    }

    #[test]
    fn ties_keep_backend_order() {
        let stations = vec![
            station("A", 50.0, 1.4, 3.0),
            station("B", 45.0, 1.4, 10.0),
            station("C", 40.0, 1.4, 5.0),
        ];

        let view = rank_stations(&stations, SortKey::UnitPrice, 5);
        assert_eq!(names(&view), vec!["A", "B", "C"]);
    }

    #[test]
    fn truncates_before_sorting() {
        // The cheapest station is sixth in backend order, so it is never shown.
        let stations = vec![
            station("A", 60.0, 1.5, 1.0),
            station("B", 59.0, 1.5, 2.0),
            station("C", 58.0, 1.5, 3.0),
            station("D", 57.0, 1.5, 4.0),
            station("E", 56.0, 1.5, 5.0),
            station("F", 10.0, 1.0, 0.5),
        ];

        let view = rank_stations(&stations, SortKey::TotalPrice, 5);
        assert_eq!(names(&view), vec!["E", "D", "C", "B", "A"]);

        let view = rank_stations(&stations, SortKey::Distance, 5);
        assert_eq!(names(&view), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn empty_input() {
        let view = rank_stations(&[], SortKey::TotalPrice, 5);
        assert!(view.is_empty());
    }

    #[test]
    fn sort_key_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("95E10/l".parse::<SortKey>().unwrap(), SortKey::UnitPrice);
        assert_eq!(SortKey::Distance.to_string(), "distance");
        assert!("price".parse::<SortKey>().is_err());
    }

    #[test]
    fn ranking_switches_key_without_touching_results() {
        let stations = vec![
            station("A", 50.0, 1.4, 3.0),
            station("B", 45.0, 1.6, 10.0),
        ];
        let before = stations.clone();

        let mut ranking = StationRanking::new(&stations, 5);
        assert_eq!(ranking.sort_key(), SortKey::TotalPrice);
        assert_eq!(names(&ranking.view()), vec!["B", "A"]);

        ranking.set_sort_key(SortKey::Distance);
        assert_eq!(names(&ranking.view()), vec!["A", "B"]);

        assert_eq!(stations, before);
    }

    #[test]
    fn entries_carry_position_and_tier() {
        let stations = vec![
            station("A", 50.0, 1.45, 3.0),
            station("B", 45.0, 1.6, 10.0),
            station("C", 47.0, 1.52, 4.0),
        ];

        let entries = StationRanking::new(&stations, 5)
            .with_sort_key(SortKey::UnitPrice)
            .entries();

        let summary: Vec<_> = entries
            .iter()
            .map(|e| (e.position, e.station.name.as_str(), e.tier))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "A", PriceTier::Low),
                (2, "C", PriceTier::Medium),
                (3, "B", PriceTier::High),
            ]
        );
    }

    #[test]
    fn len_is_capped() {
        let stations: Vec<_> = (0..8)
            .map(|i| station(&format!("S{i}"), 50.0, 1.5, 1.0))
            .collect();

        let ranking = StationRanking::new(&stations, 5);
        assert_eq!(ranking.len(), 5);
        assert!(!ranking.is_empty());
        assert!(StationRanking::new(&[], 5).is_empty());
    }
}
