//! Search session orchestration and result ranking.
//!
//! The orchestrator owns one [`SearchSession`]: it fills in the origin from
//! the device position, submits the search while a [`ProgressTracker`]
//! ticks, and installs the results. [`StationRanking`] then orders the
//! results for display without re-fetching.

mod config;
mod orchestrator;
mod progress;
mod rank;
mod session;
mod tier;

pub use config::SearchConfig;
pub use orchestrator::{SearchOrchestrator, StationSearch};
pub use progress::{Progress, ProgressTracker};
pub use rank::{RankedStation, SortKey, StationRanking, UnknownSortKey, rank_stations};
pub use session::{SearchSession, SessionStatus};
pub use tier::{PriceThresholds, PriceTier};
