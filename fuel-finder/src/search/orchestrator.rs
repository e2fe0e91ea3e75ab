//! Search orchestration.
//!
//! Owns the session: fills in the origin from the device position, submits
//! searches, drives the progress tracker and installs results or errors.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::ApiError;
use crate::domain::{Position, SearchParams, StationResult};
use crate::geocode::{LocationResolver, ReverseGeocoder};

use super::config::SearchConfig;
use super::progress::{Progress, ProgressTracker};
use super::rank::StationRanking;
use super::session::{SearchSession, SessionStatus};

/// Error recorded when a search future is dropped before it completes.
const CANCELLED_MESSAGE: &str = "search cancelled before completion";

/// Trait for submitting station searches.
///
/// This abstraction allows the orchestrator to be tested with mock data.
pub trait StationSearch {
    /// Submit `params` as the request body and return the priced stations.
    async fn search(&self, params: &SearchParams) -> Result<Vec<StationResult>, ApiError>;
}

/// Coordinates one search session.
///
/// Every operation takes `&mut self`, so a second search cannot be
/// submitted while one is pending.
pub struct SearchOrchestrator<G, S> {
    resolver: LocationResolver<G>,
    api: S,
    config: SearchConfig,
    tracker: ProgressTracker,
    session: SearchSession,
}

impl<G: ReverseGeocoder, S: StationSearch> SearchOrchestrator<G, S> {
    /// Create an orchestrator with the default form state.
    pub fn new(geocoder: G, api: S, config: SearchConfig) -> Self {
        let tracker = ProgressTracker::new();
        let session = SearchSession::new(SearchParams::default(), tracker.progress());

        Self {
            resolver: LocationResolver::new(geocoder),
            api,
            config,
            tracker,
            session,
        }
    }

    /// Start from the given form state instead of the defaults.
    pub fn with_params(mut self, params: SearchParams) -> Self {
        *self.session.params_mut() = params;
        self
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn resolver(&self) -> &LocationResolver<G> {
        &self.resolver
    }

    pub fn api(&self) -> &S {
        &self.api
    }

    /// A handle that observes progress while a search is pending.
    pub fn progress(&self) -> Progress {
        self.tracker.progress()
    }

    /// Mutable access to the form state.
    pub fn params_mut(&mut self) -> &mut SearchParams {
        self.session.params_mut()
    }

    /// Fill in the origin from `position`.
    ///
    /// Does nothing when an origin is already set (the user may have typed
    /// one) or results are shown. Call again whenever the position source
    /// reports a new fix. Returns the origin afterwards.
    pub async fn resolve_location(&mut self, position: Position) -> &str {
        if self.session.params().has_origin() || self.session.has_results() {
            debug!("origin already set, not resolving location");
            return &self.session.params().origin;
        }

        let mut locating = Locating::begin(&mut self.session);
        let origin = self.resolver.resolve(position).await;
        locating.session.set_origin(origin);
        drop(locating);

        &self.session.params().origin
    }

    /// Search with `params` and install the outcome.
    ///
    /// Makes exactly one backend call. Failures end up in the session
    /// (`Failed` status and error message) with the previous results kept.
    pub async fn search(&mut self, params: SearchParams) -> SessionStatus {
        let interval = self.config.tick_interval(params.refill_amount_liters);
        info!(
            origin = %params.origin,
            amount = params.refill_amount_liters,
            "search started"
        );

        let in_flight = InFlight::begin(&mut self.session, &mut self.tracker, params, interval);
        let outcome = self.api.search(in_flight.session.params()).await;
        in_flight.finish(outcome)
    }

    /// Search with the current form state.
    pub async fn submit(&mut self) -> SessionStatus {
        let params = self.session.params().clone();
        self.search(params).await
    }

    /// Drop the results and go back to the form. Parameters are kept.
    pub fn clear_results(&mut self) {
        debug!("clearing results");
        self.session.clear_results();
    }

    /// Ranked view of the current results.
    pub fn ranking(&self) -> StationRanking<'_> {
        StationRanking::new(self.session.results(), self.config.display_limit)
            .with_thresholds(self.config.thresholds)
    }
}

/// Marks the session as locating until dropped.
struct Locating<'a> {
    session: &'a mut SearchSession,
    previous: SessionStatus,
}

impl<'a> Locating<'a> {
    fn begin(session: &'a mut SearchSession) -> Self {
        let previous = session.begin_locating();
        Self { session, previous }
    }
}

impl Drop for Locating<'_> {
    fn drop(&mut self) {
        self.session.end_locating(self.previous);
    }
}

/// A search in flight.
///
/// Ties the tracker to the loading state: ticking starts in `begin`, and
/// stops with progress zeroed in `finish` or, if the search future is
/// dropped early, in `Drop`.
struct InFlight<'a> {
    session: &'a mut SearchSession,
    tracker: &'a mut ProgressTracker,
    finished: bool,
}

impl<'a> InFlight<'a> {
    fn begin(
        session: &'a mut SearchSession,
        tracker: &'a mut ProgressTracker,
        params: SearchParams,
        interval: Option<Duration>,
    ) -> Self {
        tracker.reset();
        session.begin_search(params);
        tracker.set_interval(interval);

        Self {
            session,
            tracker,
            finished: false,
        }
    }

    fn end_progress(&mut self) {
        self.tracker.set_interval(None);
        self.tracker.reset();
    }

    fn finish(mut self, outcome: Result<Vec<StationResult>, ApiError>) -> SessionStatus {
        self.finished = true;
        self.end_progress();

        match outcome {
            Ok(results) => {
                info!(count = results.len(), "search finished");
                self.session.complete(results);
            }
            Err(e) => {
                warn!(error = %e, "search failed");
                self.session.fail(e.to_string());
            }
        }

        self.session.status()
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("search dropped while in flight");
            self.end_progress();
            self.session.fail(CANCELLED_MESSAGE.to_string());
        }
    }
}
