//! Search session state.
//!
//! A session holds the form parameters, the lifecycle status, progress,
//! the last error and the current result set. Only the orchestrator
//! mutates it, one transition at a time.

use crate::domain::{SearchParams, StationResult};

use super::progress::Progress;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Waiting for the user; results may or may not be shown.
    #[default]
    Idle,
    /// Resolving the device position into an origin.
    Locating,
    /// A search request is in flight.
    Searching,
    /// The last search succeeded.
    Ready,
    /// The last search failed; see [`SearchSession::error`].
    Failed,
}

impl SessionStatus {
    /// Whether a spinner should be shown.
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionStatus::Locating | SessionStatus::Searching)
    }
}

/// State of the single active search session.
#[derive(Debug, Clone)]
pub struct SearchSession {
    params: SearchParams,
    status: SessionStatus,
    progress: Progress,
    error: Option<String>,
    results: Vec<StationResult>,
}

impl SearchSession {
    /// Create an idle session with the given form state.
    pub fn new(params: SearchParams, progress: Progress) -> Self {
        Self {
            params,
            status: SessionStatus::Idle,
            progress,
            error: None,
            results: Vec::new(),
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Progress ticks since the current search started; 0 when idle.
    pub fn progress(&self) -> u32 {
        self.progress.value()
    }

    /// Message from the last failed search.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Stations from the last successful search, in backend order.
    pub fn results(&self) -> &[StationResult] {
        &self.results
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub(super) fn params_mut(&mut self) -> &mut SearchParams {
        &mut self.params
    }

    /// Enter `Locating`, returning the status to restore afterwards.
    pub(super) fn begin_locating(&mut self) -> SessionStatus {
        let previous = self.status;
        self.status = SessionStatus::Locating;
        previous
    }

    /// Leave `Locating`. Does nothing if another transition happened since.
    pub(super) fn end_locating(&mut self, previous: SessionStatus) {
        if self.status == SessionStatus::Locating {
            self.status = previous;
        }
    }

    pub(super) fn set_origin(&mut self, origin: String) {
        self.params.origin = origin;
    }

    /// Enter `Searching` with `params` as the form state.
    pub(super) fn begin_search(&mut self, params: SearchParams) {
        self.params = params;
        self.error = None;
        self.status = SessionStatus::Searching;
    }

    /// Install a successful result set.
    pub(super) fn complete(&mut self, results: Vec<StationResult>) {
        self.results = results;
        self.error = None;
        self.status = SessionStatus::Ready;
    }

    /// Record a failure. The previous result set is kept.
    pub(super) fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.status = SessionStatus::Failed;
    }

    /// Drop the result set and return to the form.
    pub(super) fn clear_results(&mut self) {
        self.results.clear();
        self.status = SessionStatus::Idle;
    }
}
