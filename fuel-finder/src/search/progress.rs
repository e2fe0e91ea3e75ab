//! Progress feedback while a search is in flight.
//!
//! The backend gives no progress information, so the tracker advances a
//! counter on a fixed cadence to show that work is happening.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{trace, warn};

/// Shared progress counter.
///
/// Cheap to clone; every clone observes the same value.
#[derive(Debug, Clone, Default)]
pub struct Progress(Arc<AtomicU32>);

impl Progress {
    /// Raw tick count. Not clamped.
    pub fn value(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Tick count clamped to a percentage.
    pub fn percent(&self) -> u8 {
        self.value().min(100) as u8
    }

    fn tick(&self) -> u32 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// Increments a [`Progress`] counter once per interval while enabled.
///
/// The ticking task is aborted as soon as the interval is cleared, the
/// tracker is stopped, or the tracker is dropped.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    progress: Progress,
    ticker: Option<JoinHandle<()>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle for observing the counter.
    pub fn progress(&self) -> Progress {
        self.progress.clone()
    }

    pub fn value(&self) -> u32 {
        self.progress.value()
    }

    /// Whether a ticking task is active.
    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Start ticking every `interval`, or stop with `None`.
    ///
    /// Any previous ticking task is cancelled first. The first tick comes
    /// one full interval after the call. Must be called from within a
    /// Tokio runtime for ticking to start.
    pub fn set_interval(&mut self, interval: Option<Duration>) {
        self.stop();

        let Some(period) = interval.filter(|p| !p.is_zero()) else {
            return;
        };

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!(error = %e, "no runtime, progress will not advance");
                return;
            }
        };

        let progress = self.progress.clone();
        self.ticker = Some(handle.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                let value = progress.tick();
                trace!(value, "progress tick");
            }
        }));
    }

    /// Cancel ticking. The counter keeps its value.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }

    /// Set the counter back to zero.
    pub fn reset(&self) {
        self.progress.reset();
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.stop();
    }
}
