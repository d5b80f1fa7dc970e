//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crossbeam_channel::Sender;
use tracing::{debug, info};

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::observer::{FrozenObserver, ProgressObserver};
use crate::progress::ProgressUpdate;

/// Marks "no run seen yet"; no real generator index reaches it.
const NO_RUN: usize = usize::MAX;

/// Throttle state scoped to a single generation run.
///
/// Orchestration reuses one observer for every strategy, one after the
/// other. A new `gen_index` starts a new run at zero progress so that the
/// previous run's completion does not swallow the next run's updates.
struct RunThrottle {
    gen_index: AtomicUsize,
    last_reported: AtomicU64,
}

impl RunThrottle {
    fn new() -> Self {
        Self {
            gen_index: AtomicUsize::new(NO_RUN),
            last_reported: AtomicU64::new(0),
        }
    }

    /// Switch to the run `update` belongs to. Returns `true` on a new run.
    fn enter(&self, update: &ProgressUpdate) -> bool {
        let previous = self.gen_index.swap(update.gen_index, Ordering::Relaxed);
        if previous == update.gen_index {
            return false;
        }
        self.last_reported.store(0, Ordering::Relaxed);
        true
    }

    /// Completion, or at least one threshold past the last reported fraction.
    fn is_due(&self, update: &ProgressUpdate) -> bool {
        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        update.done || (update.progress - last) >= PROGRESS_REPORT_THRESHOLD
    }

    fn record(&self, update: &ProgressUpdate) {
        self.last_reported
            .store(update.progress.to_bits(), Ordering::Relaxed);
    }
}

/// Observer that sends updates through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<ProgressUpdate>,
    run: RunThrottle,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<ProgressUpdate>) -> Self {
        Self {
            sender,
            run: RunThrottle::new(),
        }
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.run.enter(update);
        if self.run.is_due(update) {
            // Dropped when the receiver lags behind.
            let _ = self.sender.try_send(update.clone());
            self.run.record(update);
        }
    }

    fn freeze(&self) -> FrozenObserver {
        FrozenObserver::new(PROGRESS_REPORT_THRESHOLD)
    }
}

/// Observer that logs progress updates with temporal throttling.
///
/// The first update of every run is logged regardless of the interval.
pub struct LoggingObserver {
    run: RunThrottle,
    min_interval_ms: u64,
    last_time: AtomicU64,
}

impl LoggingObserver {
    /// Create a new logging observer with the given minimum interval.
    #[must_use]
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            run: RunThrottle::new(),
            min_interval_ms,
            last_time: AtomicU64::new(0),
        }
    }
}

impl ProgressObserver for LoggingObserver {
    #[allow(clippy::cast_possible_truncation)]
    fn on_progress(&self, update: &ProgressUpdate) {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        if self.run.enter(update) {
            debug!(
                run = update.gen_index,
                strategy = %update.strategy,
                total = update.total,
                "Tracking new run"
            );
            self.last_time.store(0, Ordering::Relaxed);
        }

        let last_time = self.last_time.load(Ordering::Relaxed);
        if now.saturating_sub(last_time) < self.min_interval_ms && !update.done {
            return;
        }

        if self.run.is_due(update) {
            if update.done {
                info!(
                    strategy = %update.strategy,
                    primes = update.total,
                    "Generation complete"
                );
            } else {
                debug!(
                    strategy = %update.strategy,
                    progress = format!("{:.1}%", update.progress * 100.0),
                    emitted = update.current,
                    total = update.total,
                    "Progress update"
                );
            }
            self.run.record(update);
            self.last_time.store(now, Ordering::Relaxed);
        }
    }

    fn freeze(&self) -> FrozenObserver {
        FrozenObserver::new(PROGRESS_REPORT_THRESHOLD)
    }
}

/// Null object: discards every update.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}

    fn freeze(&self) -> FrozenObserver {
        // Threshold of 1.0 never fires before completion.
        FrozenObserver::new(1.0)
    }
}
