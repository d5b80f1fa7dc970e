//! Observer pattern for progress tracking.
//!
//! Generators hold a `FrozenObserver` in the candidate loop so that the
//! per-prime check is a single atomic load.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);

    /// Create a frozen snapshot for lock-free access in hot loops.
    fn freeze(&self) -> FrozenObserver;
}

/// A frozen observer that can be used in hot loops without locks.
pub struct FrozenObserver {
    progress: Arc<AtomicU64>,
    threshold: f64,
}

impl FrozenObserver {
    /// Create a new frozen observer with the given reporting threshold.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            progress: Arc::new(AtomicU64::new(0)),
            threshold,
        }
    }

    /// Check if progress has changed enough to warrant reporting.
    #[inline]
    #[must_use]
    pub fn should_report(&self, new_progress: f64) -> bool {
        let current = f64::from_bits(self.progress.load(Ordering::Relaxed));
        (new_progress - current) >= self.threshold
    }

    /// Update the stored progress value.
    pub fn update(&self, new_progress: f64) {
        self.progress
            .store(new_progress.to_bits(), Ordering::Relaxed);
    }

    /// Get the current progress value.
    #[must_use]
    pub fn current(&self) -> f64 {
        f64::from_bits(self.progress.load(Ordering::Relaxed))
    }
}

/// Subject that fans progress out to a collection of observers.
pub struct ProgressSubject {
    observers: RwLock<Vec<Arc<dyn ProgressObserver>>>,
}

impl ProgressSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn ProgressObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of a progress update.
    pub fn notify(&self, update: &ProgressUpdate) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_progress(update);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for ProgressSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ProgressSubject {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.notify(update);
    }

    fn freeze(&self) -> FrozenObserver {
        // Finest threshold among registered observers.
        let threshold = self
            .observers
            .read()
            .iter()
            .map(|o| o.freeze().threshold)
            .fold(1.0_f64, f64::min);
        FrozenObserver::new(threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    use crate::constants::PROGRESS_REPORT_THRESHOLD;
    use crate::observers::NoOpObserver;

    struct CountingObserver {
        count: AtomicUsize,
    }

    impl CountingObserver {
        fn new() -> Self {
            Self {
                count: AtomicUsize::new(0),
            }
        }
    }

    impl ProgressObserver for CountingObserver {
        fn on_progress(&self, _update: &ProgressUpdate) {
            self.count.fetch_add(1, Ordering::Relaxed);
        }

        fn freeze(&self) -> FrozenObserver {
            FrozenObserver::new(PROGRESS_REPORT_THRESHOLD)
        }
    }

    #[test]
    fn frozen_observer_should_report() {
        let frozen = FrozenObserver::new(PROGRESS_REPORT_THRESHOLD);
        assert!(frozen.should_report(0.02));
        frozen.update(0.02);
        assert!(!frozen.should_report(0.025));
        assert!(frozen.should_report(0.04));
    }

    #[test]
    fn frozen_observer_initial_progress_is_zero() {
        let frozen = FrozenObserver::new(0.05);
        assert!(frozen.current().abs() < f64::EPSILON);
    }

    #[test]
    fn frozen_observer_zero_threshold_always_reports() {
        let frozen = FrozenObserver::new(0.0);
        assert!(frozen.should_report(0.0));
        frozen.update(0.0);
        assert!(frozen.should_report(0.001));
    }

    #[test]
    fn subject_register_and_clear() {
        let subject = ProgressSubject::new();
        assert_eq!(subject.count(), 0);

        subject.register(Arc::new(NoOpObserver::new()));
        subject.register(Arc::new(NoOpObserver::new()));
        assert_eq!(subject.count(), 2);

        subject.clear();
        assert_eq!(subject.count(), 0);
    }

    #[test]
    fn subject_notify_calls_all_observers() {
        let subject = ProgressSubject::new();
        let obs1 = Arc::new(CountingObserver::new());
        let obs2 = Arc::new(CountingObserver::new());

        subject.register(obs1.clone());
        subject.register(obs2.clone());

        let update = ProgressUpdate::new(0, "trial", 0.5, 1, 2);
        subject.notify(&update);
        subject.on_progress(&update);

        assert_eq!(obs1.count.load(Ordering::Relaxed), 2);
        assert_eq!(obs2.count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn subject_freeze_uses_finest_threshold() {
        let subject = ProgressSubject::default();
        assert!(!subject.freeze().should_report(0.5));

        subject.register(Arc::new(NoOpObserver::new()));
        subject.register(Arc::new(CountingObserver::new()));
        let frozen = subject.freeze();
        assert!(frozen.should_report(PROGRESS_REPORT_THRESHOLD));
    }
}
