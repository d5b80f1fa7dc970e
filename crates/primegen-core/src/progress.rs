//! Progress tracking types and cancellation tokens.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::generator::PrimeError;

/// Progress update sent from generators to observers.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Generator index (for multi-strategy runs).
    pub gen_index: usize,
    /// Name of the strategy producing this update.
    pub strategy: &'static str,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Number of primes emitted so far.
    pub current: u64,
    /// Number of primes requested.
    pub total: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a new progress update.
    #[must_use]
    pub fn new(
        gen_index: usize,
        strategy: &'static str,
        progress: f64,
        current: u64,
        total: u64,
    ) -> Self {
        Self {
            gen_index,
            strategy,
            progress,
            current,
            total,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(gen_index: usize, strategy: &'static str, total: u64) -> Self {
        Self {
            gen_index,
            strategy,
            progress: 1.0,
            current: total,
            total,
            done: true,
        }
    }
}

/// Fraction of the requested primes already emitted.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fraction_done(emitted: u64, total: u64) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (emitted as f64 / total as f64).clamp(0.0, 1.0)
}

/// Anything a generator can poll between candidate tests.
pub trait CancelSignal: Send + Sync {
    /// Return an error if the run should stop.
    fn check_cancelled(&self) -> Result<(), PrimeError>;
}

/// Cooperative cancellation token using an atomic flag.
///
/// # Example
/// ```
/// use primegen_core::progress::{CancelSignal, CancellationToken};
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelSignal for CancellationToken {
    fn check_cancelled(&self) -> Result<(), PrimeError> {
        if self.is_cancelled() {
            Err(PrimeError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// A cancellation token with a deadline.
///
/// The token is considered cancelled if either `cancel()` was called
/// or the deadline has passed. Manual cancellation wins over the deadline
/// when both apply. A timeout too large to represent as an `Instant`
/// leaves the token without a deadline.
#[derive(Clone)]
pub struct TimeoutCancellationToken {
    inner: CancellationToken,
    deadline: Option<Instant>,
    timeout: Duration,
}

impl TimeoutCancellationToken {
    /// Create a token with a fresh inner flag.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self::wrap(CancellationToken::new(), timeout)
    }

    /// Attach a deadline to an existing token, sharing its flag.
    #[must_use]
    pub fn wrap(inner: CancellationToken, timeout: Duration) -> Self {
        Self {
            inner,
            deadline: Instant::now().checked_add(timeout),
            timeout,
        }
    }

    /// Check if cancellation has been requested (either manual or timeout).
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled() || self.expired()
    }

    /// Request manual cancellation.
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    /// Get the remaining time before the deadline (`Duration::MAX` without one).
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.deadline
            .map_or(Duration::MAX, |d| d.saturating_duration_since(Instant::now()))
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Get the inner `CancellationToken`.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.inner
    }
}

impl CancelSignal for TimeoutCancellationToken {
    fn check_cancelled(&self) -> Result<(), PrimeError> {
        self.inner.check_cancelled()?;
        if self.expired() {
            return Err(PrimeError::Timeout(format!("{:?}", self.timeout)));
        }
        Ok(())
    }
}
