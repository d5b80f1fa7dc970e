//! Generator trait, error type, and the `PrimeGenerator` implementation.
//!
//! `Generator` is the public trait consumed by orchestration.
//! `PrimeGenerator` scans candidates upward from 0 with a pluggable
//! `PrimalityTest` and stops once the requested number of primes is found.

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use tracing::debug;

use crate::constants::FIRST_CANDIDATE;
use crate::observer::ProgressObserver;
use crate::primality::PrimalityTest;
use crate::progress::{fraction_done, CancelSignal, ProgressUpdate};
use crate::report::{PrimeEntry, PrimeReport};

/// Upper bound on entries reserved up front; larger runs grow the vector.
const MAX_PREALLOCATED_ENTRIES: u64 = 1 << 20;

/// Error type for prime generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimeError {
    /// The requested count was negative.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The candidate passed `i64::MAX` before enough primes were found.
    #[error("candidate overflow after {emitted} of {requested} primes")]
    Overflow {
        /// Primes found before the range ran out.
        emitted: u64,
        /// Primes requested.
        requested: u64,
    },

    /// Generation was cancelled.
    #[error("generation cancelled")]
    Cancelled,

    /// Generation hit its deadline.
    #[error("generation timed out after {0}")]
    Timeout(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// No usable result was produced.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Strategies produced different prime sequences.
    #[error("result mismatch between strategies")]
    Mismatch,
}

/// Public trait for prime generators, consumed by orchestration.
pub trait Generator: Send + Sync {
    /// Produce the first `count` primes.
    ///
    /// `cancel` is polled between candidate tests; `gen_index` tags
    /// progress updates when several generators report to one observer.
    fn generate(
        &self,
        cancel: &dyn CancelSignal,
        observer: &dyn ProgressObserver,
        gen_index: usize,
        count: i64,
    ) -> Result<PrimeReport, PrimeError>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// Bounded prime generator over a primality strategy.
pub struct PrimeGenerator {
    test: Arc<dyn PrimalityTest>,
    first_candidate: i64,
}

impl PrimeGenerator {
    /// Create a generator using the given primality test.
    #[must_use]
    pub fn new(test: Arc<dyn PrimalityTest>) -> Self {
        Self {
            test,
            first_candidate: FIRST_CANDIDATE,
        }
    }

    #[cfg(test)]
    fn starting_at(test: Arc<dyn PrimalityTest>, first_candidate: i64) -> Self {
        Self {
            test,
            first_candidate,
        }
    }

    fn validate_count(count: i64) -> Result<u64, PrimeError> {
        u64::try_from(count).map_err(|_| {
            PrimeError::InvalidArgument(format!("count must be non-negative, got {count}"))
        })
    }
}

impl Generator for PrimeGenerator {
    #[allow(clippy::cast_possible_truncation)]
    fn generate(
        &self,
        cancel: &dyn CancelSignal,
        observer: &dyn ProgressObserver,
        gen_index: usize,
        count: i64,
    ) -> Result<PrimeReport, PrimeError> {
        let requested = Self::validate_count(count)?;
        let strategy = self.test.name();

        if requested == 0 {
            observer.on_progress(&ProgressUpdate::done(gen_index, strategy, 0));
            return Ok(PrimeReport::empty());
        }

        debug!(strategy, count = requested, "Starting prime generation");

        let frozen = observer.freeze();
        let mut entries = Vec::with_capacity(requested.min(MAX_PREALLOCATED_ENTRIES) as usize);
        let mut candidate = self.first_candidate;

        let start = Instant::now();
        loop {
            cancel.check_cancelled()?;

            if self.test.is_prime(candidate) {
                let index = entries.len() as u64 + 1;
                entries.push(PrimeEntry::new(index, candidate, Local::now()));
                if index == requested {
                    break;
                }

                let progress = fraction_done(index, requested);
                if frozen.should_report(progress) {
                    observer.on_progress(&ProgressUpdate::new(
                        gen_index, strategy, progress, index, requested,
                    ));
                    frozen.update(progress);
                }
            }

            candidate = candidate.checked_add(1).ok_or(PrimeError::Overflow {
                emitted: entries.len() as u64,
                requested,
            })?;
        }
        let elapsed = start.elapsed();

        observer.on_progress(&ProgressUpdate::done(gen_index, strategy, requested));
        debug!(
            strategy,
            count = requested,
            last = candidate,
            elapsed_secs = elapsed.as_secs_f64(),
            "Prime generation finished"
        );

        Ok(PrimeReport::new(entries, elapsed))
    }

    fn name(&self) -> &str {
        self.test.name()
    }
}
