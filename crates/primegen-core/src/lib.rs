//! # primegen-core
//!
//! Core library for PrimeGen-rs. Generates the first N primes by trial
//! division, stamping each with its index and the wall-clock time it was
//! found, and measures how long the run took.

pub mod constants;
pub mod generator;
pub mod iterator;
pub mod observer;
pub mod observers;
pub mod primality;
pub mod progress;
pub mod registry;
pub mod report;

// Re-exports
pub use constants::{exit_codes, DEFAULT_COUNT, PROGRESS_REPORT_THRESHOLD};
pub use generator::{Generator, PrimeError, PrimeGenerator};
pub use observer::{ProgressObserver, ProgressSubject};
pub use primality::{PrimalityTest, TrialDivision, WheelDivision};
pub use progress::{CancelSignal, CancellationToken, ProgressUpdate, TimeoutCancellationToken};
pub use registry::{DefaultFactory, GeneratorFactory};
pub use report::{PrimeEntry, PrimeReport};

/// Generate the first `count` primes with trial division.
///
/// This is a convenience function for simple use cases. For cancellation,
/// progress reporting or another strategy, use the `Generator` trait
/// directly.
///
/// # Example
/// ```
/// let report = primegen_core::generate(5).unwrap();
/// assert_eq!(report.values().collect::<Vec<_>>(), [2, 3, 5, 7, 11]);
/// assert!(primegen_core::generate(-1).is_err());
/// ```
pub fn generate(count: i64) -> Result<PrimeReport, PrimeError> {
    use observers::NoOpObserver;

    let gen = PrimeGenerator::new(std::sync::Arc::new(TrialDivision::new()));
    gen.generate(&CancellationToken::new(), &NoOpObserver::new(), 0, count)
}
