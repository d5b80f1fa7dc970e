//! Core orchestration: run execution and result analysis.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use primegen_core::generator::{Generator, PrimeError};
use primegen_core::observer::ProgressObserver;
use primegen_core::observers::NoOpObserver;
use primegen_core::progress::{CancelSignal, CancellationToken, TimeoutCancellationToken};

use crate::interfaces::GenerationResult;

/// Run every given generator for `count` primes.
pub fn execute_generations(
    generators: &[Arc<dyn Generator>],
    count: i64,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
) -> Vec<GenerationResult> {
    execute_generations_with_observer(generators, count, cancel, timeout, &NoOpObserver::new())
}

/// Run every given generator for `count` primes, reporting progress to `observer`.
///
/// Generators run one after another on the calling thread. The timeout is
/// a single deadline shared by all runs, measured from this call.
pub fn execute_generations_with_observer(
    generators: &[Arc<dyn Generator>],
    count: i64,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
    observer: &dyn ProgressObserver,
) -> Vec<GenerationResult> {
    let deadline = timeout.map(|t| TimeoutCancellationToken::wrap(cancel.clone(), t));
    let signal: &dyn CancelSignal = match &deadline {
        Some(token) => token as &dyn CancelSignal,
        None => cancel as &dyn CancelSignal,
    };

    generators
        .iter()
        .enumerate()
        .map(|(i, gen)| {
            let start = Instant::now();
            let outcome = gen.generate(signal, observer, i, count);
            let duration = start.elapsed();

            match &outcome {
                Ok(report) => debug!(
                    strategy = gen.name(),
                    primes = report.len(),
                    elapsed_secs = report.elapsed_secs(),
                    "Run succeeded"
                ),
                Err(e) => warn!(strategy = gen.name(), error = %e, "Run failed"),
            }

            GenerationResult {
                strategy: gen.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Check that every successful run produced the same prime sequence.
pub fn analyze_comparison_results(results: &[GenerationResult]) -> Result<(), PrimeError> {
    let mut reports = results.iter().filter_map(GenerationResult::report);

    let Some(first) = reports.next() else {
        return Err(PrimeError::Calculation("no valid results".into()));
    };

    let expected = first.sequence();
    for report in reports {
        if report.sequence() != expected {
            return Err(PrimeError::Mismatch);
        }
    }

    Ok(())
}
