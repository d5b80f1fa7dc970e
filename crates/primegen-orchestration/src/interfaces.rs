//! Orchestration interfaces.

use std::time::Duration;

use primegen_core::generator::PrimeError;
use primegen_core::progress::ProgressUpdate;
use primegen_core::report::PrimeReport;

/// Trait for reporting progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress update.
    fn report(&self, update: &ProgressUpdate);

    /// Report completion.
    fn complete(&self);
}

/// Trait for presenting results to the user.
///
/// Presenters pull entries from the report they are handed; generators
/// never hold a reference to one.
pub trait ResultPresenter {
    /// Present a finished report.
    fn present_report(&self, strategy: &str, report: &PrimeReport);

    /// Present a side-by-side summary of several runs.
    fn present_comparison(&self, results: &[GenerationResult]);

    /// Present an error.
    fn present_error(&self, error: &PrimeError);
}

/// Result of a single generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Strategy name.
    pub strategy: String,
    /// The report or a structured error.
    pub outcome: Result<PrimeReport, PrimeError>,
    /// Wall time spent in the call, including validation.
    pub duration: Duration,
}

impl GenerationResult {
    /// The report, if the run succeeded.
    #[must_use]
    pub fn report(&self) -> Option<&PrimeReport> {
        self.outcome.as_ref().ok()
    }
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn report(&self, _update: &ProgressUpdate) {}
    fn complete(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_reporter() {
        let reporter = NullProgressReporter;
        reporter.report(&ProgressUpdate::new(0, "trial", 0.5, 1, 2));
        reporter.complete();
    }

    #[test]
    fn generation_result_report_accessor() {
        let ok = GenerationResult {
            strategy: "trial".into(),
            outcome: Ok(PrimeReport::empty()),
            duration: Duration::from_millis(1),
        };
        assert!(ok.report().is_some());

        let err = GenerationResult {
            strategy: "trial".into(),
            outcome: Err(PrimeError::Cancelled),
            duration: Duration::from_millis(1),
        };
        assert!(err.report().is_none());
    }
}
