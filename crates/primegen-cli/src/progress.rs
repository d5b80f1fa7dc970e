//! Progress bar display.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::JoinHandle;

use crossbeam_channel::Receiver;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use primegen_core::progress::ProgressUpdate;
use primegen_orchestration::interfaces::ProgressReporter;

const BAR_TEMPLATE: &str = "{msg:>6} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} primes ({eta})";

/// Progress reporter drawing an `indicatif` bar on stderr.
///
/// The bar restarts whenever updates switch to another generator run.
pub struct CLIProgressReporter {
    bar: ProgressBar,
    gen_index: AtomicUsize,
}

impl CLIProgressReporter {
    /// Create a reporter drawing to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a reporter that draws nothing (tests, quiet mode).
    #[must_use]
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self {
            bar,
            gen_index: AtomicUsize::new(usize::MAX),
        }
    }

    /// Current position of the bar.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Whether the bar has been finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Default for CLIProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for CLIProgressReporter {
    fn report(&self, update: &ProgressUpdate) {
        let previous = self.gen_index.swap(update.gen_index, Ordering::Relaxed);
        if previous != update.gen_index || self.bar.length() != Some(update.total) {
            self.bar.set_length(update.total);
            self.bar.reset();
        }
        self.bar.set_message(update.strategy);
        self.bar.set_position(update.current);
    }

    fn complete(&self) {
        self.bar.finish_and_clear();
    }
}

/// Drain progress updates on a background thread until every sender is dropped.
pub fn spawn_progress_drain<R>(rx: Receiver<ProgressUpdate>, reporter: R) -> JoinHandle<R>
where
    R: ProgressReporter + 'static,
{
    std::thread::spawn(move || {
        for update in &rx {
            reporter.report(&update);
        }
        reporter.complete();
        reporter
    })
}
