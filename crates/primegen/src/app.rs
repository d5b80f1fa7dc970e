//! Application entry point and dispatch.

use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use primegen_cli::presenter::CLIResultPresenter;
use primegen_cli::progress::{spawn_progress_drain, CLIProgressReporter};
use primegen_core::constants::exit_codes;
use primegen_core::observer::ProgressSubject;
use primegen_core::observers::{ChannelObserver, LoggingObserver};
use primegen_core::progress::CancellationToken;
use primegen_core::registry::DefaultFactory;
use primegen_orchestration::generator_selection::get_generators_to_run;
use primegen_orchestration::interfaces::{GenerationResult, ResultPresenter};
use primegen_orchestration::orchestrator::{
    analyze_comparison_results, execute_generations_with_observer,
};

use crate::config::AppConfig;
use crate::errors::handle_error;
use crate::version::full_version;

/// Minimum gap between progress log lines.
const LOG_INTERVAL_MS: u64 = 500;

/// Capacity of the progress channel feeding the bar.
const PROGRESS_CHANNEL_CAPACITY: usize = 64;

/// Run the application, returning the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        primegen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    debug!(version = %full_version(), count = config.count, strategy = %config.strategy, "Starting");
    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<i32> {
    let presenter = CLIResultPresenter::new(config.format, config.quiet);

    let factory = DefaultFactory::new();
    let generators = match get_generators_to_run(&config.strategy, &factory) {
        Ok(generators) => generators,
        Err(e) => {
            presenter.present_error(&e);
            return Ok(handle_error(&e));
        }
    };

    let cancel = CancellationToken::new();
    install_ctrlc_handler(cancel.clone())?;

    let results = generate_with_progress(config, &generators, &cancel);
    present_results(&presenter, &results)
}

/// Run the generators, feeding a progress bar when one was asked for.
fn generate_with_progress(
    config: &AppConfig,
    generators: &[Arc<dyn primegen_core::Generator>],
    cancel: &CancellationToken,
) -> Vec<GenerationResult> {
    let subject = ProgressSubject::new();
    subject.register(Arc::new(LoggingObserver::new(LOG_INTERVAL_MS)));

    let drain = if config.progress && !config.quiet {
        let (tx, rx) = crossbeam_channel::bounded(PROGRESS_CHANNEL_CAPACITY);
        subject.register(Arc::new(ChannelObserver::new(tx)));
        Some(spawn_progress_drain(rx, CLIProgressReporter::new()))
    } else {
        None
    };

    let timeout = Some(config.timeout_duration());
    let results =
        execute_generations_with_observer(generators, config.count, cancel, timeout, &subject);

    // Dropping the channel observer closes the channel and ends the drain.
    subject.clear();
    if let Some(handle) = drain {
        finish_drain(handle);
    }

    results
}

fn present_results(presenter: &CLIResultPresenter, results: &[GenerationResult]) -> Result<i32> {
    let mut exit_code = exit_codes::SUCCESS;

    if let Some(result) = results.iter().find(|r| r.outcome.is_ok()) {
        if let Ok(report) = &result.outcome {
            presenter.present_report(&result.strategy, report);
        }
    }

    for result in results {
        if let Err(e) = &result.outcome {
            presenter.present_error(e);
            if exit_code == exit_codes::SUCCESS {
                exit_code = handle_error(e);
            }
        }
    }

    if has_comparison(results) {
        presenter.present_comparison(results);
        if let Err(e) = analyze_comparison_results(results) {
            presenter.present_error(&e);
            if exit_code == exit_codes::SUCCESS {
                exit_code = handle_error(&e);
            }
        }
    }

    Ok(exit_code)
}

/// Wait for the progress display; a panic there never fails the run.
fn finish_drain<R>(handle: JoinHandle<R>) {
    if handle.join().is_err() {
        warn!("progress display thread panicked");
    }
}

/// A comparison needs several runs and at least one report; failed runs
/// have already been shown as errors.
fn has_comparison(results: &[GenerationResult]) -> bool {
    results.len() > 1 && results.iter().any(|r| r.outcome.is_ok())
}

fn install_ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("failed to install Ctrl+C handler")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use primegen_cli::OutputFormat;
    use primegen_core::generator::PrimeError;

    fn presenter() -> CLIResultPresenter {
        CLIResultPresenter::new(OutputFormat::Text, true)
    }

    fn ok(strategy: &str, count: i64) -> GenerationResult {
        GenerationResult {
            strategy: strategy.into(),
            outcome: primegen_core::generate(count),
            duration: Duration::from_millis(1),
        }
    }

    fn err(strategy: &str, e: PrimeError) -> GenerationResult {
        GenerationResult {
            strategy: strategy.into(),
            outcome: Err(e),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn success_exit_code() {
        let code = present_results(&presenter(), &[ok("trial", 3)]).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn first_error_sets_exit_code() {
        let results = [
            ok("trial", 3),
            err("wheel", PrimeError::Timeout("5m".into())),
        ];
        let code = present_results(&presenter(), &results).unwrap();
        assert_eq!(code, exit_codes::ERROR_TIMEOUT);
    }

    #[test]
    fn mismatch_exit_code() {
        let code = present_results(&presenter(), &[ok("trial", 3), ok("wheel", 4)]).unwrap();
        assert_eq!(code, exit_codes::ERROR_MISMATCH);
    }

    #[test]
    fn all_failed_runs_skip_comparison() {
        let results = [
            err("trial", PrimeError::InvalidArgument("-1".into())),
            err("wheel", PrimeError::InvalidArgument("-1".into())),
        ];
        assert!(!has_comparison(&results));
        let code = present_results(&presenter(), &results).unwrap();
        assert_eq!(code, exit_codes::ERROR_GENERIC);
    }

    #[test]
    fn comparison_needs_several_runs_and_one_report() {
        assert!(!has_comparison(&[ok("trial", 3)]));
        assert!(has_comparison(&[
            ok("trial", 3),
            err("wheel", PrimeError::Cancelled)
        ]));
    }

    #[test]
    fn panicking_progress_thread_is_contained() {
        finish_drain(std::thread::spawn(|| panic!("display failed")));
        finish_drain(std::thread::spawn(|| 7));
    }

    #[test]
    fn invalid_argument_exit_code() {
        let results = [err("trial", PrimeError::InvalidArgument("-1".into()))];
        let code = present_results(&presenter(), &results).unwrap();
        assert_eq!(code, exit_codes::ERROR_GENERIC);
    }
}
