//! CLI result presenter.

use std::io::{self, Write};

use chrono::Local;

use primegen_core::generator::PrimeError;
use primegen_core::report::PrimeReport;
use primegen_orchestration::interfaces::{GenerationResult, ResultPresenter};

use crate::output::{
    format_duration, format_number, render_json, render_text, render_values, OutputFormat,
};
use crate::ui;

/// CLI result presenter writing reports to stdout.
pub struct CLIResultPresenter {
    format: OutputFormat,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Render a report to any writer using this presenter's settings.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the writer fails.
    pub fn write_report(&self, out: &mut dyn Write, report: &PrimeReport) -> io::Result<()> {
        match (self.format, self.quiet) {
            (OutputFormat::Json, _) => render_json(out, report),
            (OutputFormat::Text, true) => render_values(out, report),
            (OutputFormat::Text, false) => render_text(out, report, &Local::now()),
        }
    }

    /// Render a comparison table to any writer.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the writer fails.
    pub fn write_comparison(
        &self,
        out: &mut dyn Write,
        results: &[GenerationResult],
    ) -> io::Result<()> {
        writeln!(out, "Comparison Results:")?;
        writeln!(out, "{:-<60}", "")?;
        for result in results {
            let (primes, status) = match &result.outcome {
                Ok(report) => (format_number(report.len() as u64), "OK".to_string()),
                Err(e) => ("-".to_string(), format!("ERROR: {e}")),
            };
            writeln!(
                out,
                "  {:<10} {:>12} {:>10} [{}]",
                result.strategy,
                primes,
                format_duration(result.duration),
                status,
            )?;
        }
        Ok(())
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_report(&self, strategy: &str, report: &PrimeReport) {
        tracing::debug!(strategy, primes = report.len(), "Presenting report");
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.write_report(&mut out, report).and_then(|()| out.flush()) {
            ui::print_error(&format!("failed to write report: {e}"));
        }
    }

    fn present_comparison(&self, results: &[GenerationResult]) {
        if self.quiet || self.format == OutputFormat::Json {
            return;
        }
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.write_comparison(&mut out, results) {
            ui::print_error(&format!("failed to write comparison: {e}"));
        }
    }

    fn present_error(&self, error: &PrimeError) {
        match error {
            PrimeError::Cancelled | PrimeError::Timeout(_) => {
                ui::print_warning(&error.to_string());
            }
            _ => ui::print_error(&error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn report() -> PrimeReport {
        primegen_core::generate(3).unwrap()
    }

    fn render(presenter: &CLIResultPresenter) -> String {
        let mut buf = Vec::new();
        presenter.write_report(&mut buf, &report()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_mode_renders_lines() {
        let text = render(&CLIResultPresenter::new(OutputFormat::Text, false));
        assert!(text.contains("]: Prime #1: 2\n"));
        assert!(text.contains("]: Prime #3: 5\n"));
        assert!(text.contains("Execution time (in seconds): "));
    }

    #[test]
    fn quiet_mode_renders_values() {
        let text = render(&CLIResultPresenter::new(OutputFormat::Text, true));
        assert_eq!(text, "2\n3\n5\n");
    }

    #[test]
    fn json_mode_ignores_quiet() {
        let text = render(&CLIResultPresenter::new(OutputFormat::Json, true));
        assert!(text.trim_start().starts_with('{'));
    }

    #[test]
    fn comparison_table() {
        let presenter = CLIResultPresenter::new(OutputFormat::Text, false);
        let results = vec![
            GenerationResult {
                strategy: "trial".into(),
                outcome: Ok(report()),
                duration: Duration::from_millis(5),
            },
            GenerationResult {
                strategy: "wheel".into(),
                outcome: Err(PrimeError::Cancelled),
                duration: Duration::from_millis(1),
            },
        ];
        let mut buf = Vec::new();
        presenter.write_comparison(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("trial"));
        assert!(text.contains("[OK]"));
        assert!(text.contains("[ERROR: generation cancelled]"));
    }

    #[test]
    fn present_to_stdout_does_not_panic() {
        let presenter = CLIResultPresenter::new(OutputFormat::Text, false);
        presenter.present_report("trial", &report());
        presenter.present_comparison(&[]);
        presenter.present_error(&PrimeError::Mismatch);
        presenter.present_error(&PrimeError::Timeout("1s".into()));
    }
}
