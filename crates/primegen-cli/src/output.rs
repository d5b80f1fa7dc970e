//! Report rendering.
//!
//! Text output keeps one line per prime, then a blank line and the
//! execution-time line:
//!
//! ```text
//! [2026-10-17 09:14:03]: Prime #1: 2
//! [2026-10-17 09:14:03]: Prime #2: 3
//!
//! [2026-10-17 09:14:03]: Execution time (in seconds): 0.000012.
//! ```

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Local};
use clap::ValueEnum;

use primegen_core::constants::TIMESTAMP_FORMAT;
use primegen_core::report::{PrimeEntry, PrimeReport};

/// How a report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Timestamped lines.
    #[default]
    Text,
    /// The serialized report.
    Json,
}

/// Format a wall-clock instant for a rendered line.
#[must_use]
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Format elapsed seconds, always with a fractional part.
#[must_use]
pub fn format_secs(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{secs:.1}")
    } else {
        format!("{secs}")
    }
}

/// One line per emitted prime.
#[must_use]
pub fn format_entry(entry: &PrimeEntry) -> String {
    format!(
        "[{}]: Prime #{}: {}",
        format_timestamp(&entry.timestamp),
        entry.index,
        entry.value
    )
}

/// The closing execution-time line.
#[must_use]
pub fn format_elapsed(report: &PrimeReport, at: &DateTime<Local>) -> String {
    format!(
        "[{}]: Execution time (in seconds): {}.",
        format_timestamp(at),
        format_secs(report.elapsed_secs())
    )
}

/// Write the text rendering, stamping the elapsed line with `rendered_at`.
///
/// # Errors
///
/// Returns an I/O error if the writer fails.
pub fn render_text(
    out: &mut dyn Write,
    report: &PrimeReport,
    rendered_at: &DateTime<Local>,
) -> io::Result<()> {
    for entry in report {
        writeln!(out, "{}", format_entry(entry))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", format_elapsed(report, rendered_at))?;
    Ok(())
}

/// Write bare values, one per line.
///
/// # Errors
///
/// Returns an I/O error if the writer fails.
pub fn render_values(out: &mut dyn Write, report: &PrimeReport) -> io::Result<()> {
    for value in report.values() {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Write the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if serialization or the writer fails.
pub fn render_json(out: &mut dyn Write, report: &PrimeReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
