//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use primegen_cli::OutputFormat;
use primegen_core::constants::DEFAULT_COUNT;

/// Fallback when `--timeout` cannot be parsed.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Generate the first N prime numbers and time the run.
#[derive(Parser, Debug)]
#[command(name = "primegen", version, about)]
pub struct AppConfig {
    /// Number of primes to generate.
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_COUNT,
        env = "PRIMEGEN_COUNT",
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// Primality strategy: trial, wheel, or all.
    #[arg(long, default_value = "trial")]
    pub strategy: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Quiet mode (only print the primes).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show a progress bar on stderr.
    #[arg(long)]
    pub progress: bool,

    /// Timeout duration (e.g., "500ms", "30s", "5m", "1h").
    #[arg(long, default_value = "5m")]
    pub timeout: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse timeout string into Duration.
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        parse_duration(&self.timeout).unwrap_or(DEFAULT_TIMEOUT)
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms" or bare seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        Some(Duration::from_millis(ms.parse().ok()?))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Some(Duration::from_secs(secs.parse().ok()?))
    } else {
        Some(Duration::from_secs(s.parse().ok()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        let mut argv = vec!["primegen"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_duration(" 7 "), Some(Duration::from_secs(7)));
    }

    #[test]
    fn parse_duration_rejects_garbage() {
        assert_eq!(parse_duration("soon"), None);
        assert_eq!(parse_duration("-5s"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn bad_timeout_falls_back() {
        let config = parse(&["--timeout", "forever"]);
        assert_eq!(config.timeout_duration(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.strategy, "trial");
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.quiet);
        assert!(config.completion.is_none());
    }

    #[test]
    fn negative_count_parses() {
        let config = parse(&["-n", "-1"]);
        assert_eq!(config.count, -1);
    }

    #[test]
    fn json_format_flag() {
        let config = parse(&["--format", "json", "--count", "3"]);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.count, 3);
    }
}
