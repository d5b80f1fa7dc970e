//! Constants for prime generation and process exit codes.

/// Default number of primes when the caller does not ask for a count.
pub const DEFAULT_COUNT: i64 = 500;

/// Minimum progress change (1%) before reporting an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// First candidate tested by every generator.
pub const FIRST_CANDIDATE: i64 = 0;

/// Smallest prime.
pub const FIRST_PRIME: i64 = 2;

/// Format used for the wall-clock stamp on rendered lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (invalid argument, overflow).
    pub const ERROR_GENERIC: i32 = 1;
    /// Generation timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Strategies disagreed during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Generation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
