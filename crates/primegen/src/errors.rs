//! Error handling and exit codes.

use primegen_core::constants::exit_codes;
use primegen_core::generator::PrimeError;

/// Map a generation error to the process exit code.
pub fn handle_error(err: &PrimeError) -> i32 {
    match err {
        PrimeError::InvalidArgument(_)
        | PrimeError::Overflow { .. }
        | PrimeError::Calculation(_) => exit_codes::ERROR_GENERIC,
        PrimeError::Config(_) => exit_codes::ERROR_CONFIG,
        PrimeError::Cancelled => exit_codes::ERROR_CANCELED,
        PrimeError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        PrimeError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}
