//! Primality tests.
//!
//! Both strategies answer the same question: `v` is prime iff `v >= 2` and
//! no `d` in `2..=isqrt(v)` divides it. They differ only in which divisors
//! they bother to try.

use num_integer::Roots;

/// A primality predicate over signed 64-bit candidates.
pub trait PrimalityTest: Send + Sync {
    /// Whether `candidate` is prime. Negative numbers, 0 and 1 are not.
    fn is_prime(&self, candidate: i64) -> bool;

    /// Short strategy name.
    fn name(&self) -> &'static str;
}

/// Plain trial division by every integer up to the square root.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl TrialDivision {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PrimalityTest for TrialDivision {
    fn is_prime(&self, candidate: i64) -> bool {
        if candidate < 2 {
            return false;
        }
        let bound = candidate.sqrt();
        (2..=bound).all(|d| candidate % d != 0)
    }

    fn name(&self) -> &'static str {
        "trial"
    }
}

/// Trial division on a 2·3 wheel: after 2 and 3 only `6k ± 1` divisors are tried.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelDivision;

impl WheelDivision {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PrimalityTest for WheelDivision {
    fn is_prime(&self, candidate: i64) -> bool {
        if candidate < 2 {
            return false;
        }
        if candidate < 4 {
            return true;
        }
        if candidate % 2 == 0 || candidate % 3 == 0 {
            return false;
        }
        let bound = candidate.sqrt();
        let mut d = 5;
        while d <= bound {
            if candidate % d == 0 || candidate % (d + 2) == 0 {
                return false;
            }
            d += 6;
        }
        true
    }

    fn name(&self) -> &'static str {
        "wheel"
    }
}

/// Reference primality check (plain trial division).
///
/// # Example
/// ```
/// assert!(primegen_core::primality::is_prime(7919));
/// assert!(!primegen_core::primality::is_prime(1));
/// ```
#[inline]
#[must_use]
pub fn is_prime(candidate: i64) -> bool {
    TrialDivision.is_prime(candidate)
}
