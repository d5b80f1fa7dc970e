//! Lazy prime iterator.

use std::sync::Arc;

use crate::constants::FIRST_CANDIDATE;
use crate::primality::{PrimalityTest, TrialDivision};

/// Lazy iterator over the primes.
///
/// Yields `(index, prime)` pairs with the index starting at 1. The
/// iterator is fused: once the candidate range is exhausted it keeps
/// returning `None`.
///
/// # Example
/// ```
/// use primegen_core::iterator::PrimeIterator;
/// let primes: Vec<i64> = PrimeIterator::new().take(5).map(|(_, p)| p).collect();
/// assert_eq!(primes, [2, 3, 5, 7, 11]);
/// ```
pub struct PrimeIterator {
    test: Arc<dyn PrimalityTest>,
    next_candidate: Option<i64>,
    index: u64,
}

impl PrimeIterator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_test(Arc::new(TrialDivision::new()))
    }

    /// Iterate using a specific primality strategy.
    #[must_use]
    pub fn with_test(test: Arc<dyn PrimalityTest>) -> Self {
        Self {
            test,
            next_candidate: Some(FIRST_CANDIDATE),
            index: 0,
        }
    }
}

impl Default for PrimeIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeIterator {
    type Item = (u64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(candidate) = self.next_candidate {
            self.next_candidate = candidate.checked_add(1);
            if self.test.is_prime(candidate) {
                self.index += 1;
                return Some((self.index, candidate));
            }
        }
        None
    }
}

impl std::iter::FusedIterator for PrimeIterator {}
