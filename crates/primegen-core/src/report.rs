//! Generation results.

use std::time::Duration;

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

/// One emitted prime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimeEntry {
    /// 1-based position in the report.
    pub index: u64,
    /// The prime itself.
    pub value: i64,
    /// Wall-clock time at which the prime was found.
    pub timestamp: DateTime<Local>,
}

impl PrimeEntry {
    #[must_use]
    pub fn new(index: u64, value: i64, timestamp: DateTime<Local>) -> Self {
        Self {
            index,
            value,
            timestamp,
        }
    }
}

/// The ordered result of one generation run.
///
/// Indices run `1..=len()`, values strictly increase and are all prime.
/// A report is only ever built for a run that reached its requested count.
#[derive(Debug, Clone, Serialize)]
pub struct PrimeReport {
    entries: Vec<PrimeEntry>,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    elapsed: Duration,
}

impl PrimeReport {
    /// Build a report from already-validated entries.
    #[must_use]
    pub fn new(entries: Vec<PrimeEntry>, elapsed: Duration) -> Self {
        Self { entries, elapsed }
    }

    /// Report for a zero-count request.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), Duration::ZERO)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[PrimeEntry] {
        &self.entries
    }

    /// The primes alone, in order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    /// `(index, value)` pairs, dropping timestamps. Two runs for the same
    /// count compare equal on this.
    #[must_use]
    pub fn sequence(&self) -> Vec<(u64, i64)> {
        self.entries.iter().map(|e| (e.index, e.value)).collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<&PrimeEntry> {
        self.entries.last()
    }

    /// Monotonic time from the first candidate test to the last prime.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in fractional seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Consume the report, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<PrimeEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a PrimeReport {
    type Item = &'a PrimeEntry;
    type IntoIter = std::slice::Iter<'a, PrimeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn serialize_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
