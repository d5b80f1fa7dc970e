//! Golden file integration tests.
//!
//! Reads tests/testdata/primes_golden.json and checks the convenience
//! entry point, the lazy iterator, and the orchestrated strategies against it.

use std::time::Duration;

use serde::Deserialize;

use primegen_core::generator::PrimeError;
use primegen_core::iterator::PrimeIterator;
use primegen_core::progress::CancellationToken;
use primegen_core::registry::DefaultFactory;
use primegen_orchestration::generator_selection::get_generators_to_run;
use primegen_orchestration::orchestrator::{analyze_comparison_results, execute_generations};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    first_primes: Vec<i64>,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: u64,
    prime: i64,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/primes_golden.json");
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn convenience_entry_point_matches_first_primes() {
    let golden = load_golden_data();
    let report = primegen_core::generate(golden.first_primes.len() as i64).unwrap();
    assert_eq!(report.values().collect::<Vec<_>>(), golden.first_primes);
    let indices: Vec<u64> = report.entries().iter().map(|e| e.index).collect();
    let expected: Vec<u64> = (1..=golden.first_primes.len() as u64).collect();
    assert_eq!(indices, expected);
}

#[test]
fn iterator_matches_golden_values() {
    let golden = load_golden_data();
    for entry in &golden.values {
        let nth = PrimeIterator::new().nth((entry.n - 1) as usize);
        assert_eq!(nth, Some((entry.n, entry.prime)), "p({})", entry.n);
    }
}

#[test]
fn orchestrated_strategies_match_golden() {
    let golden = load_golden_data();
    let max = golden.values.iter().map(|e| e.n).max().unwrap();

    let factory = DefaultFactory::new();
    let generators = get_generators_to_run("all", &factory).unwrap();
    let results = execute_generations(
        &generators,
        max as i64,
        &CancellationToken::new(),
        Some(Duration::from_secs(120)),
    );

    analyze_comparison_results(&results).unwrap();
    for result in &results {
        let entries = result.report().unwrap().entries();
        for entry in &golden.values {
            assert_eq!(
                entries[(entry.n - 1) as usize].value,
                entry.prime,
                "{}: p({})",
                result.strategy,
                entry.n
            );
        }
    }
}

#[test]
fn small_counts_and_edge_cases() {
    let five = primegen_core::generate(5).unwrap();
    assert_eq!(
        five.sequence(),
        [(1, 2), (2, 3), (3, 5), (4, 7), (5, 11)]
    );

    let one = primegen_core::generate(1).unwrap();
    assert_eq!(one.sequence(), [(1, 2)]);

    let zero = primegen_core::generate(0).unwrap();
    assert!(zero.is_empty());
    assert_eq!(zero.elapsed(), Duration::ZERO);

    assert!(matches!(
        primegen_core::generate(-1),
        Err(PrimeError::InvalidArgument(_))
    ));
}
